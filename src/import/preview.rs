use std::fmt::Write;

use survey_markdown::{ParsedQuestion, ParsedSurvey, QuestionType};

fn type_label(question_type: QuestionType) -> &'static str {
    match question_type {
        QuestionType::MultipleChoice => "multiple choice",
        QuestionType::Text => "free text",
        QuestionType::Ranking => "ranking",
    }
}

fn write_question(out: &mut String, position: usize, q: &ParsedQuestion) -> std::fmt::Result {
    writeln!(out, "{}. {}", position, q.question_text)?;
    write!(out, "   {}", type_label(q.question_type))?;
    if q.is_multiple_select {
        write!(out, " (multiple select)")?;
    }
    if let Some(max) = q.max_selections {
        write!(out, " (max {})", max)?;
    }
    writeln!(out)?;
    for option in q.options.iter() {
        writeln!(out, "   - {}", option)?;
    }
    Ok(())
}

fn write_survey(out: &mut String, survey: &ParsedSurvey) -> std::fmt::Result {
    writeln!(out, "{}", survey.title)?;
    writeln!(out, "{}", survey.description)?;
    writeln!(out, "{} questions", survey.questions.len())?;
    if !survey.questions.is_empty() {
        writeln!(out)?;
    }
    for (idx, q) in survey.questions.iter().enumerate() {
        write_question(out, idx + 1, q)?;
    }
    Ok(())
}

/// A readable summary of a survey, for checking a document before importing it.
pub fn render_preview(survey: &ParsedSurvey) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_survey(&mut out, survey);
    out
}
