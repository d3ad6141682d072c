mod config;
use log::{debug, info};

// Editors may save a byte order mark in front of the first line. It is not whitespace for
// `str::trim`, and would hide the marker of that line.
const BYTE_ORDER_MARK: char = '\u{feff}';

pub use crate::config::*;

pub mod builder;
pub mod manual;
pub mod quick_start;

// **** Private structures ****

/// What a line of the document does, once its marker is recognized.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
enum LineKind {
    Ranking,
    TextQuestion,
    MultiSelectQuestion,
    SingleSelectQuestion,
    Description,
    Title,
    Choice,
}

// The heading markers share their leading characters, so the table is scanned in order
// and must stay sorted from the most specific marker to the least specific one.
const MARKERS: [(&str, LineKind); 7] = [
    (RANKING_MARKER, LineKind::Ranking),
    (TEXT_MARKER, LineKind::TextQuestion),
    (MULTI_SELECT_MARKER, LineKind::MultiSelectQuestion),
    (SINGLE_SELECT_MARKER, LineKind::SingleSelectQuestion),
    (DESCRIPTION_MARKER, LineKind::Description),
    (TITLE_MARKER, LineKind::Title),
    (OPTION_MARKER, LineKind::Choice),
];

/// Finds the first marker of the table that starts the line.
///
/// Returns the kind of the line and the content after the marker, trimmed.
fn classify(line: &str) -> Option<(LineKind, &str)> {
    MARKERS.iter().find_map(|(marker, kind)| {
        line.strip_prefix(marker)
            .map(|content| (*kind, content.trim()))
    })
}

/// Reads the selection cap and the text of a ranking line such as `$$$1-3 Pick three`.
///
/// Only the token before the first space is inspected. The cap is the number after the
/// first `-` of that token. When there is no number there, the default cap is used.
fn read_ranking(line: &str) -> (u32, &str) {
    let (token, text) = match line.split_once(' ') {
        Some((token, rest)) => (token, rest.trim()),
        // No question text: the line itself is kept, as earlier versions of the importer did.
        None => (line, line),
    };
    let max_selections = token
        .split_once('-')
        .and_then(|(_, limit)| leading_number(limit))
        .unwrap_or(DEFAULT_MAX_SELECTIONS);
    (max_selections, text)
}

// Reads the digits at the start of the string, ignoring what follows them.
// Numbers too large for a u32 saturate.
fn leading_number(s: &str) -> Option<u32> {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(idx, _)| idx)
        .unwrap_or(s.len());
    let digits = &s[..end];
    if digits.is_empty() {
        return None;
    }
    // Only digits are left, so parsing can only fail on overflow.
    Some(digits.parse::<u32>().unwrap_or(u32::MAX))
}

/// Accumulates the content of a document, one line at a time.
#[derive(Debug, Default)]
struct SurveyReader {
    title: Option<String>,
    description: Option<String>,
    // The question that is still collecting options.
    current: Option<ParsedQuestion>,
    questions: Vec<ParsedQuestion>,
}

impl SurveyReader {
    fn read_line(&mut self, lineno: usize, line: &str) {
        let (kind, content) = match classify(line) {
            Some(x) => x,
            None => {
                debug!("read_line: {}: ignoring line {:?}", lineno, line);
                return;
            }
        };
        match kind {
            LineKind::Ranking => {
                let (max_selections, text) = read_ranking(line);
                self.start_question(ParsedQuestion::ranking(text.to_string(), max_selections));
            }
            LineKind::TextQuestion => {
                self.start_question(ParsedQuestion::text(content.to_string()));
            }
            LineKind::MultiSelectQuestion => {
                self.start_question(ParsedQuestion::multiple_choice(content.to_string(), true));
            }
            LineKind::SingleSelectQuestion => {
                self.start_question(ParsedQuestion::multiple_choice(content.to_string(), false));
            }
            LineKind::Description => {
                if self.description.is_none() {
                    self.description = Some(content.to_string());
                } else {
                    debug!("read_line: {}: description already set, skipping", lineno);
                }
            }
            LineKind::Title => {
                if self.title.is_none() {
                    self.title = Some(content.to_string());
                } else {
                    debug!("read_line: {}: title already set, skipping", lineno);
                }
            }
            LineKind::Choice => match self.current.as_mut() {
                Some(q) => q.options.push(content.to_string()),
                None => debug!("read_line: {}: option outside of a question: {:?}", lineno, line),
            },
        }
    }

    fn start_question(&mut self, question: ParsedQuestion) {
        if let Some(previous) = self.current.replace(question) {
            self.push(previous);
        }
    }

    fn push(&mut self, mut question: ParsedQuestion) {
        question.order_index = self.questions.len() as u32;
        self.questions.push(question);
    }

    fn finish(mut self, defaults: &SurveyDefaults) -> ParsedSurvey {
        if let Some(last) = self.current.take() {
            self.push(last);
        }
        ParsedSurvey {
            title: self.title.unwrap_or_else(|| defaults.title.clone()),
            description: self
                .description
                .unwrap_or_else(|| defaults.description.clone()),
            questions: self.questions,
        }
    }
}

/// Parses a survey document with the built-in defaults for the title and the description.
///
/// See [`parse_with_defaults`].
pub fn parse(text: &str) -> ParsedSurvey {
    parse_with_defaults(text, &SurveyDefaults::default())
}

/// Parses a survey document written in the markdown survey dialect.
///
/// This function never fails: lines that are not understood are skipped. The structure
/// of the dialect is described in the [manual](crate::manual).
///
/// Arguments:
/// * `text` the content of the document
/// * `defaults` the title and description to use if the document does not contain them
pub fn parse_with_defaults(text: &str, defaults: &SurveyDefaults) -> ParsedSurvey {
    let mut reader = SurveyReader::default();
    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);
        if line.is_empty() {
            continue;
        }
        reader.read_line(idx + 1, line);
    }
    let survey = reader.finish(defaults);
    info!(
        "Parsed survey {:?}: {} questions",
        survey.title,
        survey.questions.len()
    );
    survey
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn markers_are_not_shadowed() {
        for (idx, (marker, _)) in MARKERS.iter().enumerate() {
            for (later, _) in MARKERS.iter().skip(idx + 1) {
                assert!(
                    !later.starts_with(marker),
                    "{:?} would never be reached after {:?}",
                    later,
                    marker
                );
            }
            // Every marker of the table is recognized as itself.
            let line = format!("{}question", marker);
            assert_eq!(classify(&line).map(|p| p.0), Some(MARKERS[idx].1));
        }
    }

    #[test]
    fn longest_heading_wins() {
        assert_eq!(
            classify("#### Q").map(|p| p.0),
            Some(LineKind::MultiSelectQuestion)
        );
        assert_eq!(classify("##### Q").map(|p| p.0), Some(LineKind::TextQuestion));
        assert_eq!(classify("# Q").map(|p| p.0), Some(LineKind::Title));
        assert_eq!(classify("#Q"), None);
        assert_eq!(classify("###### Q"), None);
    }

    #[test]
    fn end_to_end() {
        init();
        let text = "# Survey A\n## Desc A\n### Q1\n□ Opt1\n□ Opt2\n#### Q2\n□ OptA\n##### Q3\n";
        let survey = parse(text);
        assert_eq!(survey.title, "Survey A");
        assert_eq!(survey.description, "Desc A");
        assert_eq!(
            survey.questions,
            vec![
                ParsedQuestion {
                    question_text: "Q1".to_string(),
                    question_type: QuestionType::MultipleChoice,
                    options: vec!["Opt1".to_string(), "Opt2".to_string()],
                    required: true,
                    order_index: 0,
                    is_multiple_select: false,
                    max_selections: None,
                },
                ParsedQuestion {
                    question_text: "Q2".to_string(),
                    question_type: QuestionType::MultipleChoice,
                    options: vec!["OptA".to_string()],
                    required: true,
                    order_index: 1,
                    is_multiple_select: true,
                    max_selections: None,
                },
                ParsedQuestion {
                    question_text: "Q3".to_string(),
                    question_type: QuestionType::Text,
                    options: vec![],
                    required: false,
                    order_index: 2,
                    is_multiple_select: false,
                    max_selections: None,
                },
            ]
        );
    }

    #[test]
    fn empty_input() {
        for text in ["", "   ", "\n\n\t\n"] {
            let survey = parse(text);
            assert_eq!(survey.title, SurveyDefaults::DEFAULT_TITLE);
            assert_eq!(survey.description, SurveyDefaults::DEFAULT_DESCRIPTION);
            assert!(survey.questions.is_empty());
        }
    }

    #[test]
    fn caller_defaults() {
        let defaults = SurveyDefaults::new("Fallback", "Fallback description");
        let survey = parse_with_defaults("### Only a question", &defaults);
        assert_eq!(survey.title, "Fallback");
        assert_eq!(survey.description, "Fallback description");
        assert_eq!(survey.questions.len(), 1);
    }

    #[test]
    fn first_title_and_description_win() {
        let survey = parse("# A\n## D1\n# B\n## D2\n");
        assert_eq!(survey.title, "A");
        assert_eq!(survey.description, "D1");
        assert!(survey.questions.is_empty());
    }

    #[test]
    fn ranking_default_cap() {
        let survey = parse("$$$ My question");
        let q = &survey.questions[0];
        assert_eq!(q.question_type, QuestionType::Ranking);
        assert_eq!(q.question_text, "My question");
        assert_eq!(q.max_selections, Some(3));
        assert!(q.required);
        assert!(q.is_multiple_select);
    }

    #[test]
    fn ranking_explicit_range() {
        let survey = parse("$$$2-5 Pick items\n□ a\n□ b");
        let q = &survey.questions[0];
        assert_eq!(q.question_type, QuestionType::Ranking);
        assert_eq!(q.question_text, "Pick items");
        assert_eq!(q.max_selections, Some(5));
        assert_eq!(q.options, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn ranking_malformed_range() {
        assert_eq!(read_ranking("$$$1-x Q"), (3, "Q"));
        assert_eq!(read_ranking("$$$1- Q"), (3, "Q"));
        assert_eq!(read_ranking("$$$5 Q"), (3, "Q"));
        assert_eq!(read_ranking("$$$1-4x Q"), (4, "Q"));
        assert_eq!(read_ranking("$$$1-2-7 Q"), (2, "Q"));
        // The range is only read before the first space.
        assert_eq!(read_ranking("$$$ rank 1-9 items"), (3, "rank 1-9 items"));
    }

    #[test]
    fn ranking_numeric_limits_are_kept() {
        assert_eq!(read_ranking("$$$1-0 Q"), (0, "Q"));
        assert_eq!(read_ranking("$$$1-99999999999 Q"), (u32::MAX, "Q"));
        let survey = parse("$$$1-0 Zero\n$$$1-99999999999 Big");
        assert_eq!(survey.questions[0].max_selections, Some(0));
        assert_eq!(survey.questions[1].max_selections, Some(u32::MAX));
    }

    #[test]
    fn byte_order_mark_is_trimmed() {
        let survey = parse("\u{feff}# Title\n## Description\u{feff}\n");
        assert_eq!(survey.title, "Title");
        assert_eq!(survey.description, "Description");
    }

    #[test]
    fn ranking_without_text() {
        let survey = parse("$$$1-2");
        assert_eq!(survey.questions[0].question_text, "$$$1-2");
        assert_eq!(survey.questions[0].max_selections, Some(2));
    }

    #[test]
    fn options_outside_questions_are_dropped() {
        let survey = parse("□ stray\n# T\n□ stray 2\n## D\n□ stray 3\n### Q\n□ kept\n");
        assert_eq!(survey.questions.len(), 1);
        assert_eq!(survey.questions[0].options, vec!["kept".to_string()]);
    }

    #[test]
    fn options_stop_at_next_question() {
        let survey = parse("### Q1\n□ a\n### Q2\n□ b\n□ c\nsome comment\n□ d\n");
        assert_eq!(survey.questions[0].options, vec!["a".to_string()]);
        assert_eq!(
            survey.questions[1].options,
            vec!["b".to_string(), "c".to_string(), "d".to_string()]
        );
    }

    #[test]
    fn headings_do_not_close_questions() {
        // A late title heading is ignored and the question keeps collecting options.
        let survey = parse("# T\n### Q\n□ a\n# Other\n□ b\n");
        assert_eq!(survey.title, "T");
        assert_eq!(
            survey.questions[0].options,
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn whitespace_is_trimmed() {
        let survey = parse("  #   Title  \r\n\t### Q1   \r\n   □   spaced option  \r\n");
        assert_eq!(survey.title, "Title");
        assert_eq!(survey.questions[0].question_text, "Q1");
        assert_eq!(survey.questions[0].options, vec!["spaced option".to_string()]);
    }

    #[test]
    fn order_indexes_are_contiguous() {
        let text = "$$$ R\n□ x\n##### T\n### S\n#### M\n□ y\n### S2\n";
        let survey = parse(text);
        assert_eq!(survey.questions.len(), 5);
        for (idx, q) in survey.questions.iter().enumerate() {
            assert_eq!(q.order_index as usize, idx);
        }
    }

    #[test]
    fn parsing_is_repeatable() {
        let text = "# T\n### Q\n□ a\n$$$1-2 R\n□ b\n";
        assert_eq!(parse(text), parse(text));
    }

    #[test]
    fn unknown_lines_are_ignored() {
        let survey = parse("hello\n- item\n* item\n□no space\n###no space\n");
        assert_eq!(survey.title, SurveyDefaults::DEFAULT_TITLE);
        assert!(survey.questions.is_empty());
    }
}
