// ********* Markers of the dialect ***********

// The glyphs are the wire format of existing survey documents and must not change.

/// Starts a ranking question. May be followed by a range token such as `1-3`.
pub const RANKING_MARKER: &str = "$$$";
/// Starts a free text question.
pub const TEXT_MARKER: &str = "##### ";
/// Starts a multiple choice question where several options may be selected.
pub const MULTI_SELECT_MARKER: &str = "#### ";
/// Starts a multiple choice question with a single answer.
pub const SINGLE_SELECT_MARKER: &str = "### ";
/// Sets the description of the survey.
pub const DESCRIPTION_MARKER: &str = "## ";
/// Sets the title of the survey.
pub const TITLE_MARKER: &str = "# ";
/// Adds an option to the question being read.
pub const OPTION_MARKER: &str = "□ ";

/// Selection cap of a ranking question when its range token is missing or invalid.
pub const DEFAULT_MAX_SELECTIONS: u32 = 3;

// ********* Output data structures ***********

/// The kind of answer a question expects.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum QuestionType {
    Text,
    MultipleChoice,
    Ranking,
}

impl QuestionType {
    /// The name used by the survey backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Text => "text",
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::Ranking => "ranking",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ParsedQuestion {
    pub question_text: String,
    pub question_type: QuestionType,
    /// Empty for text questions.
    pub options: Vec<String>,
    pub required: bool,
    /// Position among the questions of the survey, starting at 0.
    pub order_index: u32,
    pub is_multiple_select: bool,
    /// Only set for ranking questions.
    pub max_selections: Option<u32>,
}

impl ParsedQuestion {
    pub(crate) fn text(question_text: String) -> ParsedQuestion {
        ParsedQuestion {
            question_text,
            question_type: QuestionType::Text,
            options: Vec::new(),
            required: false,
            order_index: 0,
            is_multiple_select: false,
            max_selections: None,
        }
    }

    pub(crate) fn multiple_choice(question_text: String, is_multiple_select: bool) -> ParsedQuestion {
        ParsedQuestion {
            question_text,
            question_type: QuestionType::MultipleChoice,
            options: Vec::new(),
            required: true,
            order_index: 0,
            is_multiple_select,
            max_selections: None,
        }
    }

    pub(crate) fn ranking(question_text: String, max_selections: u32) -> ParsedQuestion {
        ParsedQuestion {
            question_text,
            question_type: QuestionType::Ranking,
            options: Vec::new(),
            required: true,
            order_index: 0,
            is_multiple_select: true,
            max_selections: Some(max_selections),
        }
    }
}

/// The result of reading a survey document.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ParsedSurvey {
    pub title: String,
    pub description: String,
    /// In order of appearance in the document.
    pub questions: Vec<ParsedQuestion>,
}

// ********* Configuration **********

/// Title and description used when the document does not provide them.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SurveyDefaults {
    pub title: String,
    pub description: String,
}

impl SurveyDefaults {
    pub const DEFAULT_TITLE: &'static str = "インポートされたアンケート";
    pub const DEFAULT_DESCRIPTION: &'static str =
        "マークダウンからインポートされたアンケートです。";

    pub fn new(title: impl Into<String>, description: impl Into<String>) -> SurveyDefaults {
        SurveyDefaults {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl Default for SurveyDefaults {
    fn default() -> SurveyDefaults {
        SurveyDefaults::new(
            SurveyDefaults::DEFAULT_TITLE,
            SurveyDefaults::DEFAULT_DESCRIPTION,
        )
    }
}
