pub use crate::config::*;

/// A builder for parsing documents with custom defaults.
///
/// The defaults are only used when the document has no title or no description.
///
/// ```
/// pub use survey_markdown::builder::Builder;
/// pub use survey_markdown::QuestionType;
///
/// let survey = Builder::new()
///     .title("Customer feedback")
///     .parse("## How did we do?\n### Would you come back?\n□ Yes\n□ No");
///
/// assert_eq!(survey.title, "Customer feedback");
/// assert_eq!(survey.description, "How did we do?");
/// assert_eq!(survey.questions[0].question_type, QuestionType::MultipleChoice);
/// assert_eq!(survey.questions[0].options.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    pub(crate) _defaults: SurveyDefaults,
}

impl Builder {
    pub fn new() -> Builder {
        Builder {
            _defaults: SurveyDefaults::default(),
        }
    }

    /// Sets the title used when the document has no `# ` heading.
    pub fn title(self, title: impl Into<String>) -> Builder {
        Builder {
            _defaults: SurveyDefaults {
                title: title.into(),
                ..self._defaults
            },
        }
    }

    /// Sets the description used when the document has no `## ` heading.
    pub fn description(self, description: impl Into<String>) -> Builder {
        Builder {
            _defaults: SurveyDefaults {
                description: description.into(),
                ..self._defaults
            },
        }
    }

    pub fn defaults(&self) -> &SurveyDefaults {
        &self._defaults
    }

    pub fn parse(&self, text: &str) -> ParsedSurvey {
        crate::parse_with_defaults(text, &self._defaults)
    }
}
