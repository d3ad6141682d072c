// The records handed to the survey backend, and the boundary to it.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use snafu::{prelude::*, Snafu};
use survey_markdown::{ParsedQuestion, ParsedSurvey};

use crate::import::io_common::make_default_id;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum StoreError {
    #[snafu(display("The survey was rejected: {reason}"))]
    Rejected { reason: String },
    #[snafu(display("Unknown survey {survey_id}"))]
    UnknownSurvey { survey_id: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The state of a survey in the backend. Imported surveys always start as drafts.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyStatus {
    Draft,
}

/// Who owns the imported survey and what it pays.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RecordSettings {
    pub client_id: Option<String>,
    pub points_reward: u32,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SurveyRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    pub title: String,
    pub description: String,
    pub points_reward: u32,
    pub status: SurveyStatus,
}

impl SurveyRecord {
    pub fn from_preview(preview: &ParsedSurvey, settings: &RecordSettings) -> SurveyRecord {
        SurveyRecord {
            client_id: settings.client_id.clone(),
            title: preview.title.clone(),
            description: preview.description.clone(),
            points_reward: settings.points_reward,
            status: SurveyStatus::Draft,
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub survey_id: String,
    pub question_text: String,
    pub question_type: String,
    pub options: Vec<String>,
    pub required: bool,
    pub order_index: u32,
    pub is_multiple_select: bool,
    pub max_selections: Option<u32>,
}

impl QuestionRecord {
    pub fn from_parsed(question: &ParsedQuestion, survey_id: &str) -> QuestionRecord {
        QuestionRecord {
            survey_id: survey_id.to_string(),
            question_text: question.question_text.clone(),
            question_type: question.question_type.as_str().to_string(),
            options: question.options.clone(),
            required: question.required,
            order_index: question.order_index,
            is_multiple_select: question.is_multiple_select,
            max_selections: question.max_selections,
        }
    }
}

/// The backend that keeps the surveys.
///
/// A survey is created in two steps: first the survey itself, which gives its identifier,
/// then all of its questions.
pub trait SurveyStore {
    /// Creates the survey and returns its identifier.
    fn insert_survey(&mut self, survey: &SurveyRecord) -> StoreResult<String>;

    fn insert_questions(&mut self, questions: &[QuestionRecord]) -> StoreResult<()>;
}

/// Keeps the records in memory.
pub struct MemoryStore {
    surveys: Vec<(String, SurveyRecord)>,
    questions: Vec<QuestionRecord>,
    next_id: Box<dyn Fn(usize) -> String>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore {
            surveys: Vec::new(),
            questions: Vec::new(),
            next_id: Box::new(make_default_id("survey")),
        }
    }

    pub fn survey(&self, survey_id: &str) -> Option<&SurveyRecord> {
        self.surveys
            .iter()
            .find(|(id, _)| id == survey_id)
            .map(|(_, s)| s)
    }

    /// The questions of a survey, by increasing order index.
    pub fn questions(&self, survey_id: &str) -> Vec<&QuestionRecord> {
        let mut res: Vec<&QuestionRecord> = self
            .questions
            .iter()
            .filter(|q| q.survey_id == survey_id)
            .collect();
        res.sort_by_key(|q| q.order_index);
        res
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        MemoryStore::new()
    }
}

impl SurveyStore for MemoryStore {
    fn insert_survey(&mut self, survey: &SurveyRecord) -> StoreResult<String> {
        if survey.title.trim().is_empty() {
            return RejectedSnafu {
                reason: "the title is empty",
            }
            .fail();
        }
        let id = (self.next_id)(self.surveys.len() + 1);
        info!("insert_survey: {} {:?}", id, survey.title);
        self.surveys.push((id.clone(), survey.clone()));
        Ok(id)
    }

    fn insert_questions(&mut self, questions: &[QuestionRecord]) -> StoreResult<()> {
        // All or nothing: check every question before keeping any of them.
        for q in questions.iter() {
            ensure!(
                self.survey(&q.survey_id).is_some(),
                UnknownSurveySnafu {
                    survey_id: q.survey_id.clone()
                }
            );
        }
        debug!("insert_questions: {} questions", questions.len());
        self.questions.extend(questions.iter().cloned());
        Ok(())
    }
}
