use log::{debug, info, warn};

use snafu::{prelude::*, Snafu};
use survey_markdown::*;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;

pub mod config_reader;
pub mod io_common;
pub mod io_markdown;
pub mod preview;
pub mod store;

use crate::import::config_reader::*;
use crate::import::io_common::is_std_stream;
use crate::import::store::*;

#[derive(Debug, Snafu)]
pub enum ImportError {
    #[snafu(display("Error opening configuration file {path}"))]
    OpeningConfig {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing configuration file {path}"))]
    ParsingConfig {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Cannot find the directory of {path}"))]
    MissingParentDir { path: String },
    #[snafu(display("Error reading survey document {path}"))]
    OpeningMarkdown {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("No survey document: use --input or set the source in the configuration"))]
    MissingInput {},
    #[snafu(display("The survey document {path} is empty"))]
    EmptyInput { path: String },
    #[snafu(display("Error writing records to {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error converting records to JSON"))]
    WritingJson { source: serde_json::Error },
    #[snafu(display("Error opening reference file {path}"))]
    OpeningReference {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing reference file {path}"))]
    ParsingReference {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("The survey could not be saved"))]
    Saving { source: StoreError },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type ImportResult<T> = Result<T, ImportError>;

/// Everything needed to run one import, after merging the configuration file and the flags.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ImportSettings {
    /// File path, or `-` or `stdin` for the standard input.
    pub input: Option<String>,
    /// File path, `stdout` or nothing for the standard output.
    pub out: Option<String>,
    pub reference: Option<String>,
    pub defaults: SurveyDefaults,
    pub points_reward: u32,
    pub client_id: Option<String>,
    pub print_preview: bool,
}

impl Default for ImportSettings {
    fn default() -> ImportSettings {
        ImportSettings {
            input: None,
            out: None,
            reference: None,
            defaults: SurveyDefaults::default(),
            points_reward: ImportSettings::DEFAULT_POINTS_REWARD,
            client_id: None,
            print_preview: false,
        }
    }
}

impl ImportSettings {
    pub const DEFAULT_POINTS_REWARD: u32 = 10;

    pub fn from_config(config: &ImportConfig) -> ImportSettings {
        ImportSettings {
            input: config.source.as_ref().map(|s| s.file_path.clone()),
            out: config.output_path.clone(),
            defaults: config.survey_defaults(),
            points_reward: config
                .points_reward
                .unwrap_or(ImportSettings::DEFAULT_POINTS_REWARD),
            client_id: config.client_id.clone(),
            ..ImportSettings::default()
        }
    }

    /// Reads the configuration file if there is one, and applies the flags on top of it.
    pub fn from_args(args: &Args) -> ImportResult<ImportSettings> {
        let mut settings = match args.config.as_deref() {
            Some(path) => ImportSettings::from_config(&read_config(path)?),
            None => ImportSettings::default(),
        };
        if args.input.is_some() {
            settings.input = args.input.clone();
        }
        if args.out.is_some() {
            settings.out = args.out.clone();
        }
        if args.reference.is_some() {
            settings.reference = args.reference.clone();
        }
        if let Some(title) = &args.title {
            settings.defaults.title = title.clone();
        }
        if let Some(description) = &args.description {
            settings.defaults.description = description.clone();
        }
        if let Some(points_reward) = args.points_reward {
            settings.points_reward = points_reward;
        }
        if args.client_id.is_some() {
            settings.client_id = args.client_id.clone();
        }
        settings.print_preview = args.preview;
        Ok(settings)
    }

    fn record_settings(&self) -> RecordSettings {
        RecordSettings {
            client_id: self.client_id.clone(),
            points_reward: self.points_reward,
        }
    }
}

/// A parsed survey waiting to be saved.
///
/// The document is parsed once. If saving fails, the same preview can be committed again.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ImportSession {
    preview: ParsedSurvey,
}

impl ImportSession {
    pub fn new(text: &str, defaults: &SurveyDefaults) -> ImportSession {
        ImportSession {
            preview: parse_with_defaults(text, defaults),
        }
    }

    pub fn preview(&self) -> &ParsedSurvey {
        &self.preview
    }

    /// Saves the survey, then its questions, and returns the identifier of the survey.
    pub fn commit(
        &self,
        store: &mut dyn SurveyStore,
        settings: &RecordSettings,
    ) -> StoreResult<String> {
        let survey = SurveyRecord::from_preview(&self.preview, settings);
        let survey_id = store.insert_survey(&survey)?;
        debug!("commit: created survey {}", survey_id);

        let mut questions: Vec<QuestionRecord> = self
            .preview
            .questions
            .iter()
            .map(|q| QuestionRecord::from_parsed(q, &survey_id))
            .collect();
        questions.sort_by_key(|q| q.order_index);
        store.insert_questions(&questions)?;
        Ok(survey_id)
    }
}

fn build_payload_js(store: &MemoryStore, survey_id: &str) -> ImportResult<JSValue> {
    let survey = match store.survey(survey_id) {
        Some(s) => s,
        None => whatever!("Survey {} was not saved", survey_id),
    };
    let mut survey_js = serde_json::to_value(survey).context(WritingJsonSnafu {})?;
    survey_js["id"] = json!(survey_id);
    let questions_js = serde_json::to_value(store.questions(survey_id)).context(WritingJsonSnafu {})?;
    Ok(json!({
        "survey": survey_js,
        "questions": questions_js,
    }))
}

fn write_output(out: Option<&str>, contents: &str) -> ImportResult<()> {
    match out {
        Some(path) if !is_std_stream(path) => {
            info!("Writing records to {:?}", path);
            fs::write(path, contents).context(WritingOutputSnafu { path })
        }
        _ => {
            println!("{}", contents);
            Ok(())
        }
    }
}

fn check_reference(reference_path: &str, payload: &JSValue) -> ImportResult<()> {
    let reference = read_reference(reference_path)?;
    if &reference != payload {
        warn!("Found differences with the reference {:?}", reference_path);
        let pretty_reference =
            serde_json::to_string_pretty(&reference).context(WritingJsonSnafu {})?;
        let pretty_payload = serde_json::to_string_pretty(payload).context(WritingJsonSnafu {})?;
        print_diff(pretty_reference.as_str(), pretty_payload.as_str(), "\n");
        whatever!("Difference detected between the imported records and the reference")
    }
    Ok(())
}

/// Reads, parses and saves a survey document. Returns the records that were created.
pub fn run_import(settings: &ImportSettings) -> ImportResult<JSValue> {
    info!("settings: {:?}", settings);
    let input = settings.input.as_deref().context(MissingInputSnafu {})?;
    let text = io_markdown::read_markdown(input)?;
    ensure!(!text.trim().is_empty(), EmptyInputSnafu { path: input });

    let session = ImportSession::new(&text, &settings.defaults);
    {
        let p = session.preview();
        info!("Survey {:?}: {} questions", p.title, p.questions.len());
        for q in p.questions.iter() {
            debug!(
                "question {}: {} {:?} options: {:?}",
                q.order_index, q.question_type, q.question_text, q.options
            );
        }
    }
    if settings.print_preview {
        println!("{}", preview::render_preview(session.preview()));
    }

    let mut store = MemoryStore::new();
    let survey_id = session
        .commit(&mut store, &settings.record_settings())
        .context(SavingSnafu {})?;

    let payload = build_payload_js(&store, &survey_id)?;
    let pretty_payload = serde_json::to_string_pretty(&payload).context(WritingJsonSnafu {})?;
    write_output(settings.out.as_deref(), &pretty_payload)?;

    // The reference records, if provided for comparison
    if let Some(reference_path) = settings.reference.as_deref() {
        check_reference(reference_path, &payload)?;
    }

    Ok(payload)
}

#[cfg(test)]
fn run_import_test(test_name: &str, config_lpath: &str, reference_lpath: &str) {
    let test_dir = option_env!("SURVEY_TEST_DIR")
        .unwrap_or(concat!(env!("CARGO_MANIFEST_DIR"), "/testdata"));
    info!("Running test {}", test_name);
    let args = Args {
        config: Some(format!("{}/{}/{}", test_dir, test_name, config_lpath)),
        reference: Some(format!("{}/{}/{}", test_dir, test_name, reference_lpath)),
        ..Args::default()
    };
    let res = ImportSettings::from_args(&args).and_then(|settings| run_import(&settings));
    if let Err(e) = res {
        warn!("Error occured {:?}", e);
        panic!("An error occured {}", e);
    }
}

#[cfg(test)]
pub fn test_wrapper(test_name: &str) {
    run_import_test(
        test_name,
        format!("{}_config.json", test_name).as_str(),
        format!("{}_expected.json", test_name).as_str(),
    )
}
