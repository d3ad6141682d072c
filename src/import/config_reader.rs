use crate::import::io_common::is_std_stream;
use crate::import::*;

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownSource {
    #[serde(rename = "filePath")]
    pub file_path: String,
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportConfig {
    pub source: Option<MarkdownSource>,
    pub defaults: Option<DefaultsConfig>,
    #[serde(rename = "pointsReward")]
    pub points_reward: Option<u32>,
    #[serde(rename = "clientId")]
    pub client_id: Option<String>,
    #[serde(rename = "outputPath")]
    pub output_path: Option<String>,
}

impl ImportConfig {
    /// The defaults of the configuration, completed with the built-in ones.
    pub fn survey_defaults(&self) -> SurveyDefaults {
        let builtin = SurveyDefaults::default();
        let defaults = self.defaults.clone().unwrap_or_default();
        SurveyDefaults {
            title: defaults.title.unwrap_or(builtin.title),
            description: defaults.description.unwrap_or(builtin.description),
        }
    }

    /// Makes the relative paths of the configuration relative to the given directory.
    pub fn resolve_paths(self, root: &Path) -> ImportConfig {
        let resolve = |p: String| -> String {
            if is_std_stream(&p) || Path::new(&p).is_absolute() {
                p
            } else {
                root.join(p).display().to_string()
            }
        };
        ImportConfig {
            source: self.source.map(|s| MarkdownSource {
                file_path: resolve(s.file_path),
            }),
            output_path: self.output_path.map(resolve),
            ..self
        }
    }
}

pub fn read_config(path: &str) -> ImportResult<ImportConfig> {
    let contents = fs::read_to_string(path).context(OpeningConfigSnafu { path })?;
    let config: ImportConfig =
        serde_json::from_str(contents.as_str()).context(ParsingConfigSnafu { path })?;
    debug!("read_config: {:?}", config);
    let root = Path::new(path).parent().context(MissingParentDirSnafu { path })?;
    Ok(config.resolve_paths(root))
}

pub fn read_reference(path: &str) -> ImportResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningReferenceSnafu { path })?;
    let js: JSValue =
        serde_json::from_str(contents.as_str()).context(ParsingReferenceSnafu { path })?;
    Ok(js)
}
