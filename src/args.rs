use clap::Parser;

/// This program imports surveys written in the markdown survey dialect.
#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file describing the import. Flags passed on the command line
    /// override the values of this file. See the manual for the format.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path, '-' or 'stdin') The survey document to import. '-' and 'stdin' read the document from the standard input.
    /// Setting this option overrides the source that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (file path, 'stdout' or empty) Where the records of the survey are written in JSON format.
    /// Defaults to the standard output.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference file containing the expected records in JSON format. If provided,
    /// the output will be checked against it.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// The title to use when the document has no '# ' heading.
    #[clap(long, value_parser)]
    pub title: Option<String>,

    /// The description to use when the document has no '## ' heading.
    #[clap(long, value_parser)]
    pub description: Option<String>,

    /// (default 10) The number of points granted to a respondent for completing the survey.
    #[clap(long, value_parser)]
    pub points_reward: Option<u32>,

    /// The identifier of the client that owns the survey.
    #[clap(long, value_parser)]
    pub client_id: Option<String>,

    /// If passed as an argument, prints a readable preview of the survey before the records.
    #[clap(long, takes_value = false)]
    pub preview: bool,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
