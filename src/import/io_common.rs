use std::path::Path;

pub fn simplify_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

/// Generates identifiers of the form `<prefix>-00000001`.
pub fn make_default_id(prefix: &str) -> impl Fn(usize) -> String {
    let prefix = prefix.to_string();
    move |idx| format!("{}-{:08}", prefix, idx)
}

/// Paths that stand for the standard input.
pub fn is_stdin(path: &str) -> bool {
    path == "-" || path == "stdin"
}

/// Paths that are not files but the standard streams.
pub fn is_std_stream(path: &str) -> bool {
    is_stdin(path) || path == "stdout"
}
