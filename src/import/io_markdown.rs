// Primitives for reading survey documents.

use std::io::Read;

use crate::import::{
    io_common::{is_stdin, simplify_file_name},
    *,
};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reads a survey document from a file, or from the standard input if the path is `-` or
/// `stdin`.
pub fn read_markdown(path: &str) -> ImportResult<String> {
    let contents = if is_stdin(path) {
        info!("Reading survey document from the standard input");
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context(OpeningMarkdownSnafu { path })?;
        buf
    } else {
        info!("Reading survey document {:?}", simplify_file_name(path));
        fs::read_to_string(path).context(OpeningMarkdownSnafu { path })?
    };
    Ok(strip_bom(contents))
}

// Some editors put a byte order mark at the start of the file, which would hide the
// marker of the first line.
fn strip_bom(contents: String) -> String {
    match contents.strip_prefix(BYTE_ORDER_MARK) {
        Some(rest) => {
            debug!("read_markdown: removing byte order mark");
            rest.to_string()
        }
        None => contents,
    }
}
