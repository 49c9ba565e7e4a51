use std::fs;
use std::path::{Path, PathBuf};

use crate::parsing::Markdown;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Missing {}", .0.display())]
    Missing(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown file in full
pub fn read_markdown(path: &Path) -> Result<String, ConvertError> {
    if !path.exists() {
        return Err(ConvertError::Missing(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(ConvertError::Io)
}

/// Write an HTML fragment, replacing any existing file.
///
/// The parent directory must already exist.
pub fn write_html(path: &Path, html: &str) -> Result<(), ConvertError> {
    fs::write(path, html).map_err(ConvertError::Io)
}

/// Convert `input` to HTML and write it to `output`.
///
/// Nothing is written unless the input was read successfully.
pub fn convert_file(md: &Markdown, input: &Path, output: &Path) -> Result<(), ConvertError> {
    let source = read_markdown(input)?;
    let html = md.convert(&source);
    write_html(output, &html)?;
    log::info!("converted {} -> {}", input.display(), output.display());
    Ok(())
}
