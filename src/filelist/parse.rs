use anyhow::Context;
use std::fs;

/// Read a filename list file: one filename per line.
///
/// Surrounding whitespace is trimmed and blank lines are skipped. Duplicates
/// are kept and input order is preserved, since leaf resources are emitted in
/// the order their filenames were listed.
pub fn parse_file_list(path: &str) -> anyhow::Result<Vec<String>> {
    let text = fs::read_to_string(path).with_context(|| format!("read file list {}", path))?;
    let filenames = parse_file_list_str(&text);
    log::debug!("read {} filenames from {}", filenames.len(), path);
    Ok(filenames)
}

pub fn parse_file_list_str(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
