//! Reading text inputs from files or stdin

use std::fs;
use std::io::{self, Read};

use anyhow::Context;

/// Read a whole file, or stdin when `path` is `-` or absent
pub fn read_source(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
            Ok(buf)
        },
        Some(p) => fs::read_to_string(p).with_context(|| format!("failed to read {p}")),
    }
}

/// Inline text wins; otherwise read the file, if any; otherwise empty
pub fn text_or_file(inline: Option<&str>, file: Option<&str>) -> anyhow::Result<String> {
    match (inline, file) {
        (Some(text), _) => Ok(text.to_string()),
        (None, Some(path)) => read_source(Some(path)),
        (None, None) => Ok(String::new()),
    }
}
