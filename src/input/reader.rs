use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Largest query accepted from a file or stdin.
pub const MAX_INPUT_SIZE: u64 = 1024 * 1024; // 1MB

/// Reads a query from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_query(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open file: {}", path.display()))?;
            read_limited(file, &path.display().to_string())
        }
        _ => read_limited(io::stdin().lock(), "stdin"),
    }
}

fn read_limited(source: impl Read, origin: &str) -> Result<String> {
    let mut buffer = Vec::new();
    source
        .take(MAX_INPUT_SIZE + 1)
        .read_to_end(&mut buffer)
        .with_context(|| format!("Failed to read from {origin}"))?;

    if buffer.len() as u64 > MAX_INPUT_SIZE {
        bail!(
            "Error: Input from {origin} exceeds maximum allowed size (1 MB).\n\n\
             Queries are sent to the translation service in a single request."
        );
    }

    String::from_utf8(buffer).with_context(|| format!("Input from {origin} is not valid UTF-8"))
}
