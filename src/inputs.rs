use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a required input file, failing the run before any network call.
pub fn read_required(path: &Path, what: &str) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} at {:?}", path))
}

/// Read the optional schema/context file. Unreadable is not fatal; the
/// backend prompt simply goes out without the excerpt.
pub fn read_optional(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(err) => {
            log::warn!("ignoring unreadable context file {:?}: {err}", path);
            None
        }
    }
}

/// Parse the changed-file listing: one path per line, blanks skipped,
/// source order preserved.
pub fn parse_changed_files(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_files_keeps_order_and_drops_blanks() {
        let raw = "backend/views.py\n\n  frontend/src/App.jsx  \nREADME.md\n";
        let files = parse_changed_files(raw);
        assert_eq!(
            files,
            vec!["backend/views.py", "frontend/src/App.jsx", "README.md"]
        );
    }

    #[test]
    fn changed_files_empty_input() {
        assert!(parse_changed_files("").is_empty());
        assert!(parse_changed_files("\n \n").is_empty());
    }
}
