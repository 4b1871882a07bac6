/// Maximum characters of segmented diff embedded in a single prompt.
pub const MAX_DIFF_CHARS: usize = 4000;
pub const TRUNCATION_MARKER: &str = "... (diff truncated)";

/// Where the scanner currently is relative to the target file set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Before any file header has been seen.
    Outside,
    /// Inside the hunks of a file we care about.
    InsideTarget,
    /// Inside the hunks of some other changed file.
    InsideOther,
}

/// Extract the added/removed lines belonging to `targets` from a unified
/// diff, with a marker line naming each file as its hunks begin.
///
/// Only the `+++ b/<path>` header switches state; everything else is either
/// collected (change lines while inside a target file) or dropped. A change
/// line seen before any header is dropped: the scan starts `Outside`.
pub fn segment(diff: &str, targets: &[&str]) -> Vec<String> {
    let mut state = ScanState::Outside;
    let mut out: Vec<String> = Vec::new();

    for line in diff.lines() {
        if let Some(path) = line.strip_prefix("+++ b/") {
            if targets.iter().any(|t| *t == path) {
                state = ScanState::InsideTarget;
                let name = path.rsplit('/').next().unwrap_or(path);
                out.push(format!("### {name}"));
            } else {
                // A header for an unrelated file ends collection even if
                // we were inside a target file.
                state = ScanState::InsideOther;
            }
            continue;
        }

        if state != ScanState::InsideTarget {
            continue;
        }

        // Change lines only; the paired file headers also start with
        // +/- and must not be collected.
        if (line.starts_with('+') || line.starts_with('-'))
            && !line.starts_with("+++ ")
            && !line.starts_with("--- ")
        {
            out.push(line.to_string());
        }
    }

    out
}

/// Bound the joined segment text to [`MAX_DIFF_CHARS`]. Applied after
/// segmentation, never per line. The cut backs off to a char boundary so
/// multibyte content cannot split a code point.
pub fn clamp(text: &str) -> String {
    if text.len() <= MAX_DIFF_CHARS {
        return text.to_string();
    }

    let mut cut = MAX_DIFF_CHARS;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }

    format!("{}{}", &text[..cut], TRUNCATION_MARKER)
}
