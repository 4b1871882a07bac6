use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::category::CATEGORIES;
use crate::diff;
use crate::llm::SuggestionClient;

pub const FALLBACK_MESSAGE: &str =
    "No unit test suggestions were generated for this pull request.";

const BLOCK_SEPARATOR: &str = "\n\n---\n\n";

/// Run the per-category pipeline (select → segment → build → ask) and
/// join the non-empty blocks into the final markdown report.
///
/// Error strings coming back from the client are written into their block
/// verbatim; a failed category never fails the run.
pub fn generate(
    diff_text: &str,
    changed_files: &[String],
    schema: Option<&str>,
    llm: &dyn SuggestionClient,
    max_tokens: u32,
) -> String {
    let mut blocks: Vec<String> = Vec::new();

    for cat in CATEGORIES {
        let targets: Vec<&str> = changed_files
            .iter()
            .map(|p| p.as_str())
            .filter(|p| (cat.matches)(p))
            .collect();

        let lines = diff::segment(diff_text, &targets);
        if lines.is_empty() {
            log::info!("no relevant diff lines for {}; skipping", cat.name);
            continue;
        }

        let segment_text = diff::clamp(&lines.join("\n"));
        let prompt = (cat.build_prompt)(&segment_text, schema);

        log::debug!(
            "{} prompt ({} chars):\n{}",
            cat.name,
            prompt.len(),
            prompt
        );

        let suggestions = llm.suggest(&prompt, max_tokens);
        blocks.push(format!("{}\n\n{}", cat.heading, suggestions));
    }

    if blocks.is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        blocks.join(BLOCK_SEPARATOR)
    }
}

/// Write the report, replacing whatever is already at `path`.
pub fn write(path: &Path, report: &str) -> Result<()> {
    fs::write(path, report)
        .with_context(|| format!("failed to write report to {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::perplexity::MISSING_KEY_ERROR;

    const DIFF: &str = "\
+++ b/backend/views.py
+def list_users(request):
+    return JsonResponse(users)
+import json
-def old_view(request):
+++ b/frontend/src/App.jsx
+const App = () => <Users />;
";

    fn changed(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    /// Echoes the prompt back so tests can see what each category sent.
    struct EchoClient;

    impl SuggestionClient for EchoClient {
        fn suggest(&self, prompt: &str, _max_tokens: u32) -> String {
            format!("ECHO[{prompt}]")
        }
    }

    /// Always answers with a fixed string, like a client with no key.
    struct FixedClient(&'static str);

    impl SuggestionClient for FixedClient {
        fn suggest(&self, _prompt: &str, _max_tokens: u32) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn backend_block_precedes_frontend_block() {
        let files = changed(&["backend/views.py", "frontend/src/App.jsx"]);
        let report = generate(DIFF, &files, None, &FixedClient("ok"), 800);

        let backend_at = report.find("Suggested Backend Unit Tests").unwrap();
        let frontend_at = report.find("Suggested Frontend Unit Tests").unwrap();
        assert!(backend_at < frontend_at);
        assert!(report.contains(BLOCK_SEPARATOR));
    }

    #[test]
    fn segmented_lines_reach_the_prompt_verbatim() {
        let files = changed(&["backend/views.py"]);
        let report = generate(DIFF, &files, None, &EchoClient, 800);

        assert!(report.contains("### views.py"));
        assert!(report.contains("+def list_users(request):"));
        assert!(report.contains("-def old_view(request):"));
        assert!(!report.contains("App.jsx"));
    }

    #[test]
    fn empty_category_produces_no_block() {
        let files = changed(&["backend/views.py"]);
        let report = generate(DIFF, &files, None, &FixedClient("ok"), 800);

        assert!(report.contains("Suggested Backend Unit Tests"));
        assert!(!report.contains("Suggested Frontend Unit Tests"));
        assert!(!report.contains(BLOCK_SEPARATOR));
    }

    #[test]
    fn fallback_iff_both_categories_are_empty() {
        // Path matches neither selector, so nothing is ever segmented.
        let files = changed(&["frontend/app.py"]);
        let report = generate(DIFF, &files, None, &FixedClient("ok"), 800);
        assert_eq!(report, FALLBACK_MESSAGE);

        let report = generate("", &changed(&["backend/views.py"]), None, &FixedClient("ok"), 800);
        assert_eq!(report, FALLBACK_MESSAGE);
    }

    #[test]
    fn file_listed_but_absent_from_diff_produces_no_block() {
        let files = changed(&["backend/models.py"]);
        let report = generate(DIFF, &files, None, &FixedClient("ok"), 800);
        assert_eq!(report, FALLBACK_MESSAGE);
    }

    #[test]
    fn client_error_strings_land_in_every_block() {
        let files = changed(&["backend/views.py", "frontend/src/App.jsx"]);
        let report = generate(DIFF, &files, None, &FixedClient(MISSING_KEY_ERROR), 800);

        assert_eq!(report.matches(MISSING_KEY_ERROR).count(), 2);
        assert!(report.contains("Suggested Backend Unit Tests"));
        assert!(report.contains("Suggested Frontend Unit Tests"));
    }

    #[test]
    fn schema_reaches_backend_prompt_only() {
        let files = changed(&["backend/views.py", "frontend/src/App.jsx"]);
        let report = generate(DIFF, &files, Some("paths: /users"), &EchoClient, 800);

        let frontend_block = report
            .split(BLOCK_SEPARATOR)
            .find(|b| b.contains("Frontend"))
            .unwrap();
        let backend_block = report
            .split(BLOCK_SEPARATOR)
            .find(|b| b.contains("Backend"))
            .unwrap();

        assert!(backend_block.contains("paths: /users"));
        assert!(!frontend_block.contains("paths: /users"));
    }
}
