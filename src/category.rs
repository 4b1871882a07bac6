use crate::llm::prompt_builder;

/// One test-suggestion category: which changed files it claims, how its
/// block is headed in the report, and how its prompt is composed.
///
/// New categories are added as new registry entries; existing predicates
/// and templates are never edited for that.
pub struct Category {
    pub name: &'static str,
    pub heading: &'static str,
    pub matches: fn(&str) -> bool,
    pub build_prompt: fn(&str, Option<&str>) -> String,
}

/// Registry, in report order: backend block before frontend block.
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "backend",
        heading: "## 🧪 Suggested Backend Unit Tests",
        matches: is_backend_path,
        build_prompt: prompt_builder::backend_prompt,
    },
    Category {
        name: "frontend",
        heading: "## ⚛️ Suggested Frontend Unit Tests",
        matches: is_frontend_path,
        build_prompt: prompt_builder::frontend_prompt,
    },
];

const FRONTEND_SUFFIXES: &[&str] = &[".js", ".jsx", ".ts", ".tsx"];

fn is_backend_path(path: &str) -> bool {
    path.ends_with(".py") && (path.contains("backend/") || path.contains("server/"))
}

fn is_frontend_path(path: &str) -> bool {
    FRONTEND_SUFFIXES.iter().any(|s| path.ends_with(s))
        && (path.contains("src/") || path.contains("frontend/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_wants_python_under_backend_dirs() {
        assert!(is_backend_path("backend/views.py"));
        assert!(is_backend_path("app/server/handlers.py"));
        assert!(!is_backend_path("scripts/deploy.py"));
        assert!(!is_backend_path("backend/schema.sql"));
    }

    #[test]
    fn frontend_wants_ui_sources_under_web_dirs() {
        assert!(is_frontend_path("frontend/src/App.jsx"));
        assert!(is_frontend_path("web/src/index.ts"));
        assert!(is_frontend_path("frontend/util.js"));
        assert!(!is_frontend_path("src/main.rs"));
        assert!(!is_frontend_path("lib/widget.jsx"));
    }

    #[test]
    fn python_under_frontend_matches_neither() {
        // A path like this belongs to no category and must produce no block.
        let path = "frontend/app.py";
        assert!(!CATEGORIES.iter().any(|c| (c.matches)(path)));
    }

    #[test]
    fn registry_order_is_backend_then_frontend() {
        let names: Vec<&str> = CATEGORIES.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["backend", "frontend"]);
    }
}
