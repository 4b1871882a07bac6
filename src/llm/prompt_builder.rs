use crate::llm::prompts;

/// Most characters of the schema excerpt allowed into a backend prompt.
pub const MAX_SCHEMA_CHARS: usize = 1000;

/// Backend category prompt: instructions, optional API schema excerpt,
/// then the segmented diff. Pure string composition, no I/O.
pub fn backend_prompt(diff: &str, schema: Option<&str>) -> String {
    let mut prompt = String::from(prompts::BACKEND_TESTS);

    if let Some(schema) = schema {
        prompt.push_str("\n\nAPI schema excerpt:\n");
        prompt.push_str(clip(schema, MAX_SCHEMA_CHARS));
    }

    push_diff(&mut prompt, diff);
    prompt
}

/// Frontend category prompt. Takes the same shape as [`backend_prompt`] so
/// the category registry can hold both behind one fn type; the schema
/// excerpt only applies to backend code and is ignored here.
pub fn frontend_prompt(diff: &str, _schema: Option<&str>) -> String {
    let mut prompt = String::from(prompts::FRONTEND_TESTS);
    push_diff(&mut prompt, diff);
    prompt
}

fn push_diff(prompt: &mut String, diff: &str) {
    prompt.push_str("\n\nDiff:\n```diff\n");
    prompt.push_str(diff);
    prompt.push_str("\n```");
}

/// First `max` characters of `s`, backing off to a char boundary.
fn clip(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    &s[..cut]
}
