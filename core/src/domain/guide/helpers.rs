/// Strip the markdown code fences the model sometimes wraps around JSON
/// output despite being told not to.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}
