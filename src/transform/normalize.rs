//! Column-name normalization.

/// Normalize a raw source column name into its clean-table form.
///
/// Steps, in order:
///
/// 1. strip leading/trailing whitespace
/// 2. lowercase
/// 3. drop every character outside `[a-z0-9_ ]` (accented letters and
///    punctuation are removed, not transliterated)
/// 4. collapse each run of spaces into a single `_`
///
/// This is a pure function: `normalize_name("Ingresos  Año")` is
/// `"ingresos_ao"`.
pub fn normalize_name(raw: &str) -> String {
    let kept: String = raw
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | ' '))
        .collect();

    let mut out = String::with_capacity(kept.len());
    let mut in_space_run = false;
    for c in kept.chars() {
        if c == ' ' {
            if !in_space_run {
                out.push('_');
                in_space_run = true;
            }
        } else {
            out.push(c);
            in_space_run = false;
        }
    }
    out
}
