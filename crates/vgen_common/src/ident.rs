//! Verilog identifier helpers.

/// Returns `true` if `s` is a legal Verilog simple identifier.
///
/// A simple identifier starts with a letter or underscore and continues with
/// letters, digits, underscores or `$`. Escaped identifiers are not accepted.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Derives a module name from an operation name.
///
/// The first character is upper-cased and the remainder lower-cased, so
/// `"andr"` becomes `"Andr"` and `"dLSHR"` becomes `"Dlshr"`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
