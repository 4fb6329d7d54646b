//! Shell quoting for arguments that end up in a command line.
//!
//! Collaborators that shell out (SSH exec, backend helpers) build their
//! command strings through [`to_cmd`] so untrusted arguments cannot inject
//! extra shell syntax.

/// Whether [`to_cmd`] escapes each argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteType {
    /// Pass every argument through [`escape_for_shell`]
    #[default]
    QuoteEveryArg,
    /// Join arguments verbatim
    NoQuotes,
}

/// Characters that are passed through without a backslash.
fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '%' | '+' | '-' | '.' | '/' | ':' | '=' | '@' | '_')
}

/// Escape `text` so a POSIX shell reads it back as one literal word.
///
/// Newlines cannot be backslash-escaped, so each one is wrapped in double
/// quotes instead. Empty input becomes `''` so the argument survives word
/// splitting.
///
/// # Example
///
/// ```
/// use moor_utils::escape_for_shell;
///
/// assert_eq!(escape_for_shell("I've got \"quotes\""), "I\\'ve\\ got\\ \\\"quotes\\\"");
/// assert_eq!(escape_for_shell(""), "''");
/// ```
pub fn escape_for_shell(text: &str) -> String {
    if text.is_empty() {
        return "''".to_string();
    }

    let mut escaped = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        if c == '\n' {
            escaped.push('"');
            escaped.push(c);
            escaped.push('"');
        } else {
            if !is_shell_safe(c) {
                escaped.push('\\');
            }
            escaped.push(c);
        }
    }
    escaped
}

/// Join `args` into a single command line separated by single spaces.
pub fn to_cmd<S: AsRef<str>>(args: &[S], quote_type: QuoteType) -> String {
    let parts: Vec<String> = args
        .iter()
        .map(|arg| match quote_type {
            QuoteType::QuoteEveryArg => escape_for_shell(arg.as_ref()),
            QuoteType::NoQuotes => arg.as_ref().to_string(),
        })
        .collect();

    parts.join(" ")
}
