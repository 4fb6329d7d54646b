//! String primitives shared by the rest of the crate.
//!
//! All functions are pure and return sub-slices or new strings; nothing here
//! touches the file system.

/// C-locale `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
///
/// `char::is_ascii_whitespace` leaves out vertical tab, which command
/// output does contain.
fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Strip leading characters matching `pred`.
pub fn trim_begin_with<P: Fn(char) -> bool>(s: &str, pred: P) -> &str {
    s.trim_start_matches(|c: char| pred(c))
}

/// Strip trailing characters matching `pred`.
pub fn trim_end_with<P: Fn(char) -> bool>(s: &str, pred: P) -> &str {
    s.trim_end_matches(|c: char| pred(c))
}

/// Strip leading and trailing characters matching `pred`.
pub fn trim_with<P: Fn(char) -> bool>(s: &str, pred: P) -> &str {
    trim_end_with(trim_begin_with(s, &pred), &pred)
}

/// Strip leading whitespace.
pub fn trim_begin(s: &str) -> &str {
    trim_begin_with(s, is_c_space)
}

/// Strip trailing whitespace.
pub fn trim_end(s: &str) -> &str {
    trim_end_with(s, is_c_space)
}

/// Strip leading and trailing whitespace.
pub fn trim(s: &str) -> &str {
    trim_with(s, is_c_space)
}

/// Strip exactly one trailing `\n`.
///
/// The input must end with a newline; callers pass output that is always
/// newline-terminated upstream. Debug builds panic when it does not, release
/// builds hand the input back unchanged.
pub fn trim_newline(s: &str) -> &str {
    debug_assert!(
        s.ends_with('\n'),
        "trim_newline: input must end with a newline"
    );
    s.strip_suffix('\n').unwrap_or(s)
}

/// Split `s` on `delimiter`.
///
/// A trailing delimiter does not produce an empty final token, and empty
/// input produces no tokens at all.
pub fn split(s: &str, delimiter: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    if delimiter.is_empty() {
        return vec![s.to_string()];
    }

    let mut tokens: Vec<String> = s.split(delimiter).map(str::to_string).collect();
    if tokens.len() > 1 && tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}

/// Return the first line of `data` starting with `prefix`, or an empty string.
pub fn match_line_for(data: &str, prefix: &str) -> String {
    data.lines()
        .find(|line| line.starts_with(prefix))
        .map(str::to_string)
        .unwrap_or_default()
}
