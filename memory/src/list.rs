//! The runtime's list syntax: whitespace-separated words, grouped with
//! braces or double quotes, with backslash escapes.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("unmatched open brace in list")]
    UnmatchedBrace,
    #[error("unmatched open quote in list")]
    UnmatchedQuote,
    #[error("list element in braces followed by \"{0}\" instead of space")]
    TrailingAfterBrace(String),
    #[error("list element in quotes followed by \"{0}\" instead of space")]
    TrailingAfterQuote(String),
}

#[inline]
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

#[inline]
fn is_special(c: char) -> bool {
    is_space(c) || matches!(c, '{' | '}' | '[' | ']' | '$' | ';' | '"' | '\\')
}

/// Braces can quote `s` when they stay balanced under the same scan the
/// parser uses, and no trailing backslash would swallow the closing brace.
fn braceable(s: &str) -> bool {
    let mut depth = 0i32;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if chars.next().is_none() {
                    return false;
                }
            }
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

fn format_element(s: &str, out: &mut String) {
    if s.is_empty() {
        out.push_str("{}");
        return;
    }
    if !s.chars().any(is_special) && !s.starts_with('#') {
        out.push_str(s);
        return;
    }
    if braceable(s) {
        out.push('{');
        out.push_str(s);
        out.push('}');
        return;
    }
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\x0b' => out.push_str("\\v"),
            '\x0c' => out.push_str("\\f"),
            c if is_special(c) || c == '#' => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
}

/// Join elements into a single list string that [`parse_list`] splits back
/// into the same elements.
pub fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        format_element(item.as_ref(), &mut out);
    }
    out
}

fn backslash(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        'v' => '\x0b',
        'f' => '\x0c',
        other => other,
    }
}

/// Split a list string into its elements.
pub fn parse_list(s: &str) -> Result<Vec<String>, ListError> {
    let mut items = Vec::new();
    let mut chars = s.chars().peekable();

    loop {
        while chars.peek().copied().map_or(false, is_space) {
            chars.next();
        }
        let Some(first) = chars.next() else { break };
        let mut word = String::new();

        match first {
            '{' => {
                let mut depth = 1usize;
                loop {
                    match chars.next() {
                        None => return Err(ListError::UnmatchedBrace),
                        Some('\\') => {
                            word.push('\\');
                            match chars.next() {
                                Some(c) => word.push(c),
                                None => return Err(ListError::UnmatchedBrace),
                            }
                        }
                        Some('{') => {
                            depth += 1;
                            word.push('{');
                        }
                        Some('}') => {
                            depth -= 1;
                            if depth == 0 {
                                break;
                            }
                            word.push('}');
                        }
                        Some(c) => word.push(c),
                    }
                }
                if let Some(&c) = chars.peek() {
                    if !is_space(c) {
                        return Err(ListError::TrailingAfterBrace(c.to_string()));
                    }
                }
            }
            '"' => {
                loop {
                    match chars.next() {
                        None => return Err(ListError::UnmatchedQuote),
                        Some('\\') => match chars.next() {
                            Some(c) => word.push(backslash(c)),
                            None => return Err(ListError::UnmatchedQuote),
                        },
                        Some('"') => break,
                        Some(c) => word.push(c),
                    }
                }
                if let Some(&c) = chars.peek() {
                    if !is_space(c) {
                        return Err(ListError::TrailingAfterQuote(c.to_string()));
                    }
                }
            }
            first => {
                let mut next = Some(first);
                while let Some(c) = next {
                    if is_space(c) {
                        break;
                    }
                    if c == '\\' {
                        match chars.next() {
                            Some(e) => word.push(backslash(e)),
                            None => word.push('\\'),
                        }
                    } else {
                        word.push(c);
                    }
                    next = chars.next();
                }
            }
        }
        items.push(word);
    }

    Ok(items)
}
