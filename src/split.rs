// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

//! Splitting a single command-line string into separate arguments.
//!
//! This does a (small) part of the job a shell normally does before a
//! program sees its arguments: words are separated by delimiters, quoted
//! spans keep delimiters as literal text and an escape character makes the
//! next character literal.

/// Default characters that separate arguments.
pub const DEFAULT_DELIMITERS: &str = " \t\r\n";

/// Default characters that start and end a quoted span.
pub const DEFAULT_QUOTES: &str = "\"'";

/// Default escape character.
pub const DEFAULT_ESCAPE: char = '\\';

/// Split `text` into arguments.
///
/// - Any character in `delimiters` ends the current argument. Runs of
///   delimiters do not produce empty arguments.
/// - Any character in `quotes` starts a quoted span which continues until
///   the _same_ quote character is found again. The quotes themselves are
///   not copied. An unterminated quote runs to the end of `text`.
/// - `escape` makes the following character literal, both inside and
///   outside quotes.
///
/// This function never fails: malformed quoting is simply tolerated.
///
/// # Example
///
/// ```rust
/// use clopt::split;
///
/// let args = split(r#"arg1 "argument number 2" arg3"#, " ", "\"'", '\\');
/// assert_eq!(args, vec!["arg1", "argument number 2", "arg3"]);
///
/// let args = split(r"this\ is\ one", " ", "\"'", '\\');
/// assert_eq!(args, vec!["this is one"]);
/// ```
pub fn split(text: &str, delimiters: &str, quotes: &str, escape: char) -> Vec<String> {
    split_tokens(text, delimiters, quotes, escape, false)
}

/// Like [split()], but empty arguments are retained.
///
/// An empty argument is produced by each pair of adjacent delimiters,
/// by a leading or trailing delimiter and by an empty quoted span (`""`).
pub fn split_keep_empty(text: &str, delimiters: &str, quotes: &str, escape: char) -> Vec<String> {
    split_tokens(text, delimiters, quotes, escape, true)
}

fn split_tokens(
    text: &str,
    delimiters: &str,
    quotes: &str,
    escape: char,
    keep_empty: bool,
) -> Vec<String> {
    let mut tokens = Vec::<String>::new();
    let mut current = String::new();

    // Set if the previous character was an (unescaped) escape character.
    let mut escape_next = false;

    // The quote character that opened the current quoted span.
    let mut quote: Option<char> = None;

    for c in text.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
            continue;
        }

        if c == escape {
            escape_next = true;
            continue;
        }

        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None => {
                if delimiters.contains(c) {
                    if !current.is_empty() || keep_empty {
                        tokens.push(std::mem::take(&mut current));
                    }
                } else if quotes.contains(c) {
                    quote = Some(c);
                } else {
                    current.push(c);
                }
            }
        }
    }

    if !current.is_empty() || keep_empty {
        tokens.push(current);
    }

    tokens
}
