// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use crate::split::{DEFAULT_DELIMITERS, DEFAULT_ESCAPE, DEFAULT_QUOTES};

const DEFAULT_SHORT_PREFIX: &str = "-";
const DEFAULT_LONG_PREFIX: &str = "--";

/// Special argument that is silently consumed and used to denote the end of
/// all options; all arguments that follow are considered to be positional
/// arguments (even if they start with `-`!)
///
/// See: `getopt(3)`.
const DEFAULT_END_OF_OPTIONS: &str = "--";

const DEFAULT_ASSIGNMENT: &str = "=";

/// Settings used to control the syntax the parser recognises.
///
/// All the setter methods treat an empty string as "keep the current
/// value", so a symbol can be changed but never removed.
///
/// # Example
///
/// A DOS-like syntax:
///
/// ```rust
/// use clopt::Settings;
///
/// let settings = Settings::new().short_prefix("/").assignment(":");
///
/// assert_eq!(settings.get_short_prefix(), "/");
/// assert_eq!(settings.get_assignment(), ":");
///
/// // Unchanged.
/// assert_eq!(settings.get_long_prefix(), "--");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    /// Characters that separate arguments when parsing a single string.
    delimiters: String,

    /// Introduces a group of short options (`-abc`).
    short_prefix: String,

    /// Introduces a long option (`--name`).
    long_prefix: String,

    /// Argument that marks the end of the options.
    end_of_options: String,

    /// Separates an option from its argument (`--name=value`).
    assignment: String,

    /// Characters that quote an argument when parsing a single string.
    quotes: String,

    /// Character that makes the next character literal when parsing a
    /// single string.
    escape: char,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            delimiters: DEFAULT_DELIMITERS.into(),
            short_prefix: DEFAULT_SHORT_PREFIX.into(),
            long_prefix: DEFAULT_LONG_PREFIX.into(),
            end_of_options: DEFAULT_END_OF_OPTIONS.into(),
            assignment: DEFAULT_ASSIGNMENT.into(),
            quotes: DEFAULT_QUOTES.into(),
            escape: DEFAULT_ESCAPE,
        }
    }
}

/// Returns `value` unless it is blank, in which case `current` is returned.
fn keep_if_blank(current: String, value: &str) -> String {
    if value.is_empty() {
        current
    } else {
        value.into()
    }
}

impl Settings {
    /// Create a new settings object.
    pub fn new() -> Self {
        Settings::default()
    }

    /// Specify the characters that separate arguments in a command-line
    /// string.
    pub fn delimiters(self, delimiters: &str) -> Self {
        Settings {
            delimiters: keep_if_blank(self.delimiters, delimiters),
            ..self
        }
    }

    /// Specify the prefix for short options.
    pub fn short_prefix(self, prefix: &str) -> Self {
        Settings {
            short_prefix: keep_if_blank(self.short_prefix, prefix),
            ..self
        }
    }

    /// Specify the prefix for long options.
    pub fn long_prefix(self, prefix: &str) -> Self {
        Settings {
            long_prefix: keep_if_blank(self.long_prefix, prefix),
            ..self
        }
    }

    /// Specify the argument that marks the end of the options.
    pub fn end_of_options(self, marker: &str) -> Self {
        Settings {
            end_of_options: keep_if_blank(self.end_of_options, marker),
            ..self
        }
    }

    /// Specify the symbol that joins an option to its argument.
    pub fn assignment(self, symbol: &str) -> Self {
        Settings {
            assignment: keep_if_blank(self.assignment, symbol),
            ..self
        }
    }

    /// Specify the quote characters used in a command-line string.
    pub fn quotes(self, quotes: &str) -> Self {
        Settings {
            quotes: keep_if_blank(self.quotes, quotes),
            ..self
        }
    }

    /// Specify the escape character used in a command-line string.
    pub fn escape(self, escape: char) -> Self {
        Settings { escape, ..self }
    }

    /// Change several symbols in one go.
    ///
    /// As for the individual methods, blank values leave the
    /// corresponding symbol unchanged.
    pub fn custom_strings(
        self,
        delimiters: &str,
        short_prefix: &str,
        long_prefix: &str,
        end_of_options: &str,
        assignment: &str,
    ) -> Self {
        self.delimiters(delimiters)
            .short_prefix(short_prefix)
            .long_prefix(long_prefix)
            .end_of_options(end_of_options)
            .assignment(assignment)
    }

    /// Returns the argument delimiters.
    pub fn get_delimiters(&self) -> &str {
        &self.delimiters
    }

    /// Returns the short option prefix.
    pub fn get_short_prefix(&self) -> &str {
        &self.short_prefix
    }

    /// Returns the long option prefix.
    pub fn get_long_prefix(&self) -> &str {
        &self.long_prefix
    }

    /// Returns the end of options marker.
    pub fn get_end_of_options(&self) -> &str {
        &self.end_of_options
    }

    /// Returns the assignment symbol.
    pub fn get_assignment(&self) -> &str {
        &self.assignment
    }

    /// Returns the quote characters.
    pub fn get_quotes(&self) -> &str {
        &self.quotes
    }

    /// Returns the escape character.
    pub fn get_escape(&self) -> char {
        self.escape
    }

    //----------------------------------------
    // Argument classification.
    //----------------------------------------

    pub(crate) fn is_end_of_options(&self, arg: &str) -> bool {
        arg == self.end_of_options
    }

    pub(crate) fn is_long_option(&self, arg: &str) -> bool {
        arg.len() > self.long_prefix.len() && arg.starts_with(self.long_prefix.as_str())
    }

    pub(crate) fn is_short_group(&self, arg: &str) -> bool {
        arg.len() > self.short_prefix.len() && arg.starts_with(self.short_prefix.as_str())
    }

    /// Returns true if `arg` could be the argument of a preceding option.
    pub(crate) fn is_non_option(&self, arg: &str) -> bool {
        !self.is_end_of_options(arg) && !self.is_long_option(arg) && !self.is_short_group(arg)
    }
}
