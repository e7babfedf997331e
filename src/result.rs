// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::ops::Index;

/// One parsed command-line element: either an option (with any argument
/// it was given) or a positional (non-option) argument.
///
/// # Note
///
/// - All members are public for caller convenience.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Entry {
    /// The command-line text this entry was created from.
    ///
    /// For an option whose argument was given as a separate command-line
    /// argument, this is both arguments joined by a single space.
    pub original_text: String,
    /// Set if the entry is an option; unset for positional arguments.
    pub is_option: bool,
    /// Long name of the option (empty for positional arguments and for
    /// options without a long name).
    pub long_name: String,
    /// Short name of the option.
    pub short_name: Option<char>,
    /// Option argument (empty if not specified).
    pub argument: String,
}

impl Entry {
    /// Create a positional (non-option) entry.
    pub fn positional(text: &str) -> Self {
        Entry {
            original_text: text.into(),
            ..Default::default()
        }
    }

    /// Create an option entry.
    pub fn option(original_text: &str, long_name: &str, short_name: Option<char>) -> Self {
        Entry {
            original_text: original_text.into(),
            is_option: true,
            long_name: long_name.into(),
            short_name,
            argument: "".into(),
        }
    }

    /// Specify the option argument for the entry.
    pub fn argument(self, argument: &str) -> Self {
        Entry {
            argument: argument.into(),
            ..self
        }
    }
}

/// The outcome of a successful parse: every option and positional argument,
/// in command-line order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParseResult {
    entries: Vec<Entry>,
}

impl ParseResult {
    /// Create an empty result.
    pub fn new() -> Self {
        ParseResult::default()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`.
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Returns all the entries.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterate over the entries in command-line order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Iterate over the positional (non-option) entries only.
    pub fn non_options(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter().filter(|e| !e.is_option)
    }

    /// Returns true if an option with the specified long name was found.
    pub fn is_option_set(&self, long_name: &str) -> bool {
        !long_name.is_empty()
            && self
                .entries
                .iter()
                .any(|e| e.is_option && e.long_name == long_name)
    }

    /// Returns true if an option with the specified short name was found.
    pub fn is_short_option_set(&self, short_name: char) -> bool {
        short_name != '\0'
            && self
                .entries
                .iter()
                .any(|e| e.is_option && e.short_name == Some(short_name))
    }

    /// Returns the argument of the _last_ option found with the specified
    /// long name, or an empty string.
    pub fn get_argument(&self, long_name: &str) -> String {
        if long_name.is_empty() {
            return "".into();
        }

        self.entries
            .iter()
            .rev()
            .find(|e| e.is_option && e.long_name == long_name)
            .map(|e| e.argument.clone())
            .unwrap_or_default()
    }

    /// Returns the argument of the _last_ option found with the specified
    /// short name, or an empty string.
    pub fn get_short_argument(&self, short_name: char) -> String {
        if short_name == '\0' {
            return "".into();
        }

        self.entries
            .iter()
            .rev()
            .find(|e| e.is_option && e.short_name == Some(short_name))
            .map(|e| e.argument.clone())
            .unwrap_or_default()
    }

    pub(crate) fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Entry> {
        self.entries.last_mut()
    }

    pub(crate) fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }
}

impl From<Vec<Entry>> for ParseResult {
    fn from(entries: Vec<Entry>) -> Self {
        ParseResult { entries }
    }
}

impl Index<usize> for ParseResult {
    type Output = Entry;

    fn index(&self, index: usize) -> &Entry {
        &self.entries[index]
    }
}

impl IntoIterator for ParseResult {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParseResult {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
