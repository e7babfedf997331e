// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

use crate::binding::{Binding, Target};

/// Prefixes used when displaying options.
///
/// These are the defaults; custom [Settings](crate::Settings) only affect
/// parsing.
const SHORT_DISPLAY_PREFIX: &str = "-";
const LONG_DISPLAY_PREFIX: &str = "--";

/// Used when an option takes an argument but does not name it.
const DEFAULT_ARG_NAME: &str = "ARG";

/// Used to specify whether an option is a "stand-alone" flag option
/// (needs no value), or whether it accepts an option argument.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy)]
pub enum Need {
    /// Option is stand-alone (no argument allowed).
    Nothing,
    /// Option may be given an argument.
    ///
    /// An optional argument is only consumed from the following
    /// command-line argument if that argument does not look like an option.
    Optional,
    /// Option must be given an argument.
    Required,
}

impl Default for Need {
    fn default() -> Self {
        Need::Nothing
    }
}

impl Need {
    /// Create a new default requirement for an [Opt].
    pub fn new() -> Self {
        Need::default()
    }

    /// Returns true if the option accepts an argument.
    pub fn takes_argument(&self) -> bool {
        *self != Need::Nothing
    }
}

/// An option descriptor: describes one option the parser recognises.
///
/// An option can have a long name (`--verbose`), a short name (`-v`),
/// or both. An option with neither can never be matched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Opt {
    /// Long option name, without the prefix (may be empty).
    pub long_name: String,
    /// Single character short option name.
    pub short_name: Option<char>,
    /// Whether the option accepts an argument.
    pub needs: Need,
    /// Name of the argument, used for display only.
    pub arg_name: String,
    /// Description of the option.
    pub help: Option<String>,

    pub(crate) flag: Option<Binding<bool>>,
    pub(crate) target: Option<Target>,
}

impl Opt {
    /// Create a new option with the specified long name.
    ///
    /// Use `Opt::default().short(c)` for an option with only a short name.
    pub fn new(long_name: &str) -> Self {
        Opt::default().long(long_name)
    }

    /// Specify the long name for the option.
    pub fn long(self, long_name: &str) -> Self {
        Opt {
            long_name: long_name.into(),
            ..self
        }
    }

    /// Specify the short name for the option.
    pub fn short(self, short_name: char) -> Self {
        Opt {
            short_name: Some(short_name),
            ..self
        }
    }

    /// Specify whether the option accepts an argument.
    pub fn needs(self, needs: Need) -> Self {
        Opt { needs, ..self }
    }

    /// Specify the name of the options argument (for example "FILE").
    pub fn arg_name(self, arg_name: &str) -> Self {
        Opt {
            arg_name: arg_name.into(),
            ..self
        }
    }

    /// Specify the help text for the option.
    pub fn help(self, help: &str) -> Self {
        Opt {
            help: Some(help.into()),
            ..self
        }
    }

    /// Bind a flag that will be set to `true` when the option is found.
    ///
    /// The flag is reset to `false` by this call.
    pub fn bind_flag(self, flag: &Binding<bool>) -> Self {
        flag.set(false);

        Opt {
            flag: Some(flag.clone()),
            ..self
        }
    }

    /// Bind a string that the options argument will be written to.
    ///
    /// If the option was a flag, it now accepts an optional argument.
    pub fn bind_string(self, value: &Binding<String>) -> Self {
        self.bind_target(Target::Str(value.clone()))
    }

    /// Bind a signed integer that the options argument will be
    /// converted to.
    ///
    /// If the option was a flag, it now accepts an optional argument.
    pub fn bind_int(self, value: &Binding<i32>) -> Self {
        self.bind_target(Target::Int(value.clone()))
    }

    /// Bind an unsigned integer that the options argument will be
    /// converted to.
    ///
    /// If the option was a flag, it now accepts an optional argument.
    pub fn bind_uint(self, value: &Binding<u32>) -> Self {
        self.bind_target(Target::UInt(value.clone()))
    }

    /// Bind a floating point number that the options argument will be
    /// converted to.
    ///
    /// If the option was a flag, it now accepts an optional argument.
    pub fn bind_double(self, value: &Binding<f64>) -> Self {
        self.bind_target(Target::Double(value.clone()))
    }

    fn bind_target(self, target: Target) -> Self {
        let arg_name = if self.arg_name.is_empty() {
            target.default_arg_name().into()
        } else {
            self.arg_name
        };

        let needs = match self.needs {
            Need::Nothing => Need::Optional,
            needs => needs,
        };

        Opt {
            arg_name,
            needs,
            target: Some(target),
            ..self
        }
    }

    /// Returns true if the option can be found by name.
    pub fn is_reachable(&self) -> bool {
        !self.long_name.is_empty() || self.short_name.is_some()
    }
}

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut names = Vec::<String>::new();

        if let Some(c) = self.short_name {
            names.push(format!("{}{}", SHORT_DISPLAY_PREFIX, c));
        }

        if !self.long_name.is_empty() {
            names.push(format!("{}{}", LONG_DISPLAY_PREFIX, self.long_name));
        }

        let arg_name = if self.arg_name.is_empty() {
            DEFAULT_ARG_NAME
        } else {
            self.arg_name.as_str()
        };

        // Short options take a separate argument, long options an
        // assigned one.
        let value = match (self.needs, self.long_name.is_empty()) {
            (Need::Nothing, _) => "".into(),
            (Need::Required, true) => format!(" {}", arg_name),
            (Need::Optional, true) => format!(" [{}]", arg_name),
            (Need::Required, false) => format!("={}", arg_name),
            (Need::Optional, false) => format!("[={}]", arg_name),
        };

        let help: String = match &self.help {
            Some(help) => format!(" # {}", help),
            _ => "".into(),
        };

        write!(f, "{}{}{}", names.join(", "), value, help)
    }
}

/// The option table: an ordered collection of [Opt]'s.
///
/// Lookups scan the options in the order they were added and return the
/// first match, so if two options share a name only the first is ever used.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Opts {
    entries: Vec<Opt>,
}

impl Opts {
    /// Create a new option table.
    pub fn new() -> Self {
        Opts {
            entries: Vec::<Opt>::new(),
        }
    }

    /// Returns the number of registered options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no options have been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convenience method to add a set of options in one go.
    ///
    /// # Note
    ///
    /// Used by the test code.
    #[allow(dead_code)]
    pub(crate) fn set(&mut self, opts: Vec<Opt>) {
        self.entries = opts;
    }

    /// Register a single option.
    pub fn add(&mut self, opt: Opt) {
        self.entries.push(opt);
    }

    /// Returns the first option with the specified long name.
    pub fn find_long(&self, long_name: &str) -> Option<&Opt> {
        if long_name.is_empty() {
            return None;
        }

        self.entries.iter().find(|o| o.long_name == long_name)
    }

    /// Returns the first option with the specified short name.
    pub fn find_short(&self, short_name: char) -> Option<&Opt> {
        self.entries
            .iter()
            .find(|o| o.short_name == Some(short_name))
    }

    /// Iterate over the options in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Opt> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Opts {
    type Item = &'a Opt;
    type IntoIter = std::slice::Iter<'a, Opt>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
