// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;
use std::io::Write;

use tracing::{debug, trace};

use crate::binding::{bind, mark_present};
use crate::error::{Error, Result};
use crate::opt::{Need, Opt, Opts};
use crate::result::{Entry, ParseResult};
use crate::settings::Settings;
use crate::split::split;

const USAGE_PREFIX_SPACES: &str = "    ";

/// Get a list of all command-line arguments specified to the program with
/// the program name (the first argument) removed.
///
/// # Note
///
/// Used with [Parser::parse_with_args()]. However, this isn't usually
/// required: just call [Parser::parse()].
pub fn get_args() -> Vec<String> {
    env::args().skip(1).collect()
}

/// Where the parser is up to.
#[derive(Clone, Copy, Debug)]
enum State<'a> {
    /// Looking for options and positional arguments.
    Scanning,
    /// The last entry is an option whose argument may be the next
    /// command-line argument.
    AwaitArgument { opt: &'a Opt, required: bool },
    /// The end of options marker has been seen.
    PastEndOfOptions,
}

/// The main object used to represent the program.
///
/// All consumers of the crate need to create a single object of this type,
/// register the options they support and then call one of the `parse*()`
/// methods.
///
/// # Example
///
/// ```rust
/// use clopt::{Need, Opt, Parser};
///
/// let parser = Parser::new("my app")
///     .opt(Opt::new("all").short('a'))
///     .opt(Opt::new("output").short('o').needs(Need::Required).arg_name("FILE"));
///
/// let result = parser.parse_str("-ao out.txt input.txt").unwrap();
///
/// assert_eq!(result.len(), 3);
/// assert!(result.is_option_set("all"));
/// assert_eq!(result.get_argument("output"), "out.txt");
/// assert_eq!(result[2].original_text, "input.txt");
/// ```
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Parser {
    name: String,
    version: String,
    summary: String,
    help: String,
    notes: String,
    settings: Settings,
    opts: Opts,
}

impl Parser {
    /// Create a new parser for the named program.
    pub fn new(name: &str) -> Self {
        Parser::default().name(name)
    }

    /// Specify the name of the program.
    fn name(self, name: &str) -> Self {
        Parser {
            name: name.into(),
            ..self
        }
    }

    /// Specify the set of options to parse the command-line with.
    pub fn opts(self, opts: Opts) -> Self {
        Parser { opts, ..self }
    }

    /// Register a single option.
    pub fn opt(mut self, opt: Opt) -> Self {
        self.opts.add(opt);
        self
    }

    /// Specify the version of the program.
    pub fn version(self, version: &str) -> Self {
        Parser {
            version: version.into(),
            ..self
        }
    }

    /// Specify brief explanatory text for the program.
    pub fn summary(self, summary: &str) -> Self {
        Parser {
            summary: summary.into(),
            ..self
        }
    }

    /// Specify extended usage information for the program.
    pub fn help(self, help: &str) -> Self {
        Parser {
            help: help.into(),
            ..self
        }
    }

    /// Specify notes for the program.
    pub fn notes(self, notes: &str) -> Self {
        Parser {
            notes: notes.into(),
            ..self
        }
    }

    /// Specify the syntax settings for the parser.
    pub fn settings(self, settings: Settings) -> Self {
        Parser { settings, ..self }
    }

    /// Returns the registered options.
    pub fn get_opts(&self) -> &Opts {
        &self.opts
    }

    /// Returns the syntax settings.
    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    /// Generate a help/usage statement from the registered [Opt]'s.
    ///
    /// Options are listed in the order they were registered. Options
    /// without a name are not shown.
    pub fn generate_help<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut lines = Vec::<String>::new();

        let name = if self.name.is_empty() {
            env::args().next().unwrap_or_default()
        } else {
            self.name.clone()
        };

        let line = format!("NAME:\n{}{}\n", USAGE_PREFIX_SPACES, name);
        lines.push(line);

        if !self.version.is_empty() {
            let line = format!("VERSION:\n{}{}\n", USAGE_PREFIX_SPACES, self.version);
            lines.push(line);
        }

        if !self.summary.is_empty() {
            let line = format!("SUMMARY:\n{}{}\n", USAGE_PREFIX_SPACES, self.summary.trim());
            lines.push(line);
        }

        lines.push("USAGE:".into());

        let line = format!("{}{} [OPTIONS] [ARGUMENT..]\n", USAGE_PREFIX_SPACES, name);
        lines.push(line);

        //------------------------------------------------------------

        lines.push("OPTIONS:".into());

        for opt in self.opts.iter().filter(|o| o.is_reachable()) {
            let line = format!("{}{}", USAGE_PREFIX_SPACES, opt);
            lines.push(line);
        }

        //------------------------------------------------------------

        if !self.help.is_empty() {
            let line = format!("\nHELP:\n\n{}", self.help.trim());
            lines.push(line);
        }

        if !self.notes.is_empty() {
            let line = format!("\nNOTES:\n\n{}", self.notes.trim());
            lines.push(line);
        }

        // Join all the lines together, remove white space at either end and
        // finally append a single newline.
        let mut final_lines = lines.join("\n").trim().to_string();
        final_lines.push('\n');

        writeln!(writer, "{}", final_lines)
    }

    /// Simplest interface to the parser: parse the programs own
    /// command-line arguments.
    pub fn parse(&self) -> Result<ParseResult> {
        self.parse_with_args(get_args())
    }

    /// Parse a set of command line arguments (without the program name).
    ///
    /// # Arguments
    ///
    /// - `cli_args`: Vector of string arguments. Specify your own,
    ///    or call [get_args()].
    ///
    /// # Notes
    ///
    /// - The `cli_args` vector must _not_ specify the command name (which by default
    ///   is returned as the first element by `env::args().collect()` for example.
    ///   Use [get_args()] or [Parser::parse_argv()] as they handle this for you.
    pub fn parse_with_args(&self, cli_args: Vec<String>) -> Result<ParseResult> {
        self.parse_args(&cli_args)
    }

    /// Parse a full argument vector, ignoring the first element (the
    /// program name).
    pub fn parse_argv(&self, argv: Vec<String>) -> Result<ParseResult> {
        let args = argv.get(1..).unwrap_or(&[]);

        self.parse_args(args)
    }

    /// Parse a single command-line string.
    ///
    /// The string is split into arguments using the delimiters, quote
    /// characters and escape character from the [Settings]. The string
    /// should not contain the program name.
    pub fn parse_str(&self, cmd_line: &str) -> Result<ParseResult> {
        let args = split(
            cmd_line,
            self.settings.get_delimiters(),
            self.settings.get_quotes(),
            self.settings.get_escape(),
        );

        self.parse_args(&args)
    }

    fn parse_args(&self, args: &[String]) -> Result<ParseResult> {
        let mut result = ParseResult::new();
        let mut state = State::Scanning;

        // Only advanced once the current argument has been dealt with, since
        // an argument that ends an optional argument search is looked at
        // twice.
        let mut i = 0;

        while i < args.len() {
            let arg = args[i].as_str();

            trace!(index = i, arg, "parsing argument");

            match state {
                State::AwaitArgument { opt, required } => {
                    if !self.settings.is_non_option(arg) {
                        if required {
                            return Err(missing_argument(&result));
                        }

                        debug!(arg, "optional argument not specified");

                        state = State::Scanning;
                        continue;
                    }

                    if let Some(entry) = result.last_mut() {
                        let option = entry.original_text.clone();

                        entry.argument = arg.into();
                        entry.original_text.push(' ');
                        entry.original_text.push_str(arg);

                        bind(opt, &option, arg)?;
                    }

                    state = State::Scanning;
                }
                State::PastEndOfOptions => result.push(Entry::positional(arg)),
                State::Scanning => state = self.parse_arg(arg, &mut result)?,
            }

            i += 1;
        }

        // There shouldn't be any half-handled options left
        if let State::AwaitArgument { required: true, .. } = state {
            return Err(missing_argument(&result));
        }

        Ok(result)
    }

    /// Handle a single argument that is not an options argument.
    fn parse_arg(&self, arg: &str, result: &mut ParseResult) -> Result<State<'_>> {
        if self.settings.is_end_of_options(arg) {
            debug!("end of options");

            return Ok(State::PastEndOfOptions);
        }

        let assignment = self.settings.get_assignment();

        let (specifier, value) = match arg.find(assignment) {
            Some(pos) => (&arg[..pos], Some(&arg[pos + assignment.len()..])),
            None => (arg, None),
        };

        if value.is_some()
            && (specifier == self.settings.get_short_prefix()
                || specifier == self.settings.get_long_prefix())
        {
            return Err(Error::InvalidOption(format!("{}{}", specifier, assignment)));
        }

        if self.settings.is_long_option(specifier) {
            return self.parse_long_option(arg, specifier, value, result);
        }

        if self.settings.is_short_group(specifier) {
            return self.parse_short_group(specifier, value, result);
        }

        result.push(Entry::positional(arg));

        Ok(State::Scanning)
    }

    fn parse_long_option(
        &self,
        arg: &str,
        specifier: &str,
        value: Option<&str>,
        result: &mut ParseResult,
    ) -> Result<State<'_>> {
        let name = &specifier[self.settings.get_long_prefix().len()..];

        let opt = self
            .opts
            .find_long(name)
            .ok_or_else(|| Error::InvalidOption(specifier.into()))?;

        if !opt.needs.takes_argument() && value.is_some() {
            return Err(Error::UnexpectedArgument(specifier.into()));
        }

        let mut entry = Entry::option(arg, name, opt.short_name);

        mark_present(opt);

        let state = match value {
            Some(value) => {
                bind(opt, specifier, value)?;
                entry.argument = value.into();

                State::Scanning
            }
            None if opt.needs.takes_argument() => await_argument(opt),
            None => State::Scanning,
        };

        result.push(entry);

        Ok(state)
    }

    /// Handle a group of one or more short options (`-a`, `-abc`,
    /// `-oFILE`, `-o=FILE`).
    fn parse_short_group(
        &self,
        specifier: &str,
        value: Option<&str>,
        result: &mut ParseResult,
    ) -> Result<State<'_>> {
        let prefix = self.settings.get_short_prefix();
        let assignment = self.settings.get_assignment();

        let names = &specifier[prefix.len()..];

        for (pos, c) in names.char_indices() {
            let option = format!("{}{}", prefix, c);

            let opt = self
                .opts
                .find_short(c)
                .ok_or_else(|| Error::InvalidOption(option.clone()))?;

            // Everything in the group after this option.
            let rest = &names[pos + c.len_utf8()..];

            let mut entry = Entry::option(&option, &opt.long_name, Some(c));

            mark_present(opt);

            if !opt.needs.takes_argument() {
                if rest.is_empty() && value.is_some() {
                    return Err(Error::UnexpectedArgument(option));
                }

                result.push(entry);
                continue;
            }

            // The rest of the group is the options argument. The
            // assignment symbol is only removed if it immediately follows
            // the option.
            let argument = match (rest.is_empty(), value) {
                (false, Some(value)) => Some(format!("{}{}{}", rest, assignment, value)),
                (false, None) => Some(rest.to_string()),
                (true, Some(value)) => Some(value.to_string()),
                (true, None) => None,
            };

            let argument = match argument {
                Some(argument) => argument,
                None => {
                    result.push(entry);

                    return Ok(await_argument(opt));
                }
            };

            entry.original_text.push_str(rest);

            if let Some(value) = value {
                entry.original_text.push_str(assignment);
                entry.original_text.push_str(value);
            }

            bind(opt, &option, &argument)?;
            entry.argument = argument;

            result.push(entry);

            return Ok(State::Scanning);
        }

        Ok(State::Scanning)
    }
}

/// The next argument may be the argument for `opt`.
fn await_argument(opt: &Opt) -> State<'_> {
    let required = opt.needs == Need::Required;

    debug!(
        long_name = %opt.long_name,
        short_name = ?opt.short_name,
        required,
        "looking for option argument"
    );

    State::AwaitArgument { opt, required }
}

fn missing_argument(result: &ParseResult) -> Error {
    let option = result
        .last()
        .map(|e| e.original_text.clone())
        .unwrap_or_default();

    Error::MissingArgument(option)
}
