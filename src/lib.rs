// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Crate for parsing `getopt(3)`-style command-line options.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Examples](#examples)
//! * [Details](#details)
//! * [Terminology](#terminology)
//! * [Summary of features and behaviour](#summary-of-features-and-behaviour)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! This crate parses a list of command-line arguments (or a single
//! command-line string) against a table of options. The result is an
//! ordered list of [Entry]'s: one per option found and one per positional
//! argument. Option arguments can also be converted to a number or string
//! and written into a [Binding] as they are found.
//!
//! # Quickstart
//!
//! > **Note:** If you are not familiar with command-line handling,
//! > see the [terminology](#terminology) section.
//!
//! 1. Create an [Opt] for each option you wish to support.
//!
//!    By default, options are "flags" (they do not accept an argument).
//!
//!    ```rust
//!    use clopt::{Need, Opt};
//!
//!    // Support "-v" and "--verbose".
//!    let verbose = Opt::new("verbose").short('v');
//!
//!    // Support "-o FILE", "-oFILE", "-o=FILE", "--output FILE" and
//!    // "--output=FILE".
//!    let output = Opt::new("output")
//!        .short('o')
//!        .needs(Need::Required)
//!        .arg_name("FILE");
//!    ```
//!
//! 1. Create a [Parser] to represent your program and register the options:
//!
//!    ```rust
//!    # use clopt::{Need, Opt, Parser};
//!    #
//!    let parser = Parser::new("my app")
//!        .summary("does things")
//!        .opt(Opt::new("verbose").short('v'))
//!        .opt(Opt::new("output").short('o').needs(Need::Required));
//!    ```
//!
//! 1. Call one of the `parse*()` methods and inspect the [ParseResult]:
//!
//!    ```rust
//!    # use clopt::{Need, Opt, Parser};
//!    #
//!    # let parser = Parser::new("my app")
//!    #     .opt(Opt::new("verbose").short('v'))
//!    #     .opt(Opt::new("output").short('o').needs(Need::Required));
//!    #
//!    let result = parser.parse_str("-vo out.txt input.txt").unwrap();
//!
//!    assert!(result.is_option_set("verbose"));
//!    assert_eq!(result.get_argument("output"), "out.txt");
//!
//!    for entry in result.non_options() {
//!        assert_eq!(entry.original_text, "input.txt");
//!    }
//!    ```
//!
//!    Use [Parser::parse()] to parse the programs own arguments.
//!
//! # Examples
//!
//! Values can be written directly into variables the program owns:
//!
//! ```rust
//! use clopt::{Binding, Error, Need, Opt, Opts, Parser, Result};
//!
//! fn main() -> Result<()> {
//!     let quiet = Binding::new(false);
//!     let count = Binding::new(1);
//!     let name = Binding::new(String::from("world"));
//!
//!     let mut opts = Opts::new();
//!
//!     opts.add(Opt::new("quiet").short('q').bind_flag(&quiet));
//!     opts.add(Opt::new("count").short('c').needs(Need::Required).bind_int(&count));
//!     opts.add(Opt::new("name").bind_string(&name));
//!
//!     let parser = Parser::new("hello").opts(opts);
//!
//!     parser.parse_str("-c 3 --name=you")?;
//!
//!     assert!(!quiet.get());
//!     assert_eq!(count.get(), 3);
//!     assert_eq!(name.get(), "you");
//!
//!     // Conversion failures are errors.
//!     let result = parser.parse_str("-c three");
//!
//!     assert_eq!(
//!         result,
//!         Err(Error::TypeMismatch {
//!             option: "-c".into(),
//!             value: "three".into(),
//!             expected: "an integer",
//!         })
//!     );
//!
//!     Ok(())
//! }
//! ```
//!
//! For further examples, try out the programs in the `demos/` directory:
//!
//! ```bash
//! $ cargo run --example basic -- -vv --width=80 -o out.txt one "two words" -- -x
//! $ echo '-a "hello world" --count 3' | cargo run --example from-string
//! $ cargo run --example dos -- /F:1440 /Q /N 9 A:
//! ```
//!
//! # Details
//!
//! ## Terminology
//!
//! > **Note:** For further details, see `getopt(3)` and `getopt_long(3)`.
//!
//! - An "argument" is a value passed to a program on the command-line.
//!
//!   Arguments can be "options" or "positional arguments".
//!
//! - A "short option" is a prefix (`-`) followed by a single character
//!   name, for example `-a`. Several short options can be grouped together
//!   behind a single prefix: `-abc` is the same as `-a -b -c`.
//!
//! - A "long option" is a prefix (`--`) followed by a name, for example
//!   `--verbose`.
//!
//! - An "option argument" is a value paired with an option. It can be
//!   attached (`-oFILE`), assigned (`-o=FILE`, `--output=FILE`) or given as
//!   the next argument (`-o FILE`, `--output FILE`).
//!
//! - A "flag" is an option that does not accept an argument.
//!
//! - A "positional argument" is an argument that is not an option.
//!
//! - The special argument `--` means "end of all options": every argument
//!   that follows it is a positional argument, even if it starts with a
//!   dash.
//!
//! ## Example of argument types
//!
//! Assume a program that supports `-o FILE` and the flags `-a` and `-v`,
//! and that is run as follows:
//!
//! ```bash
//! $ myprog -av -o out.txt "hello, world" -- -x
//! ```
//!
//! The result contains the following entries:
//!
//! ```text
//! '-a'            # A flag option.
//! '-v'            # A flag option.
//! '-o out.txt'    # An option ('o') with an option argument ('out.txt').
//! 'hello, world'  # A positional argument.
//! '-x'            # A positional argument (it follows '--').
//! ```
//!
//! # Summary of features and behaviour
//!
//! - Parses arguments in strict order.
//! - Arguments are not permuted: options and positional arguments can be
//!   intermingled and the result records them in the order given.
//! - Options can be specified multiple times.
//! - Options can accept no argument, an optional argument or a required
//!   argument.
//!
//!   An optional argument is only taken from the next command-line argument
//!   if that argument does not look like an option.
//!
//! - The option prefixes, assignment symbol and end of options marker can
//!   be changed using [Settings] (for example to parse `/F:1440`).
//! - A single command-line string can be parsed directly: quotes and
//!   escapes are handled by [split()].
//! - Option arguments can be converted to strings, signed and unsigned
//!   integers and floating point numbers.
//! - A help / usage statement can be generated from the registered options.
//! - Parsing stops at the first error.
//!
//! # Limitations
//!
//! - Long option names must be given in full (no abbreviations).
//! - Options cannot accept multiple values.
//! - Subcommands are not supported.
//! - Help text is not word wrapped.

mod binding;
mod error;
mod opt;
mod parser;
mod result;
mod settings;
mod split;

pub use binding::{Binding, Target};
pub use error::{Error, Result};
pub use opt::{Need, Opt, Opts};
pub use parser::{get_args, Parser};
pub use result::{Entry, ParseResult};
pub use settings::Settings;
pub use split::{split, split_keep_empty, DEFAULT_DELIMITERS, DEFAULT_ESCAPE, DEFAULT_QUOTES};
