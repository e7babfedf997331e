// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

/// The error type.
///
/// Every variant carries the text of the offending option (as it appeared
/// on the command-line) so callers can produce a useful diagnostic.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Syntax errors (user error)
    //------------------------------
    /// User specified an unknown option, or a malformed bare assignment
    /// such as `-=` or `--=`.
    #[error("invalid option: '{0}'")]
    InvalidOption(String),

    /// An option that requires an argument was not given one.
    #[error("option '{0}' requires an argument")]
    MissingArgument(String),

    /// An option that does not accept an argument was given one.
    #[error("option '{0}' does not accept arguments")]
    UnexpectedArgument(String),

    //------------------------------
    // Typed argument errors (user error)
    //------------------------------
    /// The argument for an option bound to a numeric value could not be
    /// converted to that type.
    #[error("argument '{value}' for option '{option}' must be {expected}")]
    TypeMismatch {
        /// The option the argument was given to.
        option: String,
        /// The argument text.
        value: String,
        /// Description of the expected type ("an integer", "a number").
        expected: &'static str,
    },

    /// The argument for an option bound to a numeric value was numeric,
    /// but did not fit the bound type.
    #[error("argument '{value}' for option '{option}' is out of range")]
    RangeError {
        /// The option the argument was given to.
        option: String,
        /// The argument text.
        value: String,
    },
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
