// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;
use std::num::IntErrorKind;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::{Error, Result};
use crate::opt::Opt;

const EXPECTED_INTEGER: &str = "an integer";
const EXPECTED_NUMBER: &str = "a number";

/// A caller-owned value that the parser writes into.
///
/// A `Binding` is a shared handle: clone it (or pass a reference to one of
/// the `Opt::bind_*()` methods) and the parser and the caller will both see
/// the same value.
///
/// # Example
///
/// ```rust
/// use clopt::{Binding, Opt, Opts, Parser};
///
/// let verbose = Binding::new(false);
///
/// let mut opts = Opts::new();
/// opts.add(Opt::new("verbose").short('v').bind_flag(&verbose));
///
/// let parser = Parser::new("prog").opts(opts);
/// parser.parse_with_args(vec!["-v".into()]).unwrap();
///
/// assert!(verbose.get());
/// ```
#[derive(Default)]
pub struct Binding<T>(Arc<Mutex<T>>);

impl<T> Binding<T> {
    /// Create a new binding holding `value`.
    pub fn new(value: T) -> Self {
        Binding(Arc::new(Mutex::new(value)))
    }

    /// Replace the bound value.
    pub fn set(&self, value: T) {
        // A panic while the lock was held cannot leave a plain value
        // half-written, so a poisoned lock is still usable.
        let mut guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = value;
    }

    /// Returns a copy of the bound value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Binding(Arc::clone(&self.0))
    }
}

/// Two bindings are equal if they refer to the same value.
impl<T> PartialEq for Binding<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0.try_lock() {
            Ok(value) => write!(f, "Binding({:?})", *value),
            Err(_) => write!(f, "Binding(<locked>)"),
        }
    }
}

/// The typed destination for an option argument.
#[derive(Clone, Debug, PartialEq)]
pub enum Target {
    /// The argument is stored verbatim.
    Str(Binding<String>),
    /// The argument must be a signed integer.
    Int(Binding<i32>),
    /// The argument must be a non-negative integer.
    UInt(Binding<u32>),
    /// The argument must be a floating point number.
    Double(Binding<f64>),
}

impl Target {
    /// Name used for the argument in help output if the option does not
    /// specify one.
    pub(crate) fn default_arg_name(&self) -> &'static str {
        match self {
            Target::Str(_) => "STRING",
            Target::Int(_) | Target::UInt(_) => "INTEGER",
            Target::Double(_) => "NUMBER",
        }
    }
}

/// Record that the option has been seen on the command-line.
pub(crate) fn mark_present(opt: &Opt) {
    if let Some(flag) = &opt.flag {
        flag.set(true);
    }
}

/// Convert `value` to the type of the options [Target] and store it.
///
/// `option` is the option as specified on the command-line and is only used
/// for error reporting.
pub(crate) fn bind(opt: &Opt, option: &str, value: &str) -> Result<()> {
    let target = match &opt.target {
        Some(target) => target,
        None => return Ok(()),
    };

    match target {
        Target::Str(b) => b.set(value.into()),
        Target::Int(b) => b.set(parse_int(option, value)?),
        Target::UInt(b) => b.set(parse_uint(option, value)?),
        Target::Double(b) => b.set(parse_double(option, value)?),
    }

    Ok(())
}

fn type_mismatch(option: &str, value: &str, expected: &'static str) -> Error {
    Error::TypeMismatch {
        option: option.into(),
        value: value.into(),
        expected,
    }
}

fn range_error(option: &str, value: &str) -> Error {
    Error::RangeError {
        option: option.into(),
        value: value.into(),
    }
}

fn parse_int(option: &str, value: &str) -> Result<i32> {
    value.trim().parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => range_error(option, value),
        _ => type_mismatch(option, value, EXPECTED_INTEGER),
    })
}

fn parse_uint(option: &str, value: &str) -> Result<u32> {
    // Parse signed and wider than the target so that negative and
    // too-large values are range errors rather than type errors.
    let n = value.trim().parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => range_error(option, value),
        _ => type_mismatch(option, value, EXPECTED_INTEGER),
    })?;

    if n < 0 || n > i64::from(u32::MAX) {
        return Err(range_error(option, value));
    }

    Ok(n as u32)
}

fn parse_double(option: &str, value: &str) -> Result<f64> {
    let text = value.trim();

    let n = text
        .parse::<f64>()
        .map_err(|_| type_mismatch(option, value, EXPECTED_NUMBER))?;

    // "1e999" parses as infinity: only an explicit "inf" or "infinity"
    // is allowed to produce one.
    if n.is_infinite() && !text.to_ascii_lowercase().contains("inf") {
        return Err(range_error(option, value));
    }

    Ok(n)
}
