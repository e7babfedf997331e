// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing options bound to program variables.
///
/// Set `CLOPT_DEBUG` in the environment to see how the parser deals with
/// each argument.
use clopt::{Binding, Need, Opt, Opts, Parser, Result};
use std::env;
use std::io;

fn init_tracing() {
    let level = if env::var_os("CLOPT_DEBUG").is_some() {
        tracing::Level::TRACE
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let help = Binding::new(false);
    let verbose = Binding::new(false);
    let output = Binding::new(String::from("-"));
    let width = Binding::new(72u32);
    let scale = Binding::new(1.0);

    let mut opts = Opts::new();

    opts.add(Opt::new("help").short('h').help("show this help").bind_flag(&help));
    opts.add(
        Opt::new("verbose")
            .short('v')
            .help("more output")
            .bind_flag(&verbose),
    );
    opts.add(
        Opt::new("output")
            .short('o')
            .needs(Need::Required)
            .arg_name("FILE")
            .help("where to write")
            .bind_string(&output),
    );
    opts.add(Opt::new("width").help("line width").bind_uint(&width));
    opts.add(Opt::new("scale").short('s').bind_double(&scale));

    let parser = Parser::new("basic")
        .version("0.1.0")
        .summary("show what was found on the command-line")
        .notes("Everything after '--' is a positional argument.")
        .opts(opts);

    let result = parser.parse()?;

    if help.get() {
        // Ignore errors writing to stdout.
        let _ = parser.generate_help(&mut io::stdout());
        return Ok(());
    }

    for (i, entry) in result.iter().enumerate() {
        if entry.is_option {
            println!(
                "{}: option: {:?} (long: {:?}, short: {:?}, argument: {:?})",
                i, entry.original_text, entry.long_name, entry.short_name, entry.argument
            );
        } else {
            println!("{}: positional argument: {:?}", i, entry.original_text);
        }
    }

    println!("verbose: {}", verbose.get());
    println!("output: {:?}", output.get());
    println!("width: {}", width.get());
    println!("scale: {}", scale.get());

    Ok(())
}
