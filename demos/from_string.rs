// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how to parse command-lines read from standard input.
///
/// Each line is parsed separately; errors are reported and parsing
/// continues with the next line.
use clopt::{Need, Opt, Parser};
use std::io::{self, BufRead};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(io::stderr)
        .init();

    let parser = Parser::new("from-string")
        .opt(Opt::new("all").short('a'))
        .opt(Opt::new("count").short('c').needs(Need::Required).arg_name("N"))
        .opt(Opt::new("tag").needs(Need::Optional))
        .opt(Opt::default().short('x'));

    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line?;

        match parser.parse_str(&line) {
            Ok(result) => {
                for entry in &result {
                    println!("{:?}", entry);
                }
            }
            Err(e) => eprintln!("ERROR: {:?}: {}", line, e),
        }
    }

    Ok(())
}
