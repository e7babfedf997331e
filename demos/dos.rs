// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing DOS-style options such as `FORMAT /F:1440 /Q A:`.
use clopt::{Binding, Need, Opt, Opts, Parser, Result, Settings};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let size = Binding::new(0);
    let sectors = Binding::new(0);
    let quick = Binding::new(false);

    let settings = Settings::new().short_prefix("/").assignment(":");

    let mut opts = Opts::new();

    opts.add(Opt::default().short('F').needs(Need::Required).bind_int(&size));
    opts.add(Opt::default().short('N').needs(Need::Required).bind_int(&sectors));
    opts.add(Opt::default().short('Q').bind_flag(&quick));

    let parser = Parser::new("format").settings(settings).opts(opts);

    let result = parser.parse()?;

    let drives: Vec<&str> = result
        .non_options()
        .map(|e| e.original_text.as_str())
        .collect();

    println!(
        "size: {}, sectors: {}, quick: {}, drives: {:?}",
        size.get(),
        sectors.get(),
        quick.get(),
        drives
    );

    Ok(())
}
