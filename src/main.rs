// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Naiad CLI entrypoint.
//!
//! There is no command-line surface: the binary takes no arguments and runs
//! the interactive calculator TUI. The only configuration is the optional
//! `NAIAD_TUI_PALETTE` environment variable (see `tui::theme`).

use std::error::Error;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program}\n\nRuns the interactive calculator TUI. No arguments are accepted.\n\nSet NAIAD_TUI_PALETTE=fg,bg,accent (hex colors) to override the palette."
    );
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<(), ()> {
    match args.next() {
        None => Ok(()),
        Some(_) => Err(()),
    }
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "naiad".to_owned());

        if parse_options(args).is_err() {
            print_usage(&program);
            std::process::exit(2);
        }

        naiad::tui::run()
    })();

    if let Err(err) = result {
        eprintln!("naiad: {err}");
        std::process::exit(1);
    }
}
