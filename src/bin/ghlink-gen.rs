// Copyright (C) 2024 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

use std::process::ExitCode;

use clap::Parser;

use ghlink_gen::RepoInfoError;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File to generate links for, relative to the current directory
    filename: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let Some(filename) = args.filename else {
        println!("Usage: ghlink-gen <filename>");
        println!();
        println!("Example: ghlink-gen index.html");
        return ExitCode::from(1);
    };
    match ghlink_gen::run(".", &filename) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Parse failures stay off stderr; only subprocess-level
            // failures get the diagnostic line.
            if matches!(err, RepoInfoError::NoRemoteConfigured(_)) {
                eprintln!("Error getting git info: {}", err);
            }
            println!("❌ Error: Could not determine GitHub repository information.");
            println!("   Make sure you're in a git repository with a GitHub remote.");
            ExitCode::from(1)
        }
    }
}
