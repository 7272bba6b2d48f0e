//! questsave CLI: save and load player data files from the shell.
//!
//! - `questsave demo [DIR]`: walk through all three formats in `DIR`
//! - `questsave name|status|player save ...`: write one file
//! - `questsave name|status|player load PATH`: read one file back
//!
//! Confirmations and diagnostics are logged to stdout. Exit code is 0 on
//! success, 1 when a save fails or a load yields nothing.

mod commands;
mod demo;
mod parse;

use std::process;

use questsave::{csv_triple, line_record, single_string};

use commands::build_cli;
use parse::{matches_to_action, CliAction};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    let matches = build_cli().get_matches();

    let exit_code = match matches_to_action(&matches) {
        Ok(action) => run(action),
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    };
    process::exit(exit_code);
}

fn run(action: CliAction) -> i32 {
    match action {
        CliAction::Demo { dir } => demo::run_demo(&dir),
        CliAction::SaveName { text, path } => exit_code(single_string::encode(&text, &path).is_ok()),
        CliAction::LoadName { path } => match single_string::decode(&path) {
            Some(name) => {
                println!("{}", name);
                0
            }
            None => 1,
        },
        CliAction::SaveStatus { status, path } => {
            exit_code(csv_triple::encode_triple(&status, &path).is_ok())
        }
        CliAction::LoadStatus { path } => match csv_triple::decode(&path) {
            Some(status) => {
                println!("{}", status);
                0
            }
            None => 1,
        },
        CliAction::SavePlayer { record, path } => {
            exit_code(line_record::encode(&record, &path).is_ok())
        }
        CliAction::LoadPlayer { path } => match line_record::decode(&path) {
            Ok(Some(record)) => {
                println!("{}", record);
                0
            }
            Ok(None) => 1,
            Err(e) => {
                eprintln!("(error) {}", e);
                1
            }
        },
    }
}

fn exit_code(ok: bool) -> i32 {
    if ok {
        0
    } else {
        1
    }
}
