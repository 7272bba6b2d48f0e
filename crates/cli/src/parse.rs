//! ArgMatches → CliAction conversion.

use clap::ArgMatches;
use questsave::{PlayerRecord, StatusTriple, DEFAULT_DIR};
use std::path::PathBuf;

/// The result of parsing the command line.
#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    /// Run the walkthrough in a save directory.
    Demo { dir: PathBuf },
    SaveName { text: String, path: PathBuf },
    LoadName { path: PathBuf },
    SaveStatus { status: StatusTriple, path: PathBuf },
    LoadStatus { path: PathBuf },
    SavePlayer { record: PlayerRecord, path: PathBuf },
    LoadPlayer { path: PathBuf },
}

fn required(m: &ArgMatches, name: &str) -> Result<String, String> {
    m.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| format!("Missing argument: {}", name))
}

fn path(m: &ArgMatches) -> Result<PathBuf, String> {
    required(m, "path").map(PathBuf::from)
}

fn int(m: &ArgMatches, name: &str) -> Result<i32, String> {
    let raw = required(m, name)?;
    raw.parse::<i32>()
        .map_err(|e| format!("Invalid {}: {:?} ({})", name, raw, e))
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "demo" => {
            let dir = sub_matches
                .get_one::<String>("dir")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR));
            Ok(CliAction::Demo { dir })
        }
        "name" => parse_name(sub_matches),
        "status" => parse_status(sub_matches),
        "player" => parse_player(sub_matches),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn parse_name(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub, m) = matches.subcommand().ok_or("No name subcommand")?;
    match sub {
        "save" => Ok(CliAction::SaveName {
            text: required(m, "text")?,
            path: path(m)?,
        }),
        "load" => Ok(CliAction::LoadName { path: path(m)? }),
        other => Err(format!("Unknown name subcommand: {}", other)),
    }
}

fn parse_status(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub, m) = matches.subcommand().ok_or("No status subcommand")?;
    match sub {
        "save" => Ok(CliAction::SaveStatus {
            status: StatusTriple::new(int(m, "hp")?, int(m, "mp")?, int(m, "level")?),
            path: path(m)?,
        }),
        "load" => Ok(CliAction::LoadStatus { path: path(m)? }),
        other => Err(format!("Unknown status subcommand: {}", other)),
    }
}

fn parse_player(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub, m) = matches.subcommand().ok_or("No player subcommand")?;
    match sub {
        "save" => {
            let mut record =
                PlayerRecord::new(required(m, "name")?, int(m, "max_hp")?, int(m, "level")?);
            record.set_hp(int(m, "hp")?);
            record.set_weapon(m.get_one::<String>("weapon").map(String::as_str));
            record.set_armor(m.get_one::<String>("armor").map(String::as_str));
            Ok(CliAction::SavePlayer {
                record,
                path: path(m)?,
            })
        }
        "load" => Ok(CliAction::LoadPlayer { path: path(m)? }),
        other => Err(format!("Unknown player subcommand: {}", other)),
    }
}
