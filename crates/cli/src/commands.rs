//! clap command tree.
//!
//! Every argument is positional: values to save and the file path to use.

use clap::{Arg, Command};

fn path_arg() -> Arg {
    Arg::new("path").required(true).help("Save file path")
}

fn int_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .required(true)
        .allow_negative_numbers(true)
        .help(help)
}

/// Build the `questsave` command.
pub fn build_cli() -> Command {
    Command::new("questsave")
        .about("Save and load player data for the text RPG prototype")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("demo")
                .about("Run the name, status, and player save/load walkthrough")
                .arg(Arg::new("dir").help("Save directory (default: data)")),
        )
        .subcommand(
            Command::new("name")
                .about("Single-string name files")
                .subcommand_required(true)
                .subcommand(
                    Command::new("save")
                        .about("Write a name")
                        .arg(Arg::new("text").required(true).help("Name to save"))
                        .arg(path_arg()),
                )
                .subcommand(
                    Command::new("load")
                        .about("Read a name")
                        .arg(path_arg()),
                ),
        )
        .subcommand(
            Command::new("status")
                .about("CSV hp,mp,level files")
                .subcommand_required(true)
                .subcommand(
                    Command::new("save")
                        .about("Write hp, mp, and level")
                        .arg(int_arg("hp", "Hit points"))
                        .arg(int_arg("mp", "Magic points"))
                        .arg(int_arg("level", "Level"))
                        .arg(path_arg()),
                )
                .subcommand(
                    Command::new("load")
                        .about("Read hp, mp, and level")
                        .arg(path_arg()),
                ),
        )
        .subcommand(
            Command::new("player")
                .about("Six-line player record files")
                .subcommand_required(true)
                .subcommand(
                    Command::new("save")
                        .about("Write a player record")
                        .arg(Arg::new("name").required(true).help("Player name"))
                        .arg(int_arg("hp", "Current hit points"))
                        .arg(int_arg("max_hp", "Maximum hit points"))
                        .arg(int_arg("level", "Level"))
                        .arg(path_arg())
                        .arg(Arg::new("weapon").help("Equipped weapon"))
                        .arg(Arg::new("armor").help("Equipped armor")),
                )
                .subcommand(
                    Command::new("load")
                        .about("Read a player record and show its status")
                        .arg(path_arg()),
                ),
        )
}
