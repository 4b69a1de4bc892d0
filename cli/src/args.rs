use crate::commands::Kind;
use crate::global_settings::GlobalSettings;
use clap::{Arg, Command, builder::EnumValueParser};

/// A positional argument holding an interval like "[1, 10)" or a bound.
/// Hyphen values are allowed, so that "(-∞, 5]" or "-3" are not mistaken
/// for switches.
fn value_arg(id: &'static str, name: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .value_name(name)
        .help(help)
        .required(true)
        .allow_hyphen_values(true)
}

/// A command that operates on two intervals
fn binary(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(value_arg("left", "LEFT", "First interval"))
        .arg(value_arg("right", "RIGHT", "Second interval"))
}

pub(crate) fn build_cli() -> Command {
    Command::new("interval")
        .version("0.1")
        .about("Compute with intervals like [1, 10) or (-∞, 5]")
        .subcommand_required(true)
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .subcommand(
            Command::new("parse")
                .about("Check an interval and show its canonical form")
                .arg(value_arg("interval", "INTERVAL", "The interval")),
        )
        .subcommand(
            Command::new("contains")
                .about("Whether a value belongs to an interval")
                .arg(value_arg("interval", "INTERVAL", "The interval"))
                .arg(value_arg("value", "VALUE", "The value to look for")),
        )
        .subcommand(binary(
            "overlaps",
            "Whether two intervals have values in common",
        ))
        .subcommand(binary("union", "Values in either interval"))
        .subcommand(binary("intersect", "Values in both intervals"))
        .subcommand(binary(
            "subtract",
            "Values in the first interval but not in the second",
        ))
        .subcommand(
            Command::new("convert")
                .about("Convert an interval to another type of bounds")
                .arg(value_arg("interval", "INTERVAL", "The interval"))
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_name("KIND")
                        .help("Type of the converted bounds")
                        .required(true)
                        .value_parser(EnumValueParser::<Kind>::new()),
                ),
        )
        .subcommand(
            // Use    eval "$(interval completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}
