use crate::commands::Kind;
use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, builder::EnumValueParser};
use log::LevelFilter;

pub struct GlobalSettings {
    // Type of the bounds for all intervals on the command line
    pub kind: Kind,

    // Number of -v switches
    pub verbosity: u8,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            Arg::new("kind")
                .long("kind")
                .short('k')
                .value_name("KIND")
                .help("Type of the interval bounds")
                .default_value("int")
                .value_parser(EnumValueParser::<Kind>::new())
                .global(true),
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show log messages, repeat for more details")
                .action(ArgAction::Count)
                .global(true),
        ]
    }

    /// Create the settings from the command line arguments.  Global switches
    /// are propagated to the subcommand, so read them from there.  The
    /// default kind comes from the switch definition in [`Self::cli()`].
    pub fn new(args: &ArgMatches) -> Result<Self> {
        let args = args.subcommand().map_or(args, |(_, sub)| sub);
        Ok(GlobalSettings {
            kind: args
                .get_one::<Kind>("kind")
                .copied()
                .context("no kind for the interval bounds")?,
            verbosity: args.get_count("verbose"),
        })
    }

    /// The log level requested on the command line.  Without any -v, this
    /// is None and RUST_LOG applies.
    pub fn log_level(&self) -> Option<LevelFilter> {
        match self.verbosity {
            0 => None,
            1 => Some(LevelFilter::Info),
            2 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }
}
