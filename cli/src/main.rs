mod args;
mod commands;
mod global_settings;

use crate::args::build_cli;
use crate::global_settings::GlobalSettings;
use anyhow::Result;

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let settings = GlobalSettings::new(&matches)?;

    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if let Some(level) = settings.log_level() {
        logger.filter_level(level);
    }
    logger.init();

    if let Some(("completions", sub)) = matches.subcommand() {
        if let Some(shell) =
            sub.get_one::<clap_complete_command::Shell>("shell").cloned()
        {
            shell.generate(&mut build_cli(), &mut std::io::stdout());
        }
        return Ok(());
    }

    let output = commands::run(settings.kind, &matches)?;
    println!("{}", output);
    Ok(())
}
