use clap::Parser;
use vartier::{
    cli::{init_verbose, Cli, Command, FULL_VERSION},
    commands::{classify, secondary},
    utils::{handle_error_and_exit, Result},
};

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    let subcommand_name = match cli.command {
        Command::Classify(_) => "classify",
        Command::Secondary(_) => "secondary",
    };

    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        *FULL_VERSION,
        subcommand_name
    );
    match cli.command {
        Command::Classify(args) => classify::classify(args)?,
        Command::Secondary(args) => secondary::secondary(args)?,
    }
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
