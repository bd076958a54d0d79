use anyhow::Result;
use clap::Parser;

use qtr_cli::cli::commands::{configure, interactive, translate};
use qtr_cli::cli::{Args, Command, direction_for};
use qtr_cli::logging;
use qtr_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    logging::init(args.verbose);

    match args.command {
        Some(Command::Interactive { reverse }) => {
            let options = interactive::InteractiveOptions {
                direction: direction_for(reverse || args.reverse),
                connection: args.connection,
            };
            interactive::run_interactive(options).await?;
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                direction: direction_for(args.reverse),
                connection: args.connection,
            };
            let outcome = translate::run_translate(options).await?;

            // The result text already went to stdout; signal the failure to
            // scripts through the exit status.
            if outcome.is_failure() {
                std::process::exit(exitcode::UNAVAILABLE);
            }
        }
    }

    Ok(())
}
