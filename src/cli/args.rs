use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ResolveOptions;
use crate::translation::Direction;

#[derive(Parser, Debug)]
#[command(name = "qtr")]
#[command(about = "SQL ⟷ MongoDB query translation client")]
#[command(version)]
pub struct Args {
    /// File containing the query to translate (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Translate a MongoDB command to SQL instead of SQL to MongoDB
    #[arg(short = 'r', long)]
    pub reverse: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Suppress status messages and the spinner
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print debug diagnostics to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options selecting and tuning the translation service.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Base URL of the translation service
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

impl ConnectionArgs {
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            endpoint: self.endpoint.clone(),
            timeout_secs: self.timeout,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive translation mode
    #[command(visible_alias = "i")]
    Interactive {
        /// Start in MongoDB → SQL mode
        #[arg(short = 'r', long)]
        reverse: bool,
    },
    /// Configure qtr settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

pub const fn direction_for(reverse: bool) -> Direction {
    if reverse {
        Direction::DocToSql
    } else {
        Direction::SqlToDoc
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_shot_reverse() {
        let args = Args::try_parse_from(["qtr", "-r", "query.js", "--endpoint", "http://h:1"]).unwrap();

        assert!(args.reverse);
        assert_eq!(args.file, Some(PathBuf::from("query.js")));
        assert_eq!(args.connection.endpoint.as_deref(), Some("http://h:1"));
        assert!(args.command.is_none());
    }

    #[test]
    fn test_global_connection_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["qtr", "interactive", "--reverse", "--timeout", "5"]).unwrap();

        assert!(matches!(args.command, Some(Command::Interactive { reverse: true })));
        assert_eq!(args.connection.resolve_options().timeout_secs, Some(5));
    }

    #[test]
    fn test_direction_for() {
        assert_eq!(direction_for(false), Direction::SqlToDoc);
        assert_eq!(direction_for(true), Direction::DocToSql);
    }
}
