//! Command-line interface for filescope
//!
//! Thin front end over [`FileCollector`](crate::collector::FileCollector):
//! loads settings and project configuration, runs the requested stage and
//! prints the result as text or JSON.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub mod commands;
mod output;

pub use output::Output;

/// filescope - which files reach which analysis tool
#[derive(Parser)]
#[command(
    name = "filescope",
    version = env!("CARGO_PKG_VERSION"),
    about = "Decide which project files each analysis tool receives",
    long_about = "filescope enumerates the files under a project root, applies local and \
                  remote exclusion rules, checks that analysis tools can read them, and \
                  narrows the result per tool by language."
)]
pub struct Cli {
    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom settings file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List analyzable files under a root
    List(commands::list::ListArgs),
    /// List the files a specific tool would receive
    Filter(commands::filter::FilterArgs),
    /// Show the built-in tool registry
    Tools(commands::tools::ToolsArgs),
    /// Show effective settings
    Config,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.verbose > 0, self.quiet);
        let settings = crate::config::Settings::load(self.config.as_deref())?;

        match self.command {
            Some(Commands::List(args)) => commands::list::execute(args, &settings, &output),
            Some(Commands::Filter(args)) => commands::filter::execute(args, &settings, &output),
            Some(Commands::Tools(args)) => commands::tools::execute(args, &output),
            Some(Commands::Config) => commands::config::execute(&settings, &output),
            None => {
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // Keep the walker and glob crates quiet unless tracing everything
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,ignore=warn,globset=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,ignore=warn,globset=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
