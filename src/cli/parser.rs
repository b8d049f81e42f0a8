use clap::{Parser, Subcommand};

/// Command-line interface definition for ttcard
/// CLI application to render a school timetable as a day-grouped schedule
#[derive(Parser)]
#[command(
    name = "ttcard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render a school timetable as a day-grouped schedule in your terminal",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file
    Init {
        /// Timetable entity id the card should display
        #[arg(long, help = "Timetable entity id to render")]
        entity: Option<String>,

        /// Default state file path stored in the configuration
        #[arg(long, value_name = "FILE")]
        state: Option<String>,

        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or validate)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Render the timetable for the configured entity
    Render {
        /// Entity id (overrides the configured one)
        #[arg(long, help = "Entity id to render instead of the configured one")]
        entity: Option<String>,

        /// State file to read (overrides the configured one)
        #[arg(long, value_name = "FILE")]
        state: Option<String>,

        /// Render as if the current instant were this timestamp
        #[arg(
            long,
            value_name = "TIMESTAMP",
            help = "Fixed current time, YYYY-MM-DD HH:MM (useful for tests)"
        )]
        now: Option<String>,

        /// Disable ANSI colors and styling
        #[arg(long)]
        plain: bool,
    },
}
