use crate::export::ExportFormat;
use crate::models::retention::RetentionScope;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for Blue Nine Access
#[derive(Parser)]
#[command(
    name = "bluenine",
    version = env!("CARGO_PKG_VERSION"),
    about = "Shared-device attendance ledger: sign in/out, lateness tracking and exports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Show or change the active shift settings
    Settings {
        #[arg(long = "start", value_name = "HH:MM", help = "Shift start time")]
        start: Option<String>,

        #[arg(long = "end", value_name = "HH:MM", help = "Shift end time")]
        end: Option<String>,

        #[arg(long = "grace", value_name = "MINUTES", help = "Grace period after shift start")]
        grace: Option<u32>,

        #[arg(
            long = "selfie-required",
            value_name = "BOOL",
            action = ArgAction::Set,
            value_parser = clap::value_parser!(bool),
            help = "Whether signing in needs a selfie (true/false)"
        )]
        selfie_required: Option<bool>,
    },

    /// Manage reusable shift templates
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// Sign a person in
    In {
        /// Person's name (case-insensitive)
        name: String,

        #[arg(long = "selfie", value_name = "FILE", help = "Image file to attach")]
        selfie: Option<PathBuf>,
    },

    /// Sign a person out (closes their open entry)
    Out {
        /// Person's name (case-insensitive)
        name: String,
    },

    /// List attendance entries, most recent first
    List {
        #[arg(long, short = 'n', help = "How many recent entries to show")]
        recent: Option<usize>,

        #[arg(long, conflicts_with = "recent", help = "Show the whole ledger")]
        all: bool,

        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// Rename the person on one entry
    Rename {
        /// Entry id
        id: i64,

        /// New name
        new_name: String,
    },

    /// Delete one entry
    Del {
        /// Entry id
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Bulk-delete entries by day, week, month or everything
    Clear {
        #[arg(value_enum)]
        scope: RetentionScope,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export the ledger
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, help = "Bundle selfies into a zip (csv format)")]
        selfies: bool,

        #[arg(long, value_name = "DIR", help = "Output directory (default: export_dir)")]
        dir: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum TemplateAction {
    /// Create a template
    Add {
        name: String,

        #[arg(long = "start", value_name = "HH:MM")]
        start: String,

        #[arg(long = "end", value_name = "HH:MM")]
        end: String,

        #[arg(long = "grace", value_name = "MINUTES", default_value_t = crate::core::templates::DEFAULT_TEMPLATE_GRACE)]
        grace: u32,
    },

    /// List templates
    List,

    /// Delete a template
    Del { id: i64 },

    /// Copy a template into the active settings
    Apply { id: i64 },
}
