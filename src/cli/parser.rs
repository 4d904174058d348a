use clap::{Parser, Subcommand};

/// Command-line interface definition for gatelog
/// CLI application to track vehicles and commanders at a checkpoint with SQLite
#[derive(Parser)]
#[command(
    name = "gatelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Checkpoint journal: track vehicles and commanders arriving and departing, using SQLite",
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

/// Operations shared by `vehicle` and `commander`.
#[derive(Subcommand, Debug, Clone)]
pub enum EntityAction {
    /// Register a new entry (status: idle)
    Add {
        /// Vehicle number or commander name
        name: String,
    },

    /// Delete an entry by ID
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List entries, optionally filtered by a substring
    List {
        #[arg(long, short, help = "Only entries containing this text")]
        search: Option<String>,

        #[arg(long, help = "Print JSON instead of a table")]
        json: bool,
    },

    /// Move an entry to its next status (idle → arrived → departed → idle)
    Cycle { id: i64 },
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their defaults")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Vehicles (identified by number)
    Vehicle {
        #[command(subcommand)]
        action: EntityAction,
    },

    /// Commanders (identified by full name)
    Commander {
        #[command(subcommand)]
        action: EntityAction,
    },

    /// Show or clear the event history
    History {
        #[arg(long, short, help = "Only events whose name or type contains this text")]
        search: Option<String>,

        #[arg(long, short, help = "Maximum number of events to show")]
        limit: Option<usize>,

        #[arg(
            long,
            conflicts_with_all = ["search", "limit", "json"],
            help = "Delete the whole history (irreversible)"
        )]
        clear: bool,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt (with --clear)")]
        yes: bool,

        #[arg(long, help = "Print JSON instead of a table")]
        json: bool,
    },

    /// Dashboard: counters and latest activity
    Stats {
        #[arg(long, short, help = "Number of recent events to show")]
        recent: Option<usize>,

        #[arg(long, help = "Print JSON instead of text")]
        json: bool,
    },

    /// Fill the database with generated vehicles and commanders
    Seed {
        #[arg(long, short, default_value_t = 500, help = "Entries to generate per kind")]
        count: usize,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Print the internal operations log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
