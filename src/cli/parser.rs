use crate::models::{EmotionCategory, IntensityLevel};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rFeelings
/// CLI application to log emotions on a Plutchik wheel with SQLite
#[derive(Parser)]
#[command(
    name = "rfeelings",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log how you feel by tapping a Plutchik wheel and replay the history, using SQLite",
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

    /// Log the emotion under a tap on the wheel
    Tap {
        /// Horizontal offset from the wheel center (right is positive)
        #[arg(long, allow_negative_numbers = true)]
        dx: f64,

        /// Vertical offset from the wheel center (down is positive)
        #[arg(long, allow_negative_numbers = true)]
        dy: f64,

        #[arg(long = "at", help = "When the emotion was felt (YYYY-MM-DD HH:MM), default now")]
        at: Option<String>,
    },

    /// Log an emotion by name
    Add {
        /// JOY, SADNESS, ANGER, FEAR, TRUST, DISGUST, ANTICIPATION, SURPRISE
        category: EmotionCategory,

        /// MILD, MODERATE, INTENSE
        intensity: IntensityLevel,

        #[arg(long = "at", help = "When the emotion was felt (YYYY-MM-DD HH:MM), default now")]
        at: Option<String>,
    },

    /// Show which wheel cell a tap would hit, without logging anything
    Locate {
        #[arg(long, allow_negative_numbers = true)]
        dx: f64,

        #[arg(long, allow_negative_numbers = true)]
        dy: f64,
    },

    /// List logged emotions, most recent first
    List {
        #[arg(long, help = "Print as JSON")]
        json: bool,

        #[arg(long, short, help = "Show at most N entries")]
        limit: Option<usize>,
    },

    /// Show one logged emotion
    Show { id: i64 },

    /// Change the intensity or time of a logged emotion
    Edit {
        id: i64,

        #[arg(long = "intensity", help = "New intensity (MILD, MODERATE, INTENSE)")]
        intensity: Option<IntensityLevel>,

        #[arg(long = "at", help = "New observation time (YYYY-MM-DD HH:MM)")]
        at: Option<String>,
    },

    /// Delete one logged emotion by ID
    Del { id: i64 },

    /// Delete every logged emotion
    Clear {
        #[arg(long, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print the history every time it changes
    Watch {
        #[arg(long, help = "Stop after N snapshots")]
        count: Option<usize>,
    },

    /// Print the emotion table
    Names,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },
}
