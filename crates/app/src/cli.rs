use std::path::PathBuf;

use clap::{Parser, Subcommand};
use practice_core::model::{AgeBand, Language};

#[derive(Debug, Parser)]
#[command(name = "practice")]
#[command(about = "Adaptive place-value practice", long_about = None)]
#[command(version)]
pub struct Cli {
    /// SQLite database holding the session
    #[arg(long, global = true, env = "PRACTICE_DB_URL", default_value = "sqlite://practice.sqlite3")]
    pub db: String,

    /// Content language (en or hi); defaults to the saved preference
    #[arg(long, global = true, env = "PRACTICE_LANG")]
    pub lang: Option<Language>,

    /// Attempts that make up a full session
    #[arg(long, global = true, env = "PRACTICE_TARGET", default_value_t = 10)]
    pub target: u32,

    /// Log filter, e.g. `debug` or `services=debug`
    #[arg(long, global = true, env = "PRACTICE_LOG", default_value = "warn")]
    pub log_level: String,

    /// Speak prompts and explainers through espeak-ng
    #[arg(long, global = true)]
    pub speak: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Answer exercises interactively (default)
    Practice,

    /// Show the concept overview and explainer
    Lesson {
        /// Grade band: g1-2 or g3-5
        #[arg(long, default_value = "g1-2")]
        age_band: AgeBand,
    },

    /// Show accuracy, timing and recent attempts
    Progress,

    /// Write progress as JSON
    Export {
        /// Output file; stdout when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Replace progress with a previously exported JSON file
    Import {
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Delete all attempts and points
    Reset,

    /// Save the preferred language
    Lang {
        #[arg(value_name = "LANG")]
        language: Language,
    },
}
