use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sukhan")]
#[command(about = "Browse, search and read poems from a static dataset", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON dataset (defaults to $SUKHAN_DATA_PATH or assets/data/poems.json)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Preference database (defaults to $SUKHAN_PREFS_DB or a temp-dir file)
    #[arg(long, global = true)]
    pub prefs_db: Option<PathBuf>,

    /// Directory for rolling log files (relative paths resolve against the
    /// working directory); logging is off when unset
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pin the day of month used for the poem of the day
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..=31))]
    pub day: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render every poem, poem of the day marked
    List,

    /// Render poems matching a query with matches highlighted
    Search { query: String },

    /// Render one poem by fragment (`#poem/<slug>`) or bare slug
    Show { target: String },

    /// Show or flip the light/dark preference
    Theme {
        #[arg(value_enum, default_value = "show")]
        action: ThemeAction,
    },

    /// Read page events from stdin, one per line
    ///
    /// `#...` lines change the fragment, `:theme` toggles the preference,
    /// `:quit` exits, any other line replaces the search input.
    Browse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Show,
    Toggle,
}
