use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use trtc_core::{AppConfig, CategoryPaths, FileCategory};

/// CLI configuration parsed from command line arguments and environment variables
#[derive(Parser, Debug)]
#[command(name = "trtc")]
#[command(
    author,
    version,
    about = "Upload reverse transfer files to the TRTC API"
)]
#[command(after_help = "Examples:
  trtc upload --apikey KEY --courses exports/courses.csv
  trtc upload --courses c.csv --equivalencies e.csv   # key from TRTC_API_KEY
  trtc config set --endpoint https://rts.tnreversetransfer.org/api/Upload
  trtc config get")]
pub struct Config {
    /// Path to the configuration file [default: <config dir>/trtc/config.toml]
    #[arg(long, global = true, value_name = "PATH", env = "TRTC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, global = true, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Upload files to the TRTC API
    #[command(long_about = "Upload files to the Tennessee Reverse Transfer Consortium (TRTC) API.
You can upload courses, equivalencies, students, and student courses files.
At least one file must be specified.")]
    #[command(after_help = "Examples:
  trtc upload --apikey KEY --courses path/to/courses.csv
  trtc upload --apikey KEY --courses c.csv --equivalencies e.csv")]
    Upload(UploadArgs),
    /// Show or change stored settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Inputs for a single upload
#[derive(Args, Debug, Default)]
pub struct UploadArgs {
    /// API key for authentication (falls back to the stored api_key)
    #[arg(long, env = "TRTC_API_KEY", hide_env_values = true)]
    pub apikey: Option<String>,

    /// Path to courses file
    #[arg(long, value_name = "PATH")]
    pub courses: Option<String>,

    /// Path to equivalencies file
    #[arg(long, value_name = "PATH")]
    pub equivalencies: Option<String>,

    /// Path to students file
    #[arg(long, value_name = "PATH")]
    pub students: Option<String>,

    /// Path to student courses file
    #[arg(long = "studentcourses", value_name = "PATH")]
    pub student_courses: Option<String>,
}

impl UploadArgs {
    /// Key from `--apikey` or `TRTC_API_KEY`, else the stored `api_key`.
    /// An empty flag value counts as not given.
    pub fn api_key(&self, stored: &AppConfig) -> String {
        self.apikey
            .clone()
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| stored.api_key.clone())
    }

    /// Paths keyed by category; options that were not given stay empty.
    pub fn category_paths(&self) -> CategoryPaths {
        [
            (FileCategory::Courses, &self.courses),
            (FileCategory::Equivalencies, &self.equivalencies),
            (FileCategory::Students, &self.students),
            (FileCategory::StudentCourses, &self.student_courses),
        ]
        .into_iter()
        .fold(CategoryPaths::new(), |paths, (category, path)| {
            match path {
                Some(path) => paths.set(category, path.clone()),
                None => paths,
            }
        })
    }
}

/// `config` subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the current configuration
    Get,
    /// Update configuration values
    #[command(after_help = "Example: trtc config set --endpoint https://example.org/api/Upload --ignore-cert-error false")]
    Set {
        /// API endpoint URL
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
        /// Log file path
        #[arg(long = "logfile", value_name = "PATH")]
        log_file: Option<String>,
        /// Skip TLS certificate verification (true/false)
        #[arg(long, value_name = "BOOL")]
        ignore_cert_error: Option<bool>,
    },
}

/// Log verbosity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
