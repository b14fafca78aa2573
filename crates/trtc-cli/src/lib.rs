//! trtc CLI - Command-line interface for uploading reverse transfer files
//!
//! This crate provides the CLI application that ties together all trtc components.

pub mod commands;
pub mod config;
pub mod logging;
pub mod settings;

pub use config::{Command, Config, ConfigAction, LogLevel, UploadArgs};
pub use settings::ConfigUpdate;
