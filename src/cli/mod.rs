//! Command-line interface module
//!
//! Implements the command handlers behind clap:
//! - config init: Initialize configuration file
//! - init: Create the data file
//! - everything else: load, apply one operation, print, save
pub mod config;
pub mod init;
pub mod track;
