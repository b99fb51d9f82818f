//! Command-line front end for the DIOT converter.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
