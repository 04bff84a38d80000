//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Module containing the implementation of the `render` command.
/// This command turns a narration script and assets into a captioned short.
pub mod render;
