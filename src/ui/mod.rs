//! ui
//!
//! User-facing output utilities.
//!
//! # Design
//!
//! All CLI output goes through this module so formatting and the
//! quiet/debug flags are handled in one place. The library layer never
//! prints; it returns outcomes and the CLI renders them here.

pub mod output;
