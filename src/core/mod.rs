//! Core modules for the formdeck session engine and its terminal surfaces.

pub mod catalog;
pub mod editor;
pub mod error;
pub mod output;
pub mod repl;
pub mod script;
pub mod store;
pub mod time;
pub mod tui;
