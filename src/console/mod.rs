//! Console module
//!
//! Text-menu front end: the menu loop plus report formatting.

pub mod format;
pub mod menu;

pub use menu::Console;
