//! Terminal front end for the bakery inventory.
//!
//! Everything here is generic over `BufRead` + `Write`, so a whole session can
//! be driven from a scripted buffer.

pub mod config;
pub mod console;
pub mod menu;
pub mod operations;

pub use config::{AppConfig, Cli};
pub use console::{Console, ConsoleError};
pub use menu::{run, InvalidChoice, MenuChoice};
