pub mod catalog;
pub mod config;
pub mod filename;
pub mod logging;
pub mod transfer;
