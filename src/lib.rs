pub mod calendar;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod pager;
pub mod reports;
pub mod shell;
