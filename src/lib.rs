// Sales cluster dashboard library

pub mod config;
pub mod data;
pub mod logging;
pub mod summary;
pub mod ui;
