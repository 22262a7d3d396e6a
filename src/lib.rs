pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod token;
pub mod ui;
