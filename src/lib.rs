// Library exports for the binary and for testing
pub mod app;
pub mod async_tasks;
pub mod cli;
pub mod config;
pub mod constants;
pub mod deck;
pub mod error;
pub mod input;
pub mod navigator;
pub mod types;
pub mod ui;
pub mod view;
