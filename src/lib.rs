pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod grid;
pub mod render;
pub mod rules;
pub mod sim;
