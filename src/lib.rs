pub mod api;
pub mod cli;
pub mod config;
pub mod interactive;
pub mod models;
pub mod services;
pub mod utils;
