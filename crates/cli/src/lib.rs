//! Demo surface for the entity model: configuration and the printed walkthrough.

pub mod config;
pub mod demo;

pub use config::Config;
