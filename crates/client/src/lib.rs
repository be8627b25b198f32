//! tabroll_client - CLI and execution client for tabroll.

pub mod cli;
pub mod client;
pub mod engine;
pub mod output;

pub use client::{ServiceConfig, TabularClient};
