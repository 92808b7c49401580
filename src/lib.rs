//! Library entry point for the devault CLI.

pub mod access;
pub mod apps;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod panels;
pub mod path;
pub mod patterns;
pub mod presenter;
pub mod scanner;
pub mod session;
pub mod versions;
pub mod walker;
