//! Account directory module

pub mod client;

pub use client::HttpAccountDirectory;
