pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod processor;
pub mod reader;
pub mod summary;
pub mod types;
pub mod utility;
