pub mod config;
pub mod data_models;
pub mod error;
pub mod llm;
pub mod processor;
pub mod search;

pub use config::Config;
pub use data_models::{Analysis, ChatReport, SearchResult};
pub use error::GleanError;
pub use processor::{ChatOptions, Processor};
