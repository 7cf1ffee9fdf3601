pub mod config;
pub mod format;
pub mod normalize;
pub mod resolver;
pub mod types;

pub use config::Config;
pub use format::{format_count, humanize_key};
pub use normalize::normalize;
pub use resolver::resolve;
pub use types::*;
