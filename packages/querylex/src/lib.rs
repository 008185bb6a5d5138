pub mod batch;
pub mod config;
pub mod lexer;
pub mod logging;
mod utils;
pub mod vocabulary_loader;

pub use utils::time;

pub const QUERYLEX_VER: &str = env!("CARGO_PKG_VERSION");
pub static SOURCE_CONFIG_FILE: &str = "querylex_config.json";
