pub mod chunk;
pub mod config;
pub mod error;
pub mod format;
pub mod settings;

pub use chunk::*;
pub use config::Config;
pub use error::*;
pub use format::FormatHint;
pub use settings::*;
