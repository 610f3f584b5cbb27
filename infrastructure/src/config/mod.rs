//! Configuration file loading for legalai
//!
//! The priority order (highest to lowest):
//!
//! 1. `LEGALAI_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./legalai.toml` or `./.legalai.toml`
//! 4. Global: `$XDG_CONFIG_HOME/legalai/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_ENDPOINT, DEFAULT_MAX_BYTES, FileCaseLawConfig, FileConfig,
    FileContentConfig, FileDispatchConfig, FileLoggingConfig, FileModelConfig, FileOutputConfig,
    FileOutputFormat,
};
pub use loader::ConfigLoader;
