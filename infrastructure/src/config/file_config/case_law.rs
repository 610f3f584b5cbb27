//! Case-law catalogue configuration from TOML (`[case_law]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileCaseLawConfig {
    /// JSON array of case records; the built-in seed is used when unset
    pub catalog_path: Option<PathBuf>,
}
