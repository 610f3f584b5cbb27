//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["legalai.toml", ".legalai.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `LEGALAI_*` environment variables (`LEGALAI_DISPATCH__SEARCH_LIMIT=10`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./legalai.toml` or `./.legalai.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/legalai/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        )
        .extract()
        .map_err(Box::new)
    }

    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }
        if let Some(project_path) = project {
            figment = figment.merge(Toml::file(project_path));
        }
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("LEGALAI_").split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/legalai/config.toml if set,
    /// otherwise falls back to the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("legalai").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./legalai.toml or ./.legalai.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.model.name, "gemini-2.0-flash");
        assert_eq!(config.dispatch.search_limit, 5);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("legalai"));
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("legalai.toml");
        let explicit = dir.path().join("override.toml");

        let mut f = std::fs::File::create(&project).unwrap();
        writeln!(f, "[dispatch]\nsearch_limit = 8\nmax_tool_turns = 4").unwrap();
        let mut f = std::fs::File::create(&explicit).unwrap();
        writeln!(f, "[dispatch]\nsearch_limit = 2").unwrap();

        let config: FileConfig = ConfigLoader::figment(None, Some(&project), Some(&explicit))
            .extract()
            .unwrap();
        assert_eq!(config.dispatch.search_limit, 2);
        assert_eq!(config.dispatch.max_tool_turns, 4);
        assert_eq!(config.model.api_key_env, "GEMINI_API_KEY");
    }

    #[test]
    fn test_missing_global_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let config: FileConfig = ConfigLoader::figment(Some(&missing), None, None)
            .extract()
            .unwrap();
        assert_eq!(config.content.max_bytes, 20 * 1024 * 1024);
    }
}
