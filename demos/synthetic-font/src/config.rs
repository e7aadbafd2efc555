use std::path::PathBuf;

use bmfont_data::FontInfo;
use color_eyre::eyre::{Context, Result, eyre};

/// Settings for the synthetic font, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Path of the `.fnt` file; pages are written next to it
    pub output: PathBuf,
    /// Number of atlas pages to spread the glyphs over
    pub pages: usize,
    /// JSON file with `info` line overrides
    pub info_file: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("synthetic.fnt"),
            pages: 2,
            info_file: None,
        }
    }
}

impl DemoConfig {
    /// Reads `BMFONT_DEMO_OUT`, `BMFONT_DEMO_PAGES` and `BMFONT_DEMO_INFO`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(output) = var("BMFONT_DEMO_OUT") {
            config.output = PathBuf::from(output);
        }

        if let Some(pages) = var("BMFONT_DEMO_PAGES") {
            config.pages = pages
                .trim()
                .parse()
                .wrap_err_with(|| format!("BMFONT_DEMO_PAGES is not a page count: '{pages}'"))?;
        }

        if config.pages == 0 {
            return Err(eyre!("BMFONT_DEMO_PAGES must be at least 1"));
        }

        config.info_file = var("BMFONT_DEMO_INFO").map(PathBuf::from);

        Ok(config)
    }

    /// Loads the `info` overrides, if configured.
    pub fn load_info(&self) -> Result<Option<FontInfo>> {
        let Some(path) = &self.info_file else {
            return Ok(None);
        };

        let json = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read font info '{}'", path.display()))?;
        let info = serde_json::from_str(&json)
            .wrap_err_with(|| format!("Invalid font info JSON in '{}'", path.display()))?;

        Ok(Some(info))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<DemoConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        DemoConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(config_from(&[]).unwrap(), DemoConfig::default());
    }

    #[test]
    fn page_count_is_validated() {
        assert_eq!(config_from(&[("BMFONT_DEMO_PAGES", " 3 ")]).unwrap().pages, 3);
        assert!(config_from(&[("BMFONT_DEMO_PAGES", "0")]).is_err());
        assert!(config_from(&[("BMFONT_DEMO_PAGES", "many")]).is_err());
    }

    #[test]
    fn info_overrides_are_loaded_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("info.json");
        std::fs::write(&path, r#"{ "face": "Synthetic", "size": 9, "charset": "utf-8" }"#).unwrap();

        let config = config_from(&[("BMFONT_DEMO_INFO", path.to_str().unwrap())]).unwrap();
        let info = config.load_info().unwrap().unwrap();

        assert_eq!(info.face.as_deref(), Some("Synthetic"));
        assert_eq!(info.size, 9);
        assert_eq!(info.aa, 2);
    }
}
