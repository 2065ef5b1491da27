use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

// Validated at build time by build.rs
static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub page: PageConfig,
    pub colors: ColorsConfig,
    /// Display titles per section name; sections not listed here render
    /// under their raw name.
    pub sections: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Your Travel Plan".to_string(),
            page: PageConfig::default(),
            colors: ColorsConfig::default(),
            sections: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub margin: String,
    pub numbers: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            margin: "50pt".to_string(),
            numbers: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub heading: String,
    pub accent: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            heading: "#004080".to_string(),
            accent: "#00008b".to_string(),
        }
    }
}

impl Config {
    /// The config compiled into the binary.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or fall back to the compiled default.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|_| Self::compiled_default()),
            Err(_) => Self::compiled_default(),
        }
    }

    /// Display title for a section.
    pub fn section_title<'a>(&'a self, name: &'a str) -> &'a str {
        self.sections.get(name).map(String::as_str).unwrap_or(name)
    }
}
