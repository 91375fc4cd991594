//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub language: String,

    // URL
    pub root: String,

    // Directory
    pub content_file: String,
    pub static_dir: String,
    pub public_dir: String,

    // Page
    pub footer_note: String,
    pub meta_generator: bool,
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            language: "en".to_string(),

            root: "/".to_string(),

            content_file: "content.yml".to_string(),
            static_dir: "static".to_string(),
            public_dir: "public".to_string(),

            footer_note: String::new(),
            meta_generator: true,
            animation: AnimationConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Entrance transition tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub enable: bool,
    /// Length of one appear transition
    pub duration_ms: u32,
    /// Extra delay per project card index
    pub card_stagger_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enable: true,
            duration_ms: 500,
            card_stagger_ms: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_file, "content.yml");
        assert_eq!(config.public_dir, "public");
        assert!(config.animation.enable);
        assert_eq!(config.animation.card_stagger_ms, 50);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: TheCyberBeat
public_dir: dist
animation:
  enable: false
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "TheCyberBeat");
        assert_eq!(config.public_dir, "dist");
        assert!(!config.animation.enable);
        assert_eq!(config.animation.duration_ms, 500);
        assert_eq!(config.static_dir, "static");
    }
}
