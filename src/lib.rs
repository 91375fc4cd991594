//! folio-rs: A static portfolio page generator
//!
//! This crate renders a single portfolio page (hero, projects, skills,
//! about, contact and footer) from a YAML content document, using Tera
//! templates embedded in the binary.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod render;
pub mod server;

use anyhow::Result;
use std::path::Path;

/// The main application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content document path
    pub content_path: std::path::PathBuf,
    /// Static assets directory
    pub static_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Folio {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_path = base_dir.join(&config.content_file);
        let static_dir = base_dir.join(&config.static_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            content_path,
            static_dir,
            public_dir,
        })
    }

    /// Path of the site configuration file
    pub fn config_path(&self) -> std::path::PathBuf {
        self.base_dir.join("_config.yml")
    }

    /// Load and validate the content document
    pub fn load_content(&self) -> Result<content::ContentDocument> {
        Ok(content::ContentDocument::load(&self.content_path)?)
    }

    /// Generate the page
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
