//! Read-only state shared by every stage of one build.
//!
//! A [`SiteContext`] is assembled once at startup from the resolved config,
//! the effective paths and the generation timestamp, and is only borrowed
//! afterwards.

use crate::config::{PathsConfig, SiteConfig};
use crate::naming::NameFormatter;
use chrono::{Datelike, Local, NaiveDate};
use std::path::PathBuf;

/// Date the site was generated, captured once so every page agrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationStamp {
    /// Human form, e.g. `March 04, 2025`.
    pub display: String,
    pub year: i32,
    /// `YYYY-MM-DD`, used for sitemap `lastmod`.
    pub iso_date: String,
}

impl GenerationStamp {
    pub fn now() -> Self {
        Self::at(Local::now().date_naive())
    }

    pub fn at(date: NaiveDate) -> Self {
        Self {
            display: date.format("%B %d, %Y").to_string(),
            year: date.year(),
            iso_date: date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Filesystem locations for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    pub content: PathBuf,
    pub output: PathBuf,
    /// Folder holding `template.html` and the asset subfolders.
    pub template: PathBuf,
    /// Flat folder of static pages.
    pub pages: PathBuf,
}

impl SitePaths {
    pub fn from_config(paths: &PathsConfig) -> Self {
        Self {
            content: PathBuf::from(&paths.content_folder),
            output: PathBuf::from(&paths.output_folder),
            template: PathBuf::from(&paths.template_folder),
            pages: PathBuf::from(&paths.pages_folder),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SiteContext {
    pub config: SiteConfig,
    pub formatter: NameFormatter,
    pub paths: SitePaths,
    pub stamp: GenerationStamp,
}

impl SiteContext {
    pub fn new(config: SiteConfig, paths: SitePaths, stamp: GenerationStamp) -> Self {
        Self {
            formatter: NameFormatter::new(&config.formatting),
            config,
            paths,
            stamp,
        }
    }

    /// Context with paths taken straight from the config and today's date.
    pub fn from_config(config: SiteConfig) -> Self {
        let paths = SitePaths::from_config(&config.paths);
        Self::new(config, paths, GenerationStamp::now())
    }

    pub fn site_name(&self) -> &str {
        &self.config.site.name
    }

    pub fn description(&self) -> &str {
        &self.config.site.description
    }

    /// Upper-cased first character of the site name, used for the logo badge.
    pub fn site_name_initial(&self) -> String {
        self.site_name()
            .chars()
            .next()
            .map_or_else(|| "D".to_string(), |c| c.to_uppercase().collect())
    }
}
