use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Directory configuration
// ---------------------------------------------------------------------------

/// Tunables for the directory page.  Every field has a default, so a config
/// file only needs to list what it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DirectoryConfig {
    /// Cards revealed initially and per sentinel hit.
    pub page_size: usize,
    /// Time each carousel slide stays active.
    pub carousel_interval_ms: u64,
    /// Carousel slide images, relative to the asset root or absolute URIs.
    pub slides: Vec<String>,
    /// Courses offered in the selector before any found in the data.
    pub course_options: Vec<String>,
    /// Image shown for records without a photo; the built-in silhouette
    /// when unset.
    pub placeholder_image: Option<String>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            page_size: 25,
            carousel_interval_ms: 3000,
            slides: (1..=5).map(|i| format!("images/slider{i}.jpg")).collect(),
            course_options: ["MCA", "PhD", "B.Tech", "M.Tech"]
                .map(String::from)
                .to_vec(),
            placeholder_image: None,
        }
    }
}

impl DirectoryConfig {
    /// Read a JSON config file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: DirectoryConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            bail!("page_size must be at least 1");
        }
        if self.carousel_interval_ms == 0 {
            bail!("carousel_interval_ms must be positive");
        }
        if self.slides.is_empty() {
            bail!("at least one carousel slide is required");
        }
        Ok(())
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DirectoryConfig::default();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.carousel_interval(), Duration::from_secs(3));
        assert_eq!(config.slides.len(), 5);
        assert_eq!(config.slides[0], "images/slider1.jpg");
        assert_eq!(config.course_options, vec!["MCA", "PhD", "B.Tech", "M.Tech"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("directory.json");
        std::fs::write(&path, r#"{ "page_size": 10 }"#).unwrap();

        let config = DirectoryConfig::load(&path).unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.carousel_interval_ms, 3000);
        assert_eq!(config.slides.len(), 5);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("directory.json");

        std::fs::write(&path, r#"{ "page_size": 0 }"#).unwrap();
        assert!(DirectoryConfig::load(&path).is_err());

        std::fs::write(&path, r#"{ "slides": [] }"#).unwrap();
        assert!(DirectoryConfig::load(&path).is_err());

        std::fs::write(&path, r#"{ "pagesize": 5 }"#).unwrap();
        let err = DirectoryConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
    }
}
