//! Configuration management for coursediff
//!
//! This module provides the recognized-category set and the emoji markers
//! used when rendering notification titles, with defaults, environment
//! overrides and TOML file loading.

use std::path::Path;
use serde::{Deserialize, Serialize};

use crate::core::Category;
use crate::error::{NotifyError, Result};

/// Global configuration for the notification builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Module kinds collected into their own category; everything else is `misc`
    pub categories: Vec<Category>,
    /// Title and course-line markers
    pub emoji: EmojiConfig,
}

/// Emoji markers prefixed to titles. An empty marker renders no prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmojiConfig {
    pub course: String,
    pub assign: String,
    pub calendar: String,
    pub forum: String,
    /// Shared by `resource` and `folder` digests
    pub resource: String,
    pub quiz: String,
    pub misc: String,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            categories: Category::defaults(),
            emoji: EmojiConfig::default(),
        }
    }
}

impl Default for EmojiConfig {
    fn default() -> Self {
        Self {
            course: "📘".to_string(),
            assign: "📝".to_string(),
            calendar: "⏰".to_string(),
            forum: "✉️".to_string(),
            resource: "📚".to_string(),
            quiz: "💻".to_string(),
            misc: "🗂️".to_string(),
        }
    }
}

impl EmojiConfig {
    /// Marker used in titles for a category
    pub fn for_category(&self, category: Category) -> &str {
        match category {
            Category::Assign => &self.assign,
            Category::Calendar => &self.calendar,
            Category::Folder | Category::Resource => &self.resource,
            Category::Forum => &self.forum,
            Category::Quiz => &self.quiz,
            Category::Misc => &self.misc,
        }
    }
}

impl NotifyConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| NotifyError::Configuration(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a file if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides on top of this configuration
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(val) = std::env::var("COURSEDIFF_CATEGORIES") {
            self.categories = parse_category_list(&val)?;
        }

        if let Ok(val) = std::env::var("COURSEDIFF_COURSE_EMOJI") {
            self.emoji.course = val;
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        for (i, category) in self.categories.iter().enumerate() {
            if self.categories[..i].contains(category) {
                return Err(NotifyError::Configuration(format!(
                    "category '{}' listed more than once",
                    category
                )));
            }
        }

        Ok(())
    }
}

/// Parse a comma separated list such as `assign,forum,quiz`
pub fn parse_category_list(value: &str) -> Result<Vec<Category>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = NotifyConfig::default();

        assert_eq!(config.categories.len(), 6);
        assert!(!config.categories.contains(&Category::Misc));
        assert_eq!(config.emoji.course, "📘");
        assert_eq!(config.emoji.for_category(Category::Folder), "📚");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = NotifyConfig::default();
        config.categories.push(Category::Forum);
        assert!(matches!(config.validate(), Err(NotifyError::Configuration(_))));
    }

    #[test]
    fn test_toml_partial_override() {
        let config = NotifyConfig::from_toml_str(
            r#"
            categories = ["forum", "quiz"]

            [emoji]
            quiz = ""
            "#,
        )
        .unwrap();

        assert_eq!(config.categories, vec![Category::Forum, Category::Quiz]);
        assert_eq!(config.emoji.quiz, "");
        assert_eq!(config.emoji.assign, "📝");
    }

    #[test]
    fn test_toml_unknown_category() {
        let result = NotifyConfig::from_toml_str(r#"categories = ["wiki"]"#);
        assert!(matches!(result, Err(NotifyError::Configuration(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[emoji]\ncourse = \"🎓\"").unwrap();

        let config = NotifyConfig::load(file.path()).unwrap();
        assert_eq!(config.emoji.course, "🎓");
        assert_eq!(config.categories, Category::defaults());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = NotifyConfig::load(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(NotifyError::Io(_))));
    }

    #[test]
    fn test_parse_category_list() {
        assert_eq!(
            parse_category_list("assign, forum,,quiz").unwrap(),
            vec![Category::Assign, Category::Forum, Category::Quiz]
        );
        assert!(parse_category_list("assign,wiki").is_err());
    }

    #[test]
    fn test_env_config_loading() {
        std::env::set_var("COURSEDIFF_CATEGORIES", "calendar,forum");
        std::env::set_var("COURSEDIFF_COURSE_EMOJI", "🏫");

        let config = NotifyConfig::from_env().unwrap();

        assert_eq!(config.categories, vec![Category::Calendar, Category::Forum]);
        assert_eq!(config.emoji.course, "🏫");

        // Cleanup
        std::env::remove_var("COURSEDIFF_CATEGORIES");
        std::env::remove_var("COURSEDIFF_COURSE_EMOJI");
    }
}
