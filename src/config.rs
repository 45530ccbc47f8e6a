//! YAML configuration for sites, sections and pipeline tuning.
//!
//! Every field has a default, so the tool runs without a config file. A file
//! only needs to list the values it wants to change:
//!
//! ```yaml
//! http:
//!   user_agent: "Mozilla/5.0 (X11; Linux x86_64)"
//!   concurrency: 8
//! match_policy: any
//! sections:
//!   Business: https://www.bbc.com/news/business
//! ```
//!
//! Sections given in a file are merged over the built-in ones. Section names
//! compare case-insensitively, so `technology:` replaces the built-in
//! `Technology` entry.

use crate::error::ConfigError;
use crate::ranking::SelectionLimits;
use crate::relevance::MatchPolicy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tokio::fs;
use tracing::{info, instrument};

/// The outlet whose pages are crawled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Constant stored in every article's `source` field.
    pub source: String,
    /// Origin that relative article links are resolved against.
    pub origin: String,
    /// Path prefix identifying article links on a listing page.
    pub article_prefix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            source: "BBC".to_string(),
            origin: "https://www.bbc.com".to_string(),
            article_prefix: "/news".to_string(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Maximum number of article pages fetched at once.
    pub concurrency: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 20,
            concurrency: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub http: HttpConfig,
    /// Section name to listing URL.
    pub sections: BTreeMap<String, String>,
    pub match_policy: MatchPolicy,
    pub ranking: SelectionLimits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            http: HttpConfig::default(),
            sections: default_sections(),
            match_policy: MatchPolicy::default(),
            ranking: SelectionLimits::default(),
        }
    }
}

fn default_sections() -> BTreeMap<String, String> {
    [
        ("Technology", "https://www.bbc.com/news/technology"),
        ("Health", "https://www.bbc.com/news/health"),
        ("Science", "https://www.bbc.com/news/science_and_environment"),
    ]
    .into_iter()
    .map(|(name, url)| (name.to_string(), url.to_string()))
    .collect()
}

impl Config {
    /// Parse a YAML document, filling anything it omits from the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Config = serde_yaml::from_str(yaml)?;
        let mut sections = default_sections();
        sections.retain(|builtin, _| {
            !config
                .sections
                .keys()
                .any(|name| name.eq_ignore_ascii_case(builtin))
        });
        sections.append(&mut config.sections);
        config.sections = sections;
        Ok(config)
    }

    /// Listing URL for a section, matched case-insensitively.
    pub fn section_url(&self, name: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|(section, _)| section.eq_ignore_ascii_case(name.trim()))
            .map(|(_, url)| url.as_str())
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.sections.keys().map(String::as_str).collect()
    }
}

/// Load the configuration from `path`, or the defaults when no path is given.
#[instrument(level = "info")]
pub async fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let Some(path) = path else {
        info!("No config file given; using defaults");
        return Ok(Config::default());
    };

    let yaml = fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
    let config = Config::from_yaml(&yaml)?;
    info!(
        path,
        sections = config.sections.len(),
        "Loaded configuration"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sections() {
        let config = Config::default();
        assert_eq!(config.section_names(), vec!["Health", "Science", "Technology"]);
        assert_eq!(
            config.section_url("Science"),
            Some("https://www.bbc.com/news/science_and_environment")
        );
    }

    #[test]
    fn test_section_lookup_ignores_case() {
        let config = Config::default();
        assert_eq!(
            config.section_url("technology"),
            Some("https://www.bbc.com/news/technology")
        );
        assert_eq!(config.section_url("Sports"), None);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
http:
  concurrency: 8
match_policy: any
sections:
  Business: https://www.bbc.com/news/business
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.http.concurrency, 8);
        assert_eq!(config.http.user_agent, "Mozilla/5.0");
        assert_eq!(config.match_policy, MatchPolicy::Any);
        assert_eq!(config.site.article_prefix, "/news");
        assert_eq!(config.ranking, SelectionLimits::default());
        assert_eq!(config.sections.len(), 4);
        assert!(config.section_url("Business").is_some());
    }

    #[test]
    fn test_file_section_replaces_builtin_of_other_case() {
        let yaml = "sections:\n  technology: http://mirror.local/tech\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.section_names(), vec!["Health", "Science", "technology"]);
        assert_eq!(config.section_url("Technology"), Some("http://mirror.local/tech"));
        assert_eq!(config.section_url("technology"), Some("http://mirror.local/tech"));
    }

    #[test]
    fn test_example_config_parses() {
        let config = Config::from_yaml(include_str!("../config.example.yaml")).unwrap();
        assert_eq!(config.site, SiteConfig::default());
        assert_eq!(config.http, HttpConfig::default());
        assert_eq!(
            config.section_url("business"),
            Some("https://www.bbc.com/news/business")
        );
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let result = Config::from_yaml("http: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[tokio::test]
    async fn test_load_config_without_path() {
        let config = load_config(None).await.unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_load_config_missing_file() {
        let result = load_config(Some("/nonexistent/news_compare.yaml")).await;
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
