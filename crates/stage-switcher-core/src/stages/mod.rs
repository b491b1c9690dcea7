//! Named deployment stages and their base URLs.
//!
//! A [`StageMap`] keeps stages in configuration order, which is also the order
//! they appear in the toolbar menu.

mod label;
mod path;

pub use label::capitalize_words;
pub use path::stage_path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building or querying a [`StageMap`].
#[derive(Debug, Error)]
pub enum StageError {
    #[error("stage `{0}` is defined more than once")]
    DuplicateStage(String),
    #[error("stage `{stage}` has an invalid URL `{url}`: {source}")]
    InvalidUrl {
        stage: String,
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("stage `{stage}` URL `{url}` has no host")]
    MissingHost { stage: String, url: String },
    #[error("unknown stage `{0}`")]
    UnknownStage(String),
    #[error("current stage `{0}` is not in the stage map")]
    UnknownCurrentStage(String),
}

/// One stage: a name ("staging") and the site's base URL on that stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub name: String,
    pub url: String,
}

impl Stage {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Path component of the base URL, `""` if it has none.
    pub fn path(&self) -> &str {
        stage_path(&self.url)
    }

    /// Menu title for this stage.
    pub fn label(&self) -> String {
        capitalize_words(&self.name)
    }
}

/// Ordered, validated stage name -> base URL mapping. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageMap {
    stages: Vec<Stage>,
}

impl StageMap {
    /// Validate and wrap `stages`. Names must be unique and every URL must be
    /// absolute with a host.
    pub fn new(stages: Vec<Stage>) -> Result<Self, StageError> {
        for (i, stage) in stages.iter().enumerate() {
            if stages[..i].iter().any(|s| s.name == stage.name) {
                return Err(StageError::DuplicateStage(stage.name.clone()));
            }
            let parsed = url::Url::parse(&stage.url).map_err(|source| StageError::InvalidUrl {
                stage: stage.name.clone(),
                url: stage.url.clone(),
                source,
            })?;
            if parsed.host_str().is_none() {
                return Err(StageError::MissingHost {
                    stage: stage.name.clone(),
                    url: stage.url.clone(),
                });
            }
        }
        Ok(Self { stages })
    }

    pub fn get(&self, name: &str) -> Option<&Stage> {
        self.stages.iter().find(|s| s.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Look up a stage, failing with [`StageError::UnknownStage`].
    pub fn require(&self, name: &str) -> Result<&Stage, StageError> {
        self.get(name)
            .ok_or_else(|| StageError::UnknownStage(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Stage> {
        vec![
            Stage::new("development", "http://example.dev"),
            Stage::new("staging", "http://example-staging.com"),
            Stage::new("production", "http://example.com"),
        ]
    }

    #[test]
    fn keeps_configuration_order() {
        let map = StageMap::new(sample()).unwrap();
        let names: Vec<&str> = map.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["development", "staging", "production"]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn lookup() {
        let map = StageMap::new(sample()).unwrap();
        assert_eq!(map.get("staging").unwrap().url, "http://example-staging.com");
        assert!(map.contains("production"));
        assert!(map.get("qa").is_none());
        assert!(matches!(
            map.require("qa"),
            Err(StageError::UnknownStage(name)) if name == "qa"
        ));
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut stages = sample();
        stages.push(Stage::new("staging", "http://other.example.com"));
        assert!(matches!(
            StageMap::new(stages),
            Err(StageError::DuplicateStage(name)) if name == "staging"
        ));
    }

    #[test]
    fn rejects_relative_url() {
        let err = StageMap::new(vec![Stage::new("dev", "/just/a/path")]).unwrap_err();
        assert!(matches!(err, StageError::InvalidUrl { .. }));
    }

    #[test]
    fn rejects_url_without_host() {
        let err = StageMap::new(vec![Stage::new("dev", "mailto:dev@example.com")]).unwrap_err();
        assert!(matches!(err, StageError::MissingHost { .. }));
    }

    #[test]
    fn stage_path_and_label() {
        let stage = Stage::new("staging eu", "https://example.com/blog");
        assert_eq!(stage.path(), "/blog");
        assert_eq!(stage.label(), "Staging Eu");
    }

    #[test]
    fn empty_map() {
        let map = StageMap::default();
        assert!(map.is_empty());
    }
}
