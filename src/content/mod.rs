//! Content layer - the literal text and tables behind every page
//!
//! Content ships embedded in the binary (`defaults/content.toml`) and can be
//! replaced by a user file. It is parsed and validated once at startup, then
//! shared read-only. NO imports from frontend/ or rendering code.

pub mod model;
pub mod validator;

pub use model::*;
pub use validator::validate_content;

use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_CONTENT: &str = include_str!("../../defaults/content.toml");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse content: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("content failed validation: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// A page's content, borrowed from the library.
///
/// One variant per page; the navigation router maps every `PageId` to
/// exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentBlock<'a> {
    Home(&'a HomeBlock),
    Introduction(&'a IntroductionBlock),
    DataAnalysis(&'a DataAnalysisBlock),
}

impl ContentBlock<'_> {
    pub fn heading(&self) -> &str {
        match self {
            ContentBlock::Home(b) => &b.heading,
            ContentBlock::Introduction(b) => &b.heading,
            ContentBlock::DataAnalysis(b) => &b.heading,
        }
    }

    /// True when the block would render nothing
    pub fn is_empty(&self) -> bool {
        let no_body = match self {
            ContentBlock::Home(b) => b.actions.is_empty(),
            ContentBlock::Introduction(b) => {
                b.results.models.is_empty() && b.dataset.metrics.is_empty()
            }
            ContentBlock::DataAnalysis(b) => b.planned.is_empty() && b.notice.trim().is_empty(),
        };
        self.heading().trim().is_empty() && no_body
    }
}

impl ContentLibrary {
    /// Parse content shipped inside the binary
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_toml_str(DEFAULT_CONTENT)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ContentError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ContentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load content (override file or embedded) and validate it.
    ///
    /// Errors reject the content; warnings are logged and the content is
    /// returned untouched.
    pub fn load(path: Option<&Path>) -> Result<Self, ContentError> {
        let library = match path {
            Some(path) => {
                tracing::info!("Loading content from {:?}", path);
                Self::load_from_file(path)?
            }
            None => Self::embedded()?,
        };

        let validation = validate_content(&library);
        if validation.has_errors() {
            for error in validation.errors() {
                tracing::error!("Content error: {}", error.message());
            }
            return Err(ContentError::Invalid(
                validation.errors().iter().map(|e| e.message()).collect(),
            ));
        }
        for warning in validation.warnings() {
            tracing::warn!("Content warning: {}", warning.message());
        }

        Ok(library)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::PageId;

    #[test]
    fn test_embedded_content_parses() {
        let library = ContentLibrary::embedded().expect("Failed to parse embedded content");
        assert_eq!(library.home.actions.len(), 3);
        assert_eq!(library.introduction.results.models.len(), 5);
        assert_eq!(library.introduction.results.confusion.len(), 3);
        assert_eq!(library.data_analysis.planned.len(), 6);
    }

    #[test]
    fn test_model_comparison_fixture() {
        let library = ContentLibrary::embedded().unwrap();
        let xgb = library
            .introduction
            .results
            .models
            .iter()
            .find(|m| m.model == "XGBoost")
            .expect("XGBoost row missing");
        assert_eq!(xgb.accuracy, "61.3%");
        assert_eq!(xgb.roc_auc, "0.658");
        assert_eq!(xgb.f1, "0.625");
        assert_eq!(xgb.training_time, "8min");
        assert_eq!(xgb.status, ModelStatus::Complete);

        let names: Vec<_> = library
            .introduction
            .results
            .models
            .iter()
            .map(|m| m.model.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Logistic Regression (Baseline)",
                "Random Forest",
                "XGBoost",
                "LSTM Neural Network",
                "Ensemble (All Models)"
            ]
        );
    }

    #[test]
    fn test_confusion_grid_fixtures() {
        let library = ContentLibrary::embedded().unwrap();
        let grids: Vec<_> = library
            .introduction
            .results
            .confusion
            .iter()
            .map(|g| (g.split.as_str(), g.cells))
            .collect();
        assert_eq!(
            grids,
            vec![
                ("Train", [[32450, 5120], [4890, 33783]]),
                ("Validation", [[28340, 7632], [6823, 27198]]),
                ("Test", [[27850, 7932], [7123, 26597]]),
            ]
        );
    }

    #[test]
    fn test_dataset_fixtures() {
        let library = ContentLibrary::embedded().unwrap();
        let dataset = &library.introduction.dataset;
        assert_eq!(dataset.stated_total(), Some(310_896));

        let values: Vec<_> = dataset.metrics.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, vec!["310,896", "211", "47+", "4+ years"]);

        let counts: Vec<_> = dataset.features.categories.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![8, 14, 15, 6, 4]);

        let samples: Vec<_> = dataset.splits.splits.iter().map(|s| s.samples).collect();
        assert_eq!(samples, vec![76_243, 69_993, 67_502]);
    }

    #[test]
    fn test_home_actions() {
        let library = ContentLibrary::embedded().unwrap();
        let enabled: Vec<_> = library.home.actions.iter().filter(|a| a.enabled).collect();
        assert_eq!(enabled.len(), 1);
        assert_eq!(enabled[0].target, Some(PageId::Introduction));
        assert!(library.home.actions[1..]
            .iter()
            .all(|a| !a.enabled && a.caption.as_deref() == Some("Coming soon!")));
    }

    #[test]
    fn test_load_rejects_invalid_override() {
        let mut library = ContentLibrary::embedded().unwrap();
        library.introduction.dataset.splits.class_balance.up_pct = 70.0;
        let text = toml::to_string(&library).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.toml");
        std::fs::write(&path, text).unwrap();

        let err = ContentLibrary::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ContentError::Invalid(ref errors) if errors.len() == 1));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ContentLibrary::load(Some(Path::new("/nonexistent/content.toml"))).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }

    #[test]
    fn test_override_round_trip_keeps_content() {
        let library = ContentLibrary::embedded().unwrap();
        let text = toml::to_string(&library).unwrap();
        let reparsed = ContentLibrary::from_toml_str(&text).unwrap();
        assert_eq!(reparsed, library);
    }
}
