//! Content validator
//!
//! Startup sanity checks over the literal content. Structural problems are
//! errors and stop the content from loading. Figures that disagree with each
//! other are only warnings: they are documentation inconsistencies, flagged
//! for the author and shown verbatim.

use super::model::{ContentLibrary, DatasetSection, HomeBlock, ResultsSection};
use crate::core::navigation::PageId;

/// Number of call-to-action cards the Home page lays out
pub const HOME_ACTION_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    EmptyText {
        field: String,
    },
    HomeActionCount {
        found: usize,
    },
    EnabledActionWithoutTarget {
        title: String,
    },
    NonFiniteValue {
        field: String,
    },
    ImpossiblePrice {
        date: String,
        reason: String,
    },
    SampleOutOfOrder {
        date: String,
    },
    SplitRange {
        split: String,
        reason: String,
    },
    SplitShares {
        total: u32,
    },
    FeatureCountMismatch {
        declared: u32,
        summed: u32,
    },
    ImportanceOutOfRange {
        feature: String,
        value: f64,
    },
    ClassBalance {
        up: f64,
        down: f64,
    },
    SplitTotalMismatch {
        stated: u64,
        summed: u64,
    },
    GridTotalMismatch {
        grid: String,
        grid_total: u64,
        split_samples: u64,
    },
    GridWithoutSplit {
        grid: String,
    },
    ImportanceNotRanked {
        feature: String,
    },
}

impl ValidationIssue {
    pub fn severity(&self) -> ValidationSeverity {
        match self {
            ValidationIssue::SplitTotalMismatch { .. }
            | ValidationIssue::GridTotalMismatch { .. }
            | ValidationIssue::GridWithoutSplit { .. }
            | ValidationIssue::ImportanceNotRanked { .. } => ValidationSeverity::Warning,
            _ => ValidationSeverity::Error,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ValidationIssue::EmptyText { field } => format!("'{}' must not be empty", field),
            ValidationIssue::HomeActionCount { found } => format!(
                "Home page needs {} call-to-action entries, found {}",
                HOME_ACTION_COUNT, found
            ),
            ValidationIssue::EnabledActionWithoutTarget { title } => {
                format!("Call-to-action '{}' is enabled but has no target page", title)
            }
            ValidationIssue::NonFiniteValue { field } => {
                format!("'{}' is not a finite number", field)
            }
            ValidationIssue::ImpossiblePrice { date, reason } => {
                format!("Sample row {}: {}", date, reason)
            }
            ValidationIssue::SampleOutOfOrder { date } => {
                format!("Sample row {} is not in date order", date)
            }
            ValidationIssue::SplitRange { split, reason } => {
                format!("Split '{}': {}", split, reason)
            }
            ValidationIssue::SplitShares { total } => {
                format!("Split shares add up to {}%, expected 100%", total)
            }
            ValidationIssue::FeatureCountMismatch { declared, summed } => format!(
                "Feature categories add up to {} features but {} are declared",
                summed, declared
            ),
            ValidationIssue::ImportanceOutOfRange { feature, value } => {
                format!("Importance of '{}' is {}, expected 0..=1", feature, value)
            }
            ValidationIssue::ClassBalance { up, down } => format!(
                "Class balance up {}% + down {}% does not make 100%",
                up, down
            ),
            ValidationIssue::SplitTotalMismatch { stated, summed } => format!(
                "Split samples add up to {} but total observations are stated as {}",
                summed, stated
            ),
            ValidationIssue::GridTotalMismatch {
                grid,
                grid_total,
                split_samples,
            } => format!(
                "Confusion grid '{}' counts {} observations but its split has {} samples",
                grid, grid_total, split_samples
            ),
            ValidationIssue::GridWithoutSplit { grid } => {
                format!("Confusion grid '{}' names a split that does not exist", grid)
            }
            ValidationIssue::ImportanceNotRanked { feature } => {
                format!("Feature importance ranking is out of order at '{}'", feature)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity(), ValidationSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity(), ValidationSeverity::Warning))
    }

    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| matches!(i.severity(), ValidationSeverity::Error))
            .collect()
    }

    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| matches!(i.severity(), ValidationSeverity::Warning))
            .collect()
    }
}

/// Validate the whole content library
pub fn validate_content(library: &ContentLibrary) -> ValidationResult {
    let mut issues = Vec::new();

    check_text(&mut issues, "site.title", &library.site.title);
    check_text(&mut issues, "home.heading", &library.home.heading);
    check_text(&mut issues, "introduction.heading", &library.introduction.heading);
    check_text(&mut issues, "data_analysis.heading", &library.data_analysis.heading);
    check_text(&mut issues, "data_analysis.notice", &library.data_analysis.notice);
    if library.data_analysis.planned.is_empty() {
        issues.push(ValidationIssue::EmptyText {
            field: "data_analysis.planned".to_string(),
        });
    }

    check_home(&mut issues, &library.home);
    check_dataset(&mut issues, &library.introduction.dataset);
    check_results(
        &mut issues,
        &library.introduction.results,
        &library.introduction.dataset,
    );

    ValidationResult { issues }
}

fn check_text(issues: &mut Vec<ValidationIssue>, field: &str, value: &str) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::EmptyText {
            field: field.to_string(),
        });
    }
}

fn check_home(issues: &mut Vec<ValidationIssue>, home: &HomeBlock) {
    if home.actions.len() != HOME_ACTION_COUNT {
        issues.push(ValidationIssue::HomeActionCount {
            found: home.actions.len(),
        });
    }

    for action in &home.actions {
        check_text(issues, "home.actions.button", &action.button);
        if action.enabled && action.target.is_none() {
            issues.push(ValidationIssue::EnabledActionWithoutTarget {
                title: action.title.clone(),
            });
        }
    }
}

fn check_dataset(issues: &mut Vec<ValidationIssue>, dataset: &DatasetSection) {
    // Raw sample preview
    let mut previous = None;
    for row in &dataset.sources.sample {
        let date = row.date.to_string();
        let prices = [row.open, row.high, row.low, row.close];
        if prices.iter().any(|p| !p.is_finite()) {
            issues.push(ValidationIssue::NonFiniteValue {
                field: format!("sample row {} price", date),
            });
        } else {
            if prices.iter().any(|p| *p < 0.0) {
                issues.push(ValidationIssue::ImpossiblePrice {
                    date: date.clone(),
                    reason: "negative price".to_string(),
                });
            }
            if row.high < row.low {
                issues.push(ValidationIssue::ImpossiblePrice {
                    date: date.clone(),
                    reason: format!("high {} below low {}", row.high, row.low),
                });
            } else if row.low > row.open.min(row.close) || row.high < row.open.max(row.close) {
                issues.push(ValidationIssue::ImpossiblePrice {
                    date: date.clone(),
                    reason: "open/close outside the high-low range".to_string(),
                });
            }
        }
        if previous.is_some_and(|p| p > row.date) {
            issues.push(ValidationIssue::SampleOutOfOrder { date });
        }
        previous = Some(row.date);
    }

    // Feature engineering
    let features = &dataset.features;
    let summed: u32 = features.categories.iter().map(|c| c.count).sum();
    if summed != features.declared_total {
        issues.push(ValidationIssue::FeatureCountMismatch {
            declared: features.declared_total,
            summed,
        });
    }
    for entry in &features.importance {
        if !entry.importance.is_finite() {
            issues.push(ValidationIssue::NonFiniteValue {
                field: format!("importance of '{}'", entry.feature),
            });
        } else if !(0.0..=1.0).contains(&entry.importance) {
            issues.push(ValidationIssue::ImportanceOutOfRange {
                feature: entry.feature.clone(),
                value: entry.importance,
            });
        }
    }
    for pair in features.importance.windows(2) {
        if pair[1].importance > pair[0].importance {
            issues.push(ValidationIssue::ImportanceNotRanked {
                feature: pair[1].feature.clone(),
            });
        }
    }

    // Splits must tile the timeline
    let splits = &dataset.splits.splits;
    for split in splits {
        if split.end <= split.start {
            issues.push(ValidationIssue::SplitRange {
                split: split.name.clone(),
                reason: format!("ends {} before it starts {}", split.end, split.start),
            });
        }
    }
    for pair in splits.windows(2) {
        if pair[0].end != pair[1].start {
            issues.push(ValidationIssue::SplitRange {
                split: pair[1].name.clone(),
                reason: format!(
                    "starts {} but '{}' ends {}",
                    pair[1].start, pair[0].name, pair[0].end
                ),
            });
        }
    }
    let shares: u32 = splits.iter().map(|s| s.share_pct).sum();
    if !splits.is_empty() && shares != 100 {
        issues.push(ValidationIssue::SplitShares { total: shares });
    }

    let balance = dataset.splits.class_balance;
    for (field, value) in [
        ("class_balance.up_pct", balance.up_pct),
        ("class_balance.down_pct", balance.down_pct),
        ("class_balance.tail_pct", balance.tail_pct),
    ] {
        if !value.is_finite() {
            issues.push(ValidationIssue::NonFiniteValue {
                field: field.to_string(),
            });
        }
    }
    if (balance.up_pct + balance.down_pct - 100.0).abs() > 0.05 {
        issues.push(ValidationIssue::ClassBalance {
            up: balance.up_pct,
            down: balance.down_pct,
        });
    }

    if let Some(stated) = dataset.stated_total() {
        let summed: u64 = splits.iter().map(|s| s.samples).sum();
        if !splits.is_empty() && summed != stated {
            issues.push(ValidationIssue::SplitTotalMismatch { stated, summed });
        }
    }
}

fn check_results(
    issues: &mut Vec<ValidationIssue>,
    results: &ResultsSection,
    dataset: &DatasetSection,
) {
    if results.models.is_empty() {
        issues.push(ValidationIssue::EmptyText {
            field: "introduction.results.models".to_string(),
        });
    }

    for grid in &results.confusion {
        match dataset.splits.splits.iter().find(|s| s.name == grid.split) {
            Some(split) if split.samples != grid.total() => {
                issues.push(ValidationIssue::GridTotalMismatch {
                    grid: grid.title.clone(),
                    grid_total: grid.total(),
                    split_samples: split.samples,
                });
            }
            Some(_) => {}
            None => issues.push(ValidationIssue::GridWithoutSplit {
                grid: grid.title.clone(),
            }),
        }
    }
}

/// Pages every call-to-action can reach, for diagnostics
pub fn reachable_targets(home: &HomeBlock) -> Vec<PageId> {
    home.actions.iter().filter_map(|a| a.live_target()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentLibrary;

    fn library() -> ContentLibrary {
        ContentLibrary::embedded().expect("embedded content parses")
    }

    #[test]
    fn test_embedded_content_has_no_errors() {
        let result = validate_content(&library());
        assert!(result.is_valid(), "unexpected errors: {:?}", result.errors());
    }

    #[test]
    fn test_split_total_mismatch_is_flagged_as_warning() {
        let result = validate_content(&library());
        assert!(result.warnings().iter().any(|w| matches!(
            w,
            ValidationIssue::SplitTotalMismatch {
                stated: 310_896,
                summed: 213_738
            }
        )));
    }

    #[test]
    fn test_test_grid_mismatch_is_flagged_as_warning() {
        let result = validate_content(&library());
        let grid_warnings: Vec<_> = result
            .warnings()
            .into_iter()
            .filter(|w| matches!(w, ValidationIssue::GridTotalMismatch { .. }))
            .collect();

        // Train and validation grids match their splits; only the test grid is off
        assert_eq!(grid_warnings.len(), 1);
        assert_eq!(
            grid_warnings[0],
            &ValidationIssue::GridTotalMismatch {
                grid: "Test Set".to_string(),
                grid_total: 69_502,
                split_samples: 67_502,
            }
        );
    }

    #[test]
    fn test_impossible_price_is_an_error() {
        let mut lib = library();
        lib.introduction.dataset.sources.sample[0].low = 50_000.0;
        let result = validate_content(&lib);
        assert!(result.has_errors());
        assert!(result
            .errors()
            .iter()
            .any(|e| matches!(e, ValidationIssue::ImpossiblePrice { .. })));
    }

    #[test]
    fn test_sample_order_is_checked() {
        let mut lib = library();
        lib.introduction.dataset.sources.sample.swap(0, 2);
        let result = validate_content(&lib);
        assert!(result
            .errors()
            .iter()
            .any(|e| matches!(e, ValidationIssue::SampleOutOfOrder { .. })));
    }

    #[test]
    fn test_feature_count_mismatch() {
        let mut lib = library();
        lib.introduction.dataset.features.categories[0].count = 9;
        let result = validate_content(&lib);
        assert!(result.errors().contains(&&ValidationIssue::FeatureCountMismatch {
            declared: 47,
            summed: 48
        }));
    }

    #[test]
    fn test_split_gap_is_an_error() {
        let mut lib = library();
        lib.introduction.dataset.splits.splits[1].start =
            chrono::NaiveDate::from_ymd_opt(2022, 10, 1).unwrap();
        let result = validate_content(&lib);
        assert!(result
            .errors()
            .iter()
            .any(|e| matches!(e, ValidationIssue::SplitRange { split, .. } if split == "Validation")));
    }

    #[test]
    fn test_enabled_action_needs_target() {
        let mut lib = library();
        lib.home.actions[2].enabled = true;
        let result = validate_content(&lib);
        assert!(result.errors().contains(&&ValidationIssue::EnabledActionWithoutTarget {
            title: "🤖 Live Predictions".to_string()
        }));
    }

    fn issues_matching(
        lib: &ContentLibrary,
        pred: impl Fn(&ValidationIssue) -> bool,
    ) -> Vec<ValidationIssue> {
        validate_content(lib)
            .issues
            .into_iter()
            .filter(|issue| pred(issue))
            .collect()
    }

    #[test]
    fn test_split_shares_must_make_100() {
        let mut lib = library();
        lib.introduction.dataset.splits.splits[0].share_pct = 40;
        let found = issues_matching(&lib, |i| matches!(i, ValidationIssue::SplitShares { .. }));
        assert_eq!(found, vec![ValidationIssue::SplitShares { total: 90 }]);
        assert_eq!(found[0].severity(), ValidationSeverity::Error);
    }

    #[test]
    fn test_importance_above_one_is_an_error() {
        let mut lib = library();
        lib.introduction.dataset.features.importance[0].importance = 1.5;
        let found = issues_matching(&lib, |i| {
            matches!(i, ValidationIssue::ImportanceOutOfRange { value, .. } if *value == 1.5)
        });
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].severity(), ValidationSeverity::Error);
    }

    #[test]
    fn test_home_needs_three_actions() {
        let mut lib = library();
        lib.home.actions.pop();
        let found = issues_matching(&lib, |i| matches!(i, ValidationIssue::HomeActionCount { .. }));
        assert_eq!(found, vec![ValidationIssue::HomeActionCount { found: 2 }]);
        assert_eq!(found[0].severity(), ValidationSeverity::Error);
    }

    #[test]
    fn test_blank_title_is_an_error() {
        let mut lib = library();
        lib.site.title = "   ".to_string();
        let found = issues_matching(&lib, |i| matches!(i, ValidationIssue::EmptyText { .. }));
        assert_eq!(
            found,
            vec![ValidationIssue::EmptyText {
                field: "site.title".to_string()
            }]
        );
        assert_eq!(found[0].severity(), ValidationSeverity::Error);
    }

    #[test]
    fn test_negative_price_is_an_error() {
        let mut lib = library();
        lib.introduction.dataset.sources.sample[0].low = -1.0;
        let found = issues_matching(&lib, |i| matches!(i, ValidationIssue::ImpossiblePrice { .. }));
        assert_eq!(found.len(), 1);
        assert!(matches!(
            &found[0],
            ValidationIssue::ImpossiblePrice { reason, .. } if reason == "negative price"
        ));
        assert_eq!(found[0].severity(), ValidationSeverity::Error);
    }

    #[test]
    fn test_empty_split_range_is_an_error() {
        let mut lib = library();
        let split = &mut lib.introduction.dataset.splits.splits[0];
        split.end = split.start;
        let found = issues_matching(&lib, |i| {
            matches!(i, ValidationIssue::SplitRange { split, reason }
                if split == "Train" && reason.contains("before it starts"))
        });
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].severity(), ValidationSeverity::Error);
    }

    #[test]
    fn test_unranked_importance_is_a_warning() {
        let mut lib = library();
        lib.introduction.dataset.features.importance.swap(0, 1);
        let result = validate_content(&lib);
        assert!(result.is_valid());
        let found: Vec<_> = result
            .issues
            .iter()
            .filter(|i| matches!(i, ValidationIssue::ImportanceNotRanked { .. }))
            .collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].severity(), ValidationSeverity::Warning);
    }

    #[test]
    fn test_grid_naming_unknown_split_is_a_warning() {
        let mut lib = library();
        lib.introduction.results.confusion[0].split = "Holdout".to_string();
        let result = validate_content(&lib);
        assert!(result.is_valid());
        let found: Vec<_> = result
            .issues
            .iter()
            .filter(|i| matches!(i, ValidationIssue::GridWithoutSplit { .. }))
            .collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].severity(), ValidationSeverity::Warning);
    }

    #[test]
    fn test_nan_figures_are_rejected() {
        let mut lib = library();
        lib.introduction.dataset.splits.class_balance.up_pct = f64::NAN;
        lib.introduction.dataset.sources.sample[0].open = f64::NAN;
        lib.introduction.dataset.features.importance[2].importance = f64::INFINITY;

        let result = validate_content(&lib);
        assert!(!result.is_valid());
        let non_finite: Vec<_> = result
            .errors()
            .into_iter()
            .filter(|e| matches!(e, ValidationIssue::NonFiniteValue { .. }))
            .collect();
        assert_eq!(non_finite.len(), 3);
        assert!(non_finite.contains(&&ValidationIssue::NonFiniteValue {
            field: "class_balance.up_pct".to_string()
        }));
        // NaN must not slip through as a plausible price or balance
        assert!(!result
            .issues
            .iter()
            .any(|i| matches!(i, ValidationIssue::ImpossiblePrice { .. } | ValidationIssue::ClassBalance { .. })));
    }

    #[test]
    fn test_only_introduction_is_reachable_from_home() {
        assert_eq!(reachable_targets(&library().home), vec![PageId::Introduction]);
    }
}
