//! Content records for every dashboard page.
//!
//! These are plain data: deserialized once from TOML, validated, then shared
//! read-only by every session. Nothing in here computes a displayed figure.

use crate::core::navigation::PageId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Row labels of every confusion grid (actual class).
pub const CONFUSION_ROW_LABELS: [&str; 2] = ["True: Down", "True: Up"];
/// Column labels of every confusion grid (predicted class).
pub const CONFUSION_COL_LABELS: [&str; 2] = ["Pred: Down", "Pred: Up"];

/// Complete content library: one record per page plus site chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentLibrary {
    pub site: SiteInfo,
    pub home: HomeBlock,
    pub introduction: IntroductionBlock,
    pub data_analysis: DataAnalysisBlock,
}

/// Sidebar and footer text shared by all pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub title: String,
    pub sidebar_title: String,
    pub selector_prompt: String,
    pub sidebar_note: String,
    #[serde(default)]
    pub footer: Vec<String>,
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeBlock {
    pub heading: String,
    pub subheading: String,
    pub actions: Vec<CallToAction>,
}

/// A card on the Home page with a single button.
///
/// Disabled entries are placeholders for pages that do not exist yet; they
/// render greyed out and activating them never changes the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToAction {
    pub title: String,
    pub blurb: String,
    pub button: String,
    pub tone: Tone,
    #[serde(default)]
    pub target: Option<PageId>,
    pub enabled: bool,
    #[serde(default)]
    pub caption: Option<String>,
}

impl CallToAction {
    /// Page this entry navigates to, if it is live
    pub fn live_target(&self) -> Option<PageId> {
        if self.enabled {
            self.target
        } else {
            None
        }
    }
}

/// Colour family of a call-out box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Info,
    Success,
    Warning,
}

// ---------------------------------------------------------------------------
// Introduction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntroductionBlock {
    pub heading: String,
    pub subheading: String,
    pub purpose: PurposeSection,
    pub dataset: DatasetSection,
    pub results: ResultsSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurposeSection {
    pub title: String,
    pub narrative: String,
    pub key_stats: String,
    pub image: ImageRef,
}

/// Externally hosted image. The terminal never fetches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    pub caption: String,
}

/// Whether an image reference can be shown as a placeholder at all
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetStatus {
    Available,
    Broken(String),
}

impl ImageRef {
    pub fn status(&self) -> AssetStatus {
        let url = self.url.trim();
        if url.is_empty() {
            return AssetStatus::Broken("no image URL".to_string());
        }
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));
        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => AssetStatus::Available,
            _ => AssetStatus::Broken(format!("unsupported image URL: {}", url)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub delta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSection {
    pub title: String,
    pub metrics: Vec<MetricCard>,
    pub sources: SourcesTab,
    pub features: FeaturesTab,
    pub splits: SplitsTab,
}

impl DatasetSection {
    /// Labels of the three dataset tabs, in display order
    pub fn tab_labels(&self) -> [&str; 3] {
        [
            self.sources.label.as_str(),
            self.features.label.as_str(),
            self.splits.label.as_str(),
        ]
    }

    /// Stated total observation count, parsed from the "Total Observations"
    /// metric card ("310,896" -> 310896).
    pub fn stated_total(&self) -> Option<u64> {
        self.metrics
            .iter()
            .find(|m| m.label == "Total Observations")
            .and_then(|m| m.value.replace(',', "").parse().ok())
    }
}

pub const DATASET_TAB_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcesTab {
    pub label: String,
    pub narrative: String,
    pub sample_title: String,
    pub sample: Vec<OhlcvRow>,
}

/// One daily price record of the raw-data preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcvRow {
    pub date: NaiveDate,
    pub coin: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl OhlcvRow {
    pub const COLUMNS: [&'static str; 7] = ["Date", "Coin", "Open", "High", "Low", "Close", "Volume"];

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.date.format("%Y-%m-%d").to_string(),
            self.coin.clone(),
            format!("{:.2}", self.open),
            format!("{:.2}", self.high),
            format!("{:.2}", self.low),
            format!("{:.2}", self.close),
            self.volume.to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturesTab {
    pub label: String,
    pub narrative: String,
    pub declared_total: u32,
    pub categories: Vec<FeatureCategory>,
    pub importance_title: String,
    pub importance: Vec<FeatureImportance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCategory {
    pub name: String,
    pub count: u32,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FeatureImportance {
    pub const COLUMNS: [&'static str; 3] = ["Feature", "Importance", "Type"];

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.feature.clone(),
            format!("{:.3}", self.importance),
            self.kind.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitsTab {
    pub label: String,
    pub narrative: String,
    pub splits: Vec<DataSplit>,
    pub class_balance: ClassBalance,
    pub rationale: String,
    pub closing: String,
}

/// A contiguous, time-ordered slice of the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSplit {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub samples: u64,
    pub share_pct: u32,
    pub purpose: String,
}

impl DataSplit {
    pub const COLUMNS: [&'static str; 4] = ["Dataset", "Date Range", "Samples", "Purpose"];

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            format!("{} → {}", self.start.format("%Y-%m"), self.end.format("%Y-%m")),
            group_thousands(self.samples),
            self.purpose.clone(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassBalance {
    pub up_pct: f64,
    pub down_pct: f64,
    pub tail_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsSection {
    pub title: String,
    pub table_title: String,
    pub models: Vec<ModelResult>,
    pub findings: String,
    pub insights: String,
    pub confusion_title: String,
    pub confusion: Vec<ConfusionGrid>,
    pub closing: String,
}

/// One row of the model comparison table. Metrics are display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResult {
    pub model: String,
    pub accuracy: String,
    pub roc_auc: String,
    pub f1: String,
    pub training_time: String,
    pub status: ModelStatus,
}

impl ModelResult {
    pub const COLUMNS: [&'static str; 6] = [
        "Model",
        "Test Accuracy",
        "ROC-AUC",
        "F1-Score",
        "Training Time",
        "Status",
    ];

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.model.clone(),
            self.accuracy.clone(),
            self.roc_auc.clone(),
            self.f1.clone(),
            self.training_time.clone(),
            self.status.label().to_string(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelStatus {
    Complete,
    InProgress,
    Pending,
}

impl ModelStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ModelStatus::Complete => "✓ Complete",
            ModelStatus::InProgress => "🔄 In Progress",
            ModelStatus::Pending => "⏳ Pending",
        }
    }
}

/// 2x2 grid of prediction counts; rows are actual, columns predicted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfusionGrid {
    /// Name of the data split this grid was reported for
    pub split: String,
    pub title: String,
    pub cells: [[u64; 2]; 2],
}

impl ConfusionGrid {
    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().sum()
    }
}

// ---------------------------------------------------------------------------
// Data Analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataAnalysisBlock {
    pub heading: String,
    pub notice: String,
    pub planned_title: String,
    pub planned: Vec<String>,
}

/// Format an integer with comma thousands separators
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
