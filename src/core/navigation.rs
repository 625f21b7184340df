//! Page navigation
//!
//! The dashboard has a closed set of pages. `Navigator` holds the active one
//! for a single session and `render` maps a page to its content block.

use crate::content::{ContentBlock, ContentLibrary};
use serde::{Deserialize, Serialize};

/// Every page the dashboard can show
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    Home,
    #[default]
    Introduction,
    DataAnalysis,
}

impl PageId {
    /// Sidebar order
    pub const ALL: [PageId; 3] = [PageId::Home, PageId::Introduction, PageId::DataAnalysis];

    pub fn label(&self) -> &'static str {
        match self {
            PageId::Home => "🏠 Home",
            PageId::Introduction => "📖 Introduction",
            PageId::DataAnalysis => "📊 Data Analysis",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Introduction => "introduction",
            PageId::DataAnalysis => "data-analysis",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            PageId::Home => 0,
            PageId::Introduction => 1,
            PageId::DataAnalysis => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<PageId> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Outcome of a `select` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed { from: PageId, to: PageId },
    Unchanged(PageId),
}

impl Transition {
    pub fn changed(&self) -> bool {
        matches!(self, Transition::Changed { .. })
    }
}

/// Active page of one session.
///
/// Every `select` requests a render pass, even when the page stays the
/// same: each interaction re-renders the whole page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: PageId,
    render_requested: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(PageId::default())
    }
}

impl Navigator {
    pub fn new(initial: PageId) -> Self {
        Self {
            current: initial,
            // First frame always draws
            render_requested: true,
        }
    }

    pub fn current(&self) -> PageId {
        self.current
    }

    pub fn select(&mut self, page: PageId) -> Transition {
        self.render_requested = true;
        if page == self.current {
            return Transition::Unchanged(page);
        }
        let from = self.current;
        self.current = page;
        Transition::Changed { from, to: page }
    }

    /// Request a redraw without changing page
    pub fn request_render(&mut self) {
        self.render_requested = true;
    }

    /// Consume the pending render request, returning whether one existed
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.render_requested)
    }
}

/// Map a page to its content block. Pure and total over `PageId`.
pub fn render(page: PageId, library: &ContentLibrary) -> ContentBlock<'_> {
    match page {
        PageId::Home => ContentBlock::Home(&library.home),
        PageId::Introduction => ContentBlock::Introduction(&library.introduction),
        PageId::DataAnalysis => ContentBlock::DataAnalysis(&library.data_analysis),
    }
}
