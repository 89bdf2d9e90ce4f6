//! Event, narrative and source records.
//!
//! Field names follow the dataset wire format (`news_outlet_name`,
//! `narrative_title`, `img_url`, ...) through serde renames. Collections and
//! the image reference default to empty so that partially filled entries
//! still load and render an empty state.

use punto_assets::PLACEHOLDER_IMAGE;
use serde::{Deserialize, Serialize};

/// A news outlet contributing coverage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(rename = "news_outlet_name")]
    pub outlet_name: String,
    #[serde(rename = "news_outlet_icon", default)]
    pub outlet_icon: String,
}

impl Source {
    pub fn new(outlet_name: impl Into<String>, outlet_icon: impl Into<String>) -> Self {
        Self {
            outlet_name: outlet_name.into(),
            outlet_icon: outlet_icon.into(),
        }
    }

    pub fn icon_or_placeholder(&self) -> &str {
        non_empty_or_placeholder(&self.outlet_icon)
    }
}

/// One framing of an event, attributed to a subset of its sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    #[serde(rename = "narrative_title")]
    pub title: String,
    #[serde(rename = "narrative_summary", default)]
    pub summary: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl Narrative {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            sources: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = sources;
        self
    }

    /// Up to `n` sources, for the stacked icon preview on a narrative pill.
    pub fn leading_sources(&self, n: usize) -> &[Source] {
        &self.sources[..self.sources.len().min(n)]
    }
}

/// A news story aggregated from multiple outlets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Stable identifier; reconciliation key for feed items. Presence is
    /// checked by the store rather than by serde so the error can name the
    /// offending entry.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(rename = "img_url", default)]
    pub image_url: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub narratives: Vec<Narrative>,
}

impl Event {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: summary.into(),
            image_url: String::new(),
            sources: Vec::new(),
            narratives: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = sources;
        self
    }

    #[must_use]
    pub fn with_narratives(mut self, narratives: Vec<Narrative>) -> Self {
        self.narratives = narratives;
        self
    }

    pub fn image_or_placeholder(&self) -> &str {
        non_empty_or_placeholder(&self.image_url)
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn narrative_count(&self) -> usize {
        self.narratives.len()
    }

    pub fn narrative(&self, index: usize) -> Option<&Narrative> {
        self.narratives.get(index)
    }

    /// Up to `n` sources, for the stacked outlet icons on a feed card.
    pub fn leading_sources(&self, n: usize) -> &[Source] {
        &self.sources[..self.sources.len().min(n)]
    }

    /// "N fuentes · M narrativas" caption under the detail title.
    pub fn coverage_caption(&self) -> String {
        format!(
            "{} fuentes · {} narrativas",
            self.source_count(),
            self.narrative_count()
        )
    }
}

fn non_empty_or_placeholder(reference: &str) -> &str {
    if reference.trim().is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        reference
    }
}
