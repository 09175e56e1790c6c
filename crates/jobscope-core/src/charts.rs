//! Renderer payloads.
//!
//! Each payload is the structured data one chart renderer consumes, plus the
//! presentation hints the dashboard uses for it. Display ordering is applied
//! here, immediately before handing data to a renderer.

use schemars::JsonSchema;
use serde::Serialize;

use crate::display::{TreemapEntry, horizontal_bar_order, treemap_shares};
use crate::frequency::CountEntry;
use crate::mapping::ColumnMapping;
use crate::report::DashboardReport;

/// Word-cloud canvas width in pixels.
pub const WORD_CLOUD_WIDTH: u32 = 1200;
/// Word-cloud canvas height in pixels.
pub const WORD_CLOUD_HEIGHT: u32 = 600;

/// Data for a horizontal bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct BarChart {
    /// Chart title.
    pub title: String,
    /// Axis label for the category values.
    pub label_axis: String,
    /// Continuous colour scale name.
    pub color_scale: String,
    /// Bars ascending by count (first entry is drawn at the bottom).
    pub entries: Vec<CountEntry>,
}

/// Data for a single-level treemap.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Treemap {
    /// Chart title.
    pub title: String,
    /// Continuous colour scale name.
    pub color_scale: String,
    /// Leaves descending by count, with their share of the root.
    pub entries: Vec<TreemapEntry>,
}

/// Data for a word-cloud image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct WordCloud {
    /// Section heading shown above the image.
    pub title: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Background colour.
    pub background_color: String,
    /// Colormap name.
    pub colormap: String,
    /// Maximum number of words drawn.
    pub max_words: usize,
    /// Whitespace-joined source text.
    pub corpus: String,
}

impl WordCloud {
    fn new(title: &str, colormap: &str, max_words: usize, corpus: &str) -> Self {
        Self {
            title: title.to_string(),
            width: WORD_CLOUD_WIDTH,
            height: WORD_CLOUD_HEIGHT,
            background_color: "white".to_string(),
            colormap: colormap.to_string(),
            max_words,
            corpus: corpus.to_string(),
        }
    }

    /// Number of whitespace-separated words in the corpus.
    pub fn word_count(&self) -> usize {
        self.corpus.split_whitespace().count()
    }
}

/// The five renderer payloads of one dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct DashboardPayload {
    /// Column bindings the payloads were computed from.
    pub mapping: ColumnMapping,
    /// Number of data rows.
    pub rows: usize,
    /// Top hiring companies (horizontal bar chart).
    pub companies: BarChart,
    /// Top job locations (treemap).
    pub locations: Treemap,
    /// Top skills (horizontal bar chart).
    pub skills: BarChart,
    /// Job-description word cloud.
    pub description_cloud: WordCloud,
    /// Skills word cloud.
    pub skills_cloud: WordCloud,
}

impl DashboardPayload {
    /// Prepare renderer payloads from a report.
    pub fn from_report(report: &DashboardReport) -> Self {
        let limits = report.limits;
        Self {
            mapping: report.mapping.clone(),
            rows: report.rows,
            companies: BarChart {
                title: format!("Top Hiring Companies (Top {})", limits.companies),
                label_axis: "Company".to_string(),
                color_scale: "Tealgrn".to_string(),
                entries: horizontal_bar_order(&report.companies),
            },
            locations: Treemap {
                title: "Top Job Locations (Treemap)".to_string(),
                color_scale: "Purpor".to_string(),
                entries: treemap_shares(&report.locations),
            },
            skills: BarChart {
                title: format!("Top Skills (Top {})", limits.skills),
                label_axis: "Skill".to_string(),
                color_scale: "Sunset".to_string(),
                entries: horizontal_bar_order(&report.skills),
            },
            description_cloud: WordCloud::new(
                "Word Cloud - Job Descriptions",
                "coolwarm",
                200,
                &report.description_corpus,
            ),
            skills_cloud: WordCloud::new(
                "Word Cloud - Skills",
                "viridis",
                150,
                &report.skills_corpus,
            ),
        }
    }
}
