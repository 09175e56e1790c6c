//! Terminal preview of the dashboard.
//!
//! A stand-in renderer for the five payloads: horizontal bars drawn with
//! block characters, the treemap as a share table, and word clouds summarised
//! by their most frequent words.

use owo_colors::OwoColorize;

use jobscope_core::charts::{BarChart, Treemap, WordCloud};
use jobscope_core::{DashboardPayload, FrequencyTable, Role};

/// Widest bar, in terminal cells.
const BAR_WIDTH: usize = 40;

/// Words listed per word-cloud summary.
const CLOUD_PREVIEW_WORDS: usize = 10;

/// Print all five payloads.
pub fn print_dashboard(source: &str, payload: &DashboardPayload) {
    println!("{} ({} rows)", source.bold(), payload.rows);
    let bindings = Role::ALL
        .iter()
        .map(|role| format!("{role}={}", payload.mapping.name(*role)))
        .collect::<Vec<_>>()
        .join("  ");
    println!("  {}", bindings.dimmed());

    print_bar_chart(&payload.companies);
    print_treemap(&payload.locations);
    print_bar_chart(&payload.skills);
    print_word_cloud(&payload.description_cloud);
    print_word_cloud(&payload.skills_cloud);
}

fn print_bar_chart(chart: &BarChart) {
    println!("\n{}", chart.title.cyan().bold());
    for line in bar_lines(chart) {
        println!("  {line}");
    }
}

/// Plain-text bar rows, largest first.
///
/// Payload entries are ascending (bottom-to-top layout), so the terminal,
/// which draws top-down, walks them in reverse.
fn bar_lines(chart: &BarChart) -> Vec<String> {
    if chart.entries.is_empty() {
        return vec!["(no data)".to_string()];
    }
    let label_width = chart
        .entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0);
    let max = chart.entries.iter().map(|e| e.count).max().unwrap_or(1).max(1);

    chart
        .entries
        .iter()
        .rev()
        .map(|e| {
            let len = (e.count * BAR_WIDTH).div_ceil(max);
            format!(
                "{:<label_width$}  {} {}",
                e.label,
                "█".repeat(len),
                e.count
            )
        })
        .collect()
}

fn print_treemap(treemap: &Treemap) {
    println!("\n{}", treemap.title.cyan().bold());
    if treemap.entries.is_empty() {
        println!("  (no data)");
        return;
    }
    let label_width = treemap
        .entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0);
    for e in &treemap.entries {
        println!(
            "  {:<label_width$}  {:>6} jobs  {}",
            e.label,
            e.count,
            format!("{:>5.1}%", e.percent_parent * 100.0).dimmed()
        );
    }
}

fn print_word_cloud(cloud: &WordCloud) {
    println!("\n{}", cloud.title.cyan().bold());
    let words = preview_words(&cloud.corpus, CLOUD_PREVIEW_WORDS);
    if words.is_empty() {
        println!("  (no text)");
        return;
    }
    println!(
        "  {} words, showing the top {} of up to {}",
        cloud.word_count(),
        words.len(),
        cloud.max_words
    );
    println!("  {}", words.join("  "));
}

/// Most frequent words of a corpus, as `word (count)`.
fn preview_words(corpus: &str, n: usize) -> Vec<String> {
    let words = corpus
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|w| !w.is_empty());
    FrequencyTable::from_values(words)
        .top(n)
        .into_entries()
        .into_iter()
        .map(|e| format!("{} ({})", e.label, e.count))
        .collect()
}
