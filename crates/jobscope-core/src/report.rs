//! Report orchestration.
//!
//! [`generate`] runs every projection over one record set in a fixed order:
//!
//! 1. company frequencies, top N
//! 2. location frequencies, top N
//! 3. skills tokenized into a multiset, frequencies, top N
//! 4. description corpus
//! 5. skills corpus (from the multiset of step 3)
//!
//! The projections are independent of each other and are always computed
//! together; there is no partial report.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::corpus::{build_cell_corpus, build_corpus};
use crate::error::MappingResult;
use crate::frequency::{FrequencyTable, Ranking};
use crate::mapping::{ColumnMapping, Role};
use crate::records::RecordSet;
use crate::tokenize::{DEFAULT_DELIMITER, tokenize_cells};

/// How many entries each ranked chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TopLimits {
    /// Hiring companies shown in the bar chart.
    pub companies: usize,
    /// Locations shown in the treemap.
    pub locations: usize,
    /// Skills shown in the bar chart.
    pub skills: usize,
}

impl Default for TopLimits {
    fn default() -> Self {
        Self {
            companies: 20,
            locations: 30,
            skills: 30,
        }
    }
}

/// Knobs for one report generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Top-N limit per ranked chart.
    pub limits: TopLimits,
    /// Separator between skills inside one cell.
    pub skills_delimiter: char,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            limits: TopLimits::default(),
            skills_delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// Every projection of one record set under one column mapping.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct DashboardReport {
    /// The mapping the report was computed with.
    pub mapping: ColumnMapping,
    /// Limits the rankings were truncated to.
    pub limits: TopLimits,
    /// Number of data rows in the record set.
    pub rows: usize,
    /// Distinct non-missing companies.
    pub distinct_companies: usize,
    /// Distinct non-missing locations.
    pub distinct_locations: usize,
    /// Distinct skill tokens.
    pub distinct_skills: usize,
    /// Top companies, highest count first.
    pub companies: Ranking,
    /// Top locations, highest count first.
    pub locations: Ranking,
    /// Top skill tokens, highest count first.
    pub skills: Ranking,
    /// All descriptions joined into one corpus.
    pub description_corpus: String,
    /// All skill tokens joined into one corpus.
    pub skills_corpus: String,
}

/// Compute every projection of `records` under `mapping`.
///
/// Fails without computing anything when `mapping` was resolved against a
/// different record set.
#[tracing::instrument(skip_all, fields(rows = records.len()))]
pub fn generate(
    records: &RecordSet,
    mapping: &ColumnMapping,
    options: &ReportOptions,
) -> MappingResult<DashboardReport> {
    mapping.check(records)?;
    let limits = options.limits;

    let company_table = FrequencyTable::from_cells(records.column(mapping.index(Role::Company)));
    let companies = company_table.top(limits.companies);

    let location_table =
        FrequencyTable::from_cells(records.column(mapping.index(Role::Location)));
    let locations = location_table.top(limits.locations);

    let skill_tokens = tokenize_cells(
        records.column(mapping.index(Role::Skills)),
        options.skills_delimiter,
    );
    let skill_table = FrequencyTable::from_values(&skill_tokens);
    let skills = skill_table.top(limits.skills);

    let description_corpus =
        build_cell_corpus(records.column(mapping.index(Role::Description)));
    let skills_corpus = build_corpus(&skill_tokens);

    tracing::info!(
        companies = company_table.len(),
        locations = location_table.len(),
        skills = skill_table.len(),
        description_chars = description_corpus.len(),
        "report generated"
    );

    Ok(DashboardReport {
        mapping: mapping.clone(),
        limits,
        rows: records.len(),
        distinct_companies: company_table.len(),
        distinct_locations: location_table.len(),
        distinct_skills: skill_table.len(),
        companies,
        locations,
        skills,
        description_corpus,
        skills_corpus,
    })
}
