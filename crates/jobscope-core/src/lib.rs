//! Core library for jobscope.
//!
//! Turns a spreadsheet of job listings into the data behind five dashboard
//! visualizations: top hiring companies, a location treemap, top skills, and
//! word clouds over job descriptions and skills.
//!
//! # Modules
//!
//! - [`records`] - Spreadsheet ingestion into an immutable [`RecordSet`]
//! - [`mapping`] - Role-to-column binding and validation
//! - [`tokenize`] - Skill-list tokenization
//! - [`frequency`] - Frequency tables and top-N ranking
//! - [`display`] - Chart-specific ordering
//! - [`corpus`] - Word-cloud corpus building
//! - [`report`] - The report orchestrator
//! - [`charts`] - Renderer payloads
//! - [`session`] - Idle/reporting session state
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use camino::Utf8Path;
//! use jobscope_core::{ColumnSelection, RecordSet, ReportOptions, Session};
//!
//! let records = RecordSet::from_path(Utf8Path::new("jobs.xlsx"), None)?;
//! let mut session = Session::new(ReportOptions::default());
//! let report = session.load(records, &ColumnSelection::default())?;
//! for entry in report.companies.entries() {
//!     println!("{}: {}", entry.label, entry.count);
//! }
//! # Ok::<(), jobscope_core::ReportError>(())
//! ```
#![deny(unsafe_code)]

pub mod charts;
pub mod config;
pub mod corpus;
pub mod display;
pub mod error;
pub mod frequency;
pub mod mapping;
pub mod records;
pub mod report;
pub mod session;
pub mod tokenize;

pub use charts::DashboardPayload;
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{
    ConfigError, ConfigResult, IngestError, IngestResult, MappingError, MappingResult,
    ReportError, ReportResult,
};
pub use frequency::{CountEntry, FrequencyTable, Ranking};
pub use mapping::{ColumnMapping, ColumnSelection, Role};
pub use records::{Cell, DEFAULT_MAX_INPUT_BYTES, RecordSet};
pub use report::{DashboardReport, ReportOptions, TopLimits};
pub use session::{Session, SessionView};
