//! Dashboard session state.
//!
//! A [`Session`] owns the currently loaded record set and everything derived
//! from it. It is either idle (nothing loaded yet) or reporting (a record set
//! is loaded and all projections are computed). Loading a new record set
//! replaces everything; there is no way back to idle.

use crate::error::ReportResult;
use crate::mapping::{ColumnMapping, ColumnSelection};
use crate::records::RecordSet;
use crate::report::{DashboardReport, ReportOptions, generate};

/// Message shown to the user while no spreadsheet is loaded.
pub const WAITING_MESSAGE: &str = "Upload a spreadsheet of job listings to get started.";

/// A loaded record set and everything derived from it.
#[derive(Debug)]
struct Loaded {
    records: RecordSet,
    mapping: ColumnMapping,
    report: DashboardReport,
}

/// What the presentation layer should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionView<'a> {
    /// No spreadsheet loaded yet.
    Waiting,
    /// A complete report is available.
    Ready(&'a DashboardReport),
}

/// The single active dashboard session.
#[derive(Debug, Default)]
pub struct Session {
    options: ReportOptions,
    /// `None` while idle.
    loaded: Option<Loaded>,
}

impl Session {
    /// Create an idle session.
    pub const fn new(options: ReportOptions) -> Self {
        Self {
            options,
            loaded: None,
        }
    }

    /// Options every report in this session is generated with.
    pub const fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Load a freshly ingested record set and compute every projection.
    ///
    /// Any previously loaded record set and report are discarded first, so a
    /// failed load leaves the session idle.
    #[tracing::instrument(skip_all, fields(rows = records.len()))]
    pub fn load(
        &mut self,
        records: RecordSet,
        selection: &ColumnSelection,
    ) -> ReportResult<&DashboardReport> {
        self.loaded = None;
        let mapping = selection.resolve(&records)?;
        let report = generate(&records, &mapping, &self.options)?;
        tracing::debug!("session reporting");
        let loaded = self.loaded.insert(Loaded {
            records,
            mapping,
            report,
        });
        Ok(&loaded.report)
    }

    /// Recompute every projection from the cached record set with a new
    /// column selection.
    ///
    /// Returns `Ok(None)` when idle. On a mapping failure the previous report
    /// is kept.
    #[tracing::instrument(skip_all)]
    pub fn remap(
        &mut self,
        selection: &ColumnSelection,
    ) -> ReportResult<Option<&DashboardReport>> {
        let Some(loaded) = self.loaded.as_mut() else {
            return Ok(None);
        };
        let mapping = selection.resolve(&loaded.records)?;
        loaded.report = generate(&loaded.records, &mapping, &self.options)?;
        loaded.mapping = mapping;
        Ok(Some(&loaded.report))
    }

    /// Current view for the presentation layer.
    pub const fn view(&self) -> SessionView<'_> {
        match &self.loaded {
            None => SessionView::Waiting,
            Some(loaded) => SessionView::Ready(&loaded.report),
        }
    }

    /// The loaded record set, if any.
    pub const fn records(&self) -> Option<&RecordSet> {
        match &self.loaded {
            None => None,
            Some(loaded) => Some(&loaded.records),
        }
    }

    /// The active column mapping, if any.
    pub const fn mapping(&self) -> Option<&ColumnMapping> {
        match &self.loaded {
            None => None,
            Some(loaded) => Some(&loaded.mapping),
        }
    }

    /// Whether a report is available.
    pub const fn is_reporting(&self) -> bool {
        self.loaded.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MappingError, ReportError};
    use crate::frequency::CountEntry;
    use crate::mapping::Role;
    use crate::records::Cell;

    fn records(rows: &[[&str; 3]]) -> RecordSet {
        let mut grid = vec![["company", "city", "tags"].map(Cell::from).to_vec()];
        grid.extend(rows.iter().map(|r| r.map(Cell::from).to_vec()));
        RecordSet::from_grid(grid).unwrap()
    }

    fn selection(company: &str) -> ColumnSelection {
        ColumnSelection {
            company: Some(company.into()),
            location: Some("city".into()),
            skills: Some("tags".into()),
            description: Some("tags".into()),
        }
    }

    #[test]
    fn new_session_is_waiting() {
        let session = Session::new(ReportOptions::default());
        assert_eq!(session.view(), SessionView::Waiting);
        assert!(session.records().is_none());
        assert!(!session.is_reporting());
    }

    #[test]
    fn load_moves_to_reporting() {
        let mut session = Session::default();
        let report = session
            .load(records(&[["Acme", "Pune", "SQL"]]), &selection("company"))
            .unwrap();
        assert_eq!(report.companies.entries(), [CountEntry::new("Acme", 1)]);
        assert!(session.is_reporting());
        assert!(matches!(session.view(), SessionView::Ready(_)));
    }

    #[test]
    fn new_load_replaces_previous_state() {
        let mut session = Session::default();
        session
            .load(records(&[["Acme", "Pune", "SQL"]]), &selection("company"))
            .unwrap();
        session
            .load(records(&[["Globex", "Delhi", "Excel"]]), &selection("company"))
            .unwrap();
        let SessionView::Ready(report) = session.view() else {
            panic!("expected a report");
        };
        assert_eq!(report.companies.entries(), [CountEntry::new("Globex", 1)]);
        assert_eq!(session.records().map(RecordSet::len), Some(1));
    }

    #[test]
    fn failed_load_leaves_session_idle() {
        let mut session = Session::default();
        session
            .load(records(&[["Acme", "Pune", "SQL"]]), &selection("company"))
            .unwrap();
        let err = session
            .load(records(&[["Acme", "Pune", "SQL"]]), &selection("employer"))
            .unwrap_err();
        assert!(matches!(
            err,
            ReportError::Mapping(MappingError::UnknownColumn { role: Role::Company, .. })
        ));
        assert_eq!(session.view(), SessionView::Waiting);
    }

    #[test]
    fn remap_recomputes_from_cached_records() {
        let mut session = Session::default();
        session
            .load(
                records(&[["Acme", "Pune", "SQL"], ["Acme", "Delhi", "SQL"]]),
                &selection("company"),
            )
            .unwrap();
        let report = session.remap(&selection("city")).unwrap().unwrap();
        assert_eq!(
            report.companies.entries(),
            [CountEntry::new("Pune", 1), CountEntry::new("Delhi", 1)]
        );
        assert_eq!(
            session.mapping().map(|m| m.name(Role::Company)),
            Some("city")
        );
    }

    #[test]
    fn failed_remap_keeps_previous_report() {
        let mut session = Session::default();
        session
            .load(records(&[["Acme", "Pune", "SQL"]]), &selection("company"))
            .unwrap();
        assert!(session.remap(&selection("nope")).is_err());
        assert_eq!(
            session.mapping().map(|m| m.name(Role::Company)),
            Some("company")
        );
    }

    #[test]
    fn remap_while_idle_does_nothing() {
        let mut session = Session::default();
        assert!(session.remap(&selection("company")).unwrap().is_none());
        assert!(!session.is_reporting());
    }

    #[test]
    fn reload_of_same_data_is_identical() {
        let data = records(&[["Acme", "Pune", "SQL, Excel"], ["Globex", "Pune", "sql"]]);
        let mut session = Session::default();
        let first = session.load(data.clone(), &selection("company")).unwrap().clone();
        let second = session.load(data, &selection("company")).unwrap().clone();
        assert_eq!(first, second);
    }
}
