pub mod sink;

pub use sink::{MarkdownFileSink, ReportSink, StdoutSink};

use tracing::info;

use crate::output::format_report;
use crate::project::{Project, ProjectError, ProjectStore};
use crate::scoring::{sort_by_score, ScoreKind};

/// What an export produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub exported: usize,
    pub kind: ScoreKind,
}

/// All stored projects, highest `kind` score first.
pub fn ranked_projects(store: &ProjectStore, kind: ScoreKind) -> Vec<Project> {
    sort_by_score(&store.find_all(), kind)
}

/// The full report for projects ranked by `kind`.
///
/// An empty store still yields a document: the header plus the no-projects line.
pub fn build_report(store: &ProjectStore, kind: ScoreKind) -> (String, ExportSummary) {
    let sorted = ranked_projects(store, kind);
    let summary = ExportSummary {
        exported: sorted.len(),
        kind,
    };
    (format_report(&sorted, kind), summary)
}

/// Build the report ranked by `kind` and hand it to `sink`.
///
/// The sort key is parsed into `kind` by the caller, so an unknown key fails
/// before the store is read or the sink touched.
pub fn export_projects(
    store: &ProjectStore,
    kind: ScoreKind,
    sink: &mut dyn ReportSink,
) -> Result<ExportSummary, ProjectError> {
    let (document, summary) = build_report(store, kind);
    sink.write_report(&document)?;

    info!(
        count = summary.exported,
        sort = %summary.kind,
        destination = %sink.describe(),
        "exported projects"
    );
    Ok(summary)
}
