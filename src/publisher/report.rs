use super::RemoteCallError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    Upload,
    Label,
    Link,
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CallKind::Upload => "upload",
            CallKind::Label => "label",
            CallKind::Link => "link",
        };
        f.write_str(name)
    }
}

/// Outcome of the three registry calls made for one contract.
#[derive(Debug)]
pub struct RecordReport {
    pub contract_name: String,
    pub label: String,
    pub upload: Result<(), RemoteCallError>,
    pub label_address: Result<(), RemoteCallError>,
    pub link: Result<(), RemoteCallError>,
}

impl RecordReport {
    pub fn result(&self, kind: CallKind) -> &Result<(), RemoteCallError> {
        match kind {
            CallKind::Upload => &self.upload,
            CallKind::Label => &self.label_address,
            CallKind::Link => &self.link,
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = (CallKind, &RemoteCallError)> {
        [CallKind::Upload, CallKind::Label, CallKind::Link]
            .into_iter()
            .filter_map(|kind| self.result(kind).as_ref().err().map(|err| (kind, err)))
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

#[derive(Debug, Default)]
pub struct Summary {
    pub reports: Vec<RecordReport>,
    pub failed_uploads: usize,
    pub failed_labels: usize,
    pub failed_links: usize,
}

impl Summary {
    pub fn push(&mut self, report: RecordReport) {
        for (kind, _) in report.failures() {
            match kind {
                CallKind::Upload => self.failed_uploads += 1,
                CallKind::Label => self.failed_labels += 1,
                CallKind::Link => self.failed_links += 1,
            }
        }
        self.reports.push(report);
    }

    pub fn failures(&self, kind: CallKind) -> usize {
        match kind {
            CallKind::Upload => self.failed_uploads,
            CallKind::Label => self.failed_labels,
            CallKind::Link => self.failed_links,
        }
    }

    pub fn total_failures(&self) -> usize {
        self.failed_uploads + self.failed_labels + self.failed_links
    }

    pub fn has_failures(&self) -> bool {
        self.total_failures() > 0
    }

    /// Contracts for which at least one call failed.
    pub fn incomplete(&self) -> impl Iterator<Item = &RecordReport> {
        self.reports.iter().filter(|report| !report.is_success())
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "processed {} contracts, failed calls: upload={}, label={}, link={}",
            self.reports.len(),
            self.failed_uploads,
            self.failed_labels,
            self.failed_links
        )
    }
}
