use embargo_types::{Verdict, Violation};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub import_violations: Vec<Violation>,
    pub export_violations: Vec<Violation>,
    /// Edges that were in scope (local, with a module).
    pub edges_checked: u32,
}

impl DomainReport {
    pub fn violation_count(&self) -> usize {
        self.import_violations.len() + self.export_violations.len()
    }
}
