//! Column-group collection state machine.
//!
//! Decouples the "keep asking for colsets until the user is done" loop from
//! any particular input source, so the same machine is driven by the
//! interactive prompt, `--columns` flags, or a test harness.

use super::{validate, ColumnGroup};
use crate::error::Error;
use crate::record::RecordSet;

/// Sentinel line that terminates collection.
pub const DONE_SENTINEL: &str = "done";

/// Outcome of offering one input line to the collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Offer {
    /// The line parsed and validated; a group was recorded.
    Accepted,
    /// Some columns were not found; nothing was recorded. The driver should
    /// report the names and re-prompt.
    Rejected(Vec<String>),
    /// Collection has terminated (either by this line being the sentinel or
    /// because the collector was already done).
    Finished,
}

/// Accumulates validated column groups until the sentinel arrives.
///
/// Two states: collecting (the default) and done (terminal, entered when the
/// sentinel is offered).
#[derive(Debug, Default)]
pub struct ColumnCollector {
    groups: Vec<ColumnGroup>,
    done: bool,
}

impl ColumnCollector {
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Offers one raw input line.
    ///
    /// The line is split on commas and each piece trimmed; the sentinel
    /// (`done`) moves the machine to its terminal state. Zero accepted
    /// groups is a legal outcome.
    pub fn offer(&mut self, line: &str, set: &RecordSet) -> Offer {
        if self.done {
            return Offer::Finished;
        }

        if line.trim() == DONE_SENTINEL {
            self.done = true;
            return Offer::Finished;
        }

        let candidates: Vec<String> = line.split(',').map(|c| c.trim().to_string()).collect();

        match validate(set, &candidates) {
            Ok(group) => {
                self.groups.push(group);
                Offer::Accepted
            }
            Err(Error::UnknownColumn(names)) => Offer::Rejected(names),
            // validate only fails with UnknownColumn.
            Err(_) => unreachable!(),
        }
    }

    pub fn into_groups(self) -> Vec<ColumnGroup> {
        self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordSet;

    fn dataset(columns: &[&str]) -> RecordSet {
        RecordSet::new(columns.iter().map(|c| c.to_string()).collect(), vec![])
    }

    #[test]
    fn test_accepts_and_terminates() {
        let set = dataset(&["ZONE", "DISTRICT"]);
        let mut collector = ColumnCollector::new();

        assert_eq!(collector.offer("ZONE", &set), Offer::Accepted);
        assert_eq!(collector.offer(" ZONE , DISTRICT ", &set), Offer::Accepted);
        assert_eq!(collector.offer("done", &set), Offer::Finished);
        assert!(collector.is_done());

        let groups = collector.into_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].columns(), ["ZONE", "DISTRICT"]);
    }

    #[test]
    fn test_rejection_records_nothing() {
        let set = dataset(&["ZONE"]);
        let mut collector = ColumnCollector::new();

        assert_eq!(
            collector.offer("ZONE,TYPO", &set),
            Offer::Rejected(vec!["TYPO".to_string()])
        );
        assert!(!collector.is_done());
        assert!(collector.into_groups().is_empty());
    }

    #[test]
    fn test_immediate_done_yields_zero_groups() {
        let set = dataset(&["ZONE"]);
        let mut collector = ColumnCollector::new();
        assert_eq!(collector.offer("done", &set), Offer::Finished);
        assert!(collector.into_groups().is_empty());
    }

    #[test]
    fn test_offer_after_done_is_finished_without_change() {
        let set = dataset(&["ZONE"]);
        let mut collector = ColumnCollector::new();
        collector.offer("done", &set);
        assert_eq!(collector.offer("ZONE", &set), Offer::Finished);
        assert!(collector.into_groups().is_empty());
    }
}
