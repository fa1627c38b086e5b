use polscan_scan::{DocumentRecord, ResourceType};
use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::hash::Hash;

/// Document counts for a scan, grouped by manual and by resource type.
///
/// Each grouping is ordered by descending count, ties broken by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub by_manual: Vec<(String, usize)>,
    pub by_resource_type: Vec<(ResourceType, usize)>,
}
impl Summary {
    pub fn from_records(records: &[DocumentRecord]) -> Self {
        Self {
            total: records.len(),
            by_manual: count_by(records, |r| r.policy_manual.clone()),
            by_resource_type: count_by(records, |r| r.resource_type),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

fn count_by<K: Hash + Ord>(records: &[DocumentRecord], key: impl Fn(&DocumentRecord) -> K) -> Vec<(K, usize)> {
    let mut counts: HashMap<K, usize> = HashMap::new();
    for record in records {
        *counts.entry(key(record)).or_default() += 1;
    }
    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|(a_key, a_count), (b_key, b_count)| b_count.cmp(a_count).then_with(|| a_key.cmp(b_key)));
    counts
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Processed {} documents", self.total)?;
        if self.is_empty() {
            return writeln!(f, "No documents were processed.");
        }
        writeln!(f)?;
        writeln!(f, "Summary by policy manual:")?;
        for (manual, count) in &self.by_manual {
            writeln!(f, "  {manual}: {count}")?;
        }
        writeln!(f)?;
        writeln!(f, "Summary by resource type:")?;
        for (resource_type, count) in &self.by_resource_type {
            writeln!(f, "  {resource_type}: {count}")?;
        }
        Ok(())
    }
}
