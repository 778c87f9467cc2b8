use crate::Count;
use crate::cards::category::Category;
use std::collections::BTreeMap;

/// Frequency table for one enumeration run: per-category counts plus
/// the reserved "all hands" total.
///
/// Created fresh per run and owned by it; counts only ever move up
/// while the run is live. Labels a hand qualifies for are tallied
/// independently, so columns do not sum to the total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: BTreeMap<Category, Count>,
    total: Count,
}

impl Tally {
    /// record one examined hand under every label it qualifies for
    pub fn observe(&mut self, labels: Vec<Category>) {
        self.total += 1;
        for label in labels {
            *self.counts.entry(label).or_insert(0) += 1;
        }
    }

    pub fn count(&self, label: &Category) -> Count {
        self.counts.get(label).copied().unwrap_or(0)
    }

    pub fn total(&self) -> Count {
        self.total
    }

    /// "1 in X" by integer division. None when the category never
    /// occurred; a zero count is "no data", not a division fault.
    pub fn odds(&self, label: &Category) -> Option<Count> {
        match self.count(label) {
            0 => None,
            n => Some(self.total / n),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Category, Count)> {
        self.counts.iter().map(|(label, &count)| (label, count))
    }

    /// counts keyed by label text, with the reserved total alongside
    pub fn json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for (label, count) in self.iter() {
            map.insert(label.to_string(), serde_json::json!(count));
        }
        map.insert("all hands".to_string(), serde_json::json!(self.total));
        serde_json::Value::Object(map)
    }
}

/// the report table: rows ascending by count, the total last
impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:<18} {:>14} {:>12}", "hand type", "count", "1 in x odds")?;
        let mut rows = self.iter().collect::<Vec<(&Category, Count)>>();
        rows.sort_by_key(|&(_, count)| count);
        for (label, count) in rows {
            let odds = match self.odds(label) {
                Some(x) => x.to_string(),
                None => "-".to_string(),
            };
            writeln!(f, "{:<18} {:>14} {:>12}", label.to_string(), count, odds)?;
        }
        write!(f, "{:<18} {:>14} {:>12}", "all hands", self.total, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observation_bumps_total_and_labels() {
        let mut tally = Tally::default();
        tally.observe(vec![Category::Flush, Category::OnePair]);
        tally.observe(vec![]);
        assert_eq!(tally.total(), 2);
        assert_eq!(tally.count(&Category::Flush), 1);
        assert_eq!(tally.count(&Category::OnePair), 1);
        assert_eq!(tally.count(&Category::Straight), 0);
    }

    #[test]
    fn zero_counts_have_no_odds() {
        let mut tally = Tally::default();
        tally.observe(vec![Category::Flush]);
        tally.observe(vec![]);
        tally.observe(vec![]);
        assert_eq!(tally.odds(&Category::Flush), Some(3));
        assert_eq!(tally.odds(&Category::Straight), None);
    }

    #[test]
    fn json_carries_the_reserved_total() {
        let mut tally = Tally::default();
        tally.observe(vec![Category::FullHouse]);
        let json = tally.json();
        assert_eq!(json["full house"], 1);
        assert_eq!(json["all hands"], 1);
    }

    #[test]
    fn report_ends_with_the_total_row() {
        let mut tally = Tally::default();
        tally.observe(vec![Category::Flush]);
        let report = tally.to_string();
        assert!(report.starts_with("hand type"));
        assert!(report.contains("flush"));
        assert!(report.lines().last().unwrap().starts_with("all hands"));
    }
}
