//! Report formatters (text and JSON).
//!
//! Reports go to stdout; everything else the tool says goes to stderr. In
//! the text format, the two timing lines are the stable part of the output:
//! linear first, hashed second, one per line, whole milliseconds.

use std::fmt;
use std::time::Duration;

use lookup_core::ChildRecord;
use serde_json::json;

/// What one lookup strategy returned. Absence is a normal outcome, not a
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(String),
    Absent,
}

impl LookupOutcome {
    /// Capture a search result as an owned outcome, so the report outlives
    /// the dataset it was measured against.
    pub fn capture(hit: Option<&ChildRecord>) -> Self {
        match hit {
            Some(child) => LookupOutcome::Found(child.label.clone()),
            None => LookupOutcome::Absent,
        }
    }

    fn label(&self) -> Option<&str> {
        match self {
            LookupOutcome::Found(label) => Some(label),
            LookupOutcome::Absent => None,
        }
    }
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupOutcome::Found(label) => write!(f, "found {label}"),
            LookupOutcome::Absent => write!(f, "not found"),
        }
    }
}

/// Everything a single benchmark run produced.
#[derive(Debug)]
pub struct BenchReport {
    pub parents: u32,
    pub children: u32,
    pub target_parent: u32,
    pub target_child: u32,
    pub low_memory: bool,
    pub sequence_build: Duration,
    pub index_build: Duration,
    pub linear_search: Duration,
    pub hashed_lookup: Duration,
    pub linear_outcome: LookupOutcome,
    pub hashed_outcome: LookupOutcome,
    pub verified: bool,
}

/// The text report.
impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "=== Collection Bench: Lookup ===")?;
        writeln!(f)?;
        writeln!(f, "Dataset:")?;
        writeln!(f, "  Parents:          {}", self.parents)?;
        writeln!(f, "  Children each:    {}", self.children)?;
        writeln!(
            f,
            "  Records:          {}",
            self.parents as u64 * self.children as u64
        )?;
        writeln!(
            f,
            "  Residency:        {}",
            if self.low_memory {
                "one representation at a time"
            } else {
                "both representations"
            }
        )?;
        writeln!(
            f,
            "  Sequence build:   {} ms",
            self.sequence_build.as_millis()
        )?;
        writeln!(f, "  Index build:      {} ms", self.index_build.as_millis())?;
        writeln!(f)?;
        writeln!(
            f,
            "Target: parent {}, child {}",
            self.target_parent, self.target_child
        )?;
        writeln!(f)?;
        writeln!(f, "Linear search time: {} ms", self.linear_search.as_millis())?;
        writeln!(f, "Hashed lookup time: {} ms", self.hashed_lookup.as_millis())?;
        writeln!(f)?;
        writeln!(f, "  Linear result:    {}", self.linear_outcome)?;
        writeln!(f, "  Hashed result:    {}", self.hashed_outcome)?;
        writeln!(
            f,
            "  Verification:     {}",
            if self.verified { "[OK]" } else { "[FAIL]" }
        )?;
        writeln!(f)
    }
}

impl BenchReport {
    /// Print the text report.
    pub fn print_text(&self) {
        print!("{}", self);
    }

    /// Print the report as pretty JSON.
    pub fn print_json(&self) -> Result<(), serde_json::Error> {
        println!("{}", serde_json::to_string_pretty(&self.to_json())?);
        Ok(())
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "parents": self.parents,
            "children": self.children,
            "target_parent": self.target_parent,
            "target_child": self.target_child,
            "low_memory": self.low_memory,
            "sequence_build_ms": self.sequence_build.as_millis() as u64,
            "index_build_ms": self.index_build.as_millis() as u64,
            "linear_search_ms": self.linear_search.as_millis() as u64,
            "hashed_lookup_ms": self.hashed_lookup.as_millis() as u64,
            "linear_result": self.linear_outcome.label(),
            "hashed_result": self.hashed_outcome.label(),
            "verified": self.verified,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> BenchReport {
        BenchReport {
            parents: 1_000_000,
            children: 10,
            target_parent: 987_665,
            target_child: 9,
            low_memory: false,
            sequence_build: Duration::from_millis(812),
            index_build: Duration::from_millis(1_033),
            linear_search: Duration::from_millis(4),
            hashed_lookup: Duration::from_micros(3),
            linear_outcome: LookupOutcome::Found("Child_987665_9".to_string()),
            hashed_outcome: LookupOutcome::Found("Child_987665_9".to_string()),
            verified: true,
        }
    }

    #[test]
    fn outcome_captures_hit_and_miss() {
        let child = ChildRecord {
            id: 9,
            label: "Child_987665_9".to_string(),
        };

        assert_eq!(
            LookupOutcome::capture(Some(&child)),
            LookupOutcome::Found("Child_987665_9".to_string())
        );
        assert_eq!(LookupOutcome::capture(None), LookupOutcome::Absent);
    }

    #[test]
    fn outcome_displays_for_the_text_report() {
        let found = LookupOutcome::Found("Child_3_1".to_string());
        assert_eq!(found.to_string(), "found Child_3_1");
        assert_eq!(LookupOutcome::Absent.to_string(), "not found");
    }

    #[test]
    fn text_report_keeps_linear_line_before_hashed_line() {
        let text = sample_report().to_string();
        let lines: Vec<&str> = text.lines().collect();

        // Whole milliseconds, each on its own line: 4 ms from the linear
        // search, 0 ms from the sub-millisecond hashed lookup.
        let linear = lines
            .iter()
            .position(|line| *line == "Linear search time: 4 ms")
            .expect("linear timing line present");
        let hashed = lines
            .iter()
            .position(|line| *line == "Hashed lookup time: 0 ms")
            .expect("hashed timing line present");

        assert!(
            linear < hashed,
            "linear timing line must come before the hashed one:\n{text}"
        );
    }

    #[test]
    fn json_reports_whole_milliseconds() {
        let value = sample_report().to_json();

        assert_eq!(value["linear_search_ms"], 4);
        // Sub-millisecond durations truncate to zero rather than rounding up.
        assert_eq!(value["hashed_lookup_ms"], 0);
        assert_eq!(value["linear_result"], "Child_987665_9");
        assert_eq!(value["verified"], true);
    }

    #[test]
    fn json_reports_absence_as_null() {
        let mut report = sample_report();
        report.linear_outcome = LookupOutcome::Absent;
        report.hashed_outcome = LookupOutcome::Absent;
        report.verified = true;

        let value = report.to_json();
        assert!(value["linear_result"].is_null());
        assert!(value["hashed_result"].is_null());
    }
}
