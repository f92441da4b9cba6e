//! Batch driver (spec §2, §6): the loop that compiles each pattern once and
//! matches it against many candidate strings, collecting verdicts into a
//! JSON-serializable shape mirroring the input's order and length.

use crate::error::{BatchError, PatternError};
use crate::{compile, matches};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One `(pattern, strings)` pair read from batch JSON input. Unknown keys
/// in the source JSON are ignored, which is serde's default behavior for a
/// struct deriving `Deserialize` without `deny_unknown_fields`.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRecord {
    pub regex: String,
    pub strings: Vec<String>,
}

/// Preserves the insertion order and multiplicity of candidate strings.
///
/// Spec §9's open question on duplicate candidate strings leaves this
/// open; this engine follows the documented reference behavior of
/// preserving order and multiplicity rather than collapsing to a map,
/// while still offering [`OrderedVerdicts::as_map`] for callers who want
/// the deduplicated view spec §6 describes for the JSON output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedVerdicts(pub Vec<(String, bool)>);

impl OrderedVerdicts {
    pub fn as_slice(&self) -> &[(String, bool)] {
        &self.0
    }

    pub fn as_map(&self) -> HashMap<&str, bool> {
        self.0.iter().map(|(s, v)| (s.as_str(), *v)).collect()
    }
}

impl Serialize for OrderedVerdicts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (candidate, verdict) in &self.0 {
            map.serialize_entry(candidate, verdict)?;
        }
        map.end()
    }
}

/// The outcome of processing one batch record: either every candidate
/// string got a verdict, or the pattern itself failed to compile (spec §7:
/// "A malformed pattern in batch mode marks that record with a surfaced
/// error but does not abort the batch").
#[derive(Debug, Clone)]
pub enum RecordOutcome {
    Matched(OrderedVerdicts),
    PatternFailed(PatternError),
}

#[derive(Debug, Clone)]
pub struct RecordResult {
    pub regex: String,
    pub outcome: RecordOutcome,
}

impl Serialize for RecordResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("regex", &self.regex)?;
        match &self.outcome {
            RecordOutcome::Matched(verdicts) => map.serialize_entry("strings", verdicts)?,
            RecordOutcome::PatternFailed(err) => {
                map.serialize_entry("error", &err.to_string())?
            }
        }
        map.end()
    }
}

/// Runs the compile-and-match pipeline over many records (spec §2's
/// "Batch Driver"). `parallel` opts into evaluating records, and the
/// candidate strings within a record, concurrently (spec §5); the default
/// sequential path is used when it is `false`, keeping results simple to
/// reason about and test.
#[derive(Debug, Clone, Default)]
pub struct BatchDriver {
    pub parallel: bool,
}

impl BatchDriver {
    pub fn new() -> Self {
        BatchDriver { parallel: false }
    }

    pub fn parallel() -> Self {
        BatchDriver { parallel: true }
    }

    /// Processes every record, preserving input order and length in the
    /// output (spec §8 invariant 10).
    pub fn run(&self, records: &[BatchRecord]) -> Vec<RecordResult> {
        if self.parallel {
            self.run_parallel(records)
        } else {
            records.iter().map(|r| self.run_one(r)).collect()
        }
    }

    fn run_parallel(&self, records: &[BatchRecord]) -> Vec<RecordResult> {
        std::thread::scope(|scope| {
            let handles: Vec<_> = records
                .iter()
                .map(|record| scope.spawn(|| self.run_one(record)))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("batch worker thread panicked"))
                .collect()
        })
    }

    fn run_one(&self, record: &BatchRecord) -> RecordResult {
        let nfa = match compile(&record.regex) {
            Ok(nfa) => nfa,
            Err(e) => {
                return RecordResult {
                    regex: record.regex.clone(),
                    outcome: RecordOutcome::PatternFailed(e),
                }
            }
        };

        let verdicts = if self.parallel && record.strings.len() > 1 {
            std::thread::scope(|scope| {
                let handles: Vec<_> = record
                    .strings
                    .iter()
                    .map(|s| scope.spawn(|| (s.clone(), matches(&nfa, s))))
                    .collect();
                handles
                    .into_iter()
                    .map(|h| h.join().expect("candidate worker thread panicked"))
                    .collect()
            })
        } else {
            record
                .strings
                .iter()
                .map(|s| (s.clone(), matches(&nfa, s)))
                .collect()
        };

        RecordResult {
            regex: record.regex.clone(),
            outcome: RecordOutcome::Matched(OrderedVerdicts(verdicts)),
        }
    }
}

/// Reads batch input from JSON text (spec §6: "An array of objects, each
/// with two keys: `regex` ... and `strings`"). A schema violation surfaces
/// as a [`BatchError`], per spec §6's "schema violation yields an empty
/// batch and a diagnostic": the caller is expected to treat an `Err` here
/// as an empty batch plus the diagnostic the error carries.
pub fn read_batch(json: &str) -> Result<Vec<BatchRecord>, BatchError> {
    Ok(serde_json::from_str(json)?)
}

/// Serializes batch results back to the JSON shape of spec §6.
pub fn write_batch(results: &[RecordResult]) -> String {
    serde_json::to_string_pretty(results).expect("RecordResult serialization cannot fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_order_and_length() {
        let driver = BatchDriver::new();
        let records = vec![
            BatchRecord {
                regex: "a".to_string(),
                strings: vec!["a".to_string(), "b".to_string()],
            },
            BatchRecord {
                regex: "a|b".to_string(),
                strings: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            },
        ];
        let results = driver.run(&records);
        assert_eq!(results.len(), 2);
        match &results[0].outcome {
            RecordOutcome::Matched(v) => assert_eq!(
                v.as_slice(),
                &[("a".to_string(), true), ("b".to_string(), false)]
            ),
            _ => panic!("expected a match outcome"),
        }
    }

    #[test]
    fn malformed_pattern_does_not_abort_batch() {
        let driver = BatchDriver::new();
        let records = vec![
            BatchRecord {
                regex: "(".to_string(),
                strings: vec!["a".to_string()],
            },
            BatchRecord {
                regex: "a".to_string(),
                strings: vec!["a".to_string()],
            },
        ];
        let results = driver.run(&records);
        assert!(matches!(
            results[0].outcome,
            RecordOutcome::PatternFailed(_)
        ));
        assert!(matches!(results[1].outcome, RecordOutcome::Matched(_)));
    }

    #[test]
    fn duplicate_candidates_preserve_multiplicity() {
        let driver = BatchDriver::new();
        let records = vec![BatchRecord {
            regex: "a".to_string(),
            strings: vec!["a".to_string(), "a".to_string(), "b".to_string()],
        }];
        let results = driver.run(&records);
        match &results[0].outcome {
            RecordOutcome::Matched(v) => assert_eq!(v.as_slice().len(), 3),
            _ => panic!("expected a match outcome"),
        }
    }

    #[test]
    fn parallel_driver_matches_sequential_results() {
        let sequential = BatchDriver::new();
        let parallel = BatchDriver::parallel();
        let records = vec![BatchRecord {
            regex: "a(b|c)*d".to_string(),
            strings: vec!["ad".to_string(), "abcbcd".to_string(), "x".to_string()],
        }];
        let a = sequential.run(&records);
        let b = parallel.run(&records);
        match (&a[0].outcome, &b[0].outcome) {
            (RecordOutcome::Matched(va), RecordOutcome::Matched(vb)) => {
                assert_eq!(va, vb);
            }
            _ => panic!("expected match outcomes"),
        }
    }
}
