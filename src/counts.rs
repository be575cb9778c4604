//! Gloss frequency aggregation.
//!
//! Counts are folded over all units of all processed files and read out
//! once at the end of a run. The aggregator is owned by the batch driver
//! and constructed fresh per invocation.

use std::collections::{BTreeMap, HashMap, HashSet};

use itertools::Itertools;
use serde::Serialize;

use crate::error::Error;
use crate::metadata::Regions;
use crate::units::Unit;

/// Trims the gloss and collapses internal whitespace runs (including
/// newlines and tabs) to single spaces.
pub fn normalize_gloss(raw: &str) -> String {
    raw.split_whitespace().join(" ")
}

/// Per-gloss entry of the frequency report.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GlossCount {
    pub frequency: u64,
    #[serde(rename = "numberOfSigners")]
    pub number_of_signers: u64,
    #[serde(rename = "frequenciesPerRegion")]
    pub frequencies_per_region: BTreeMap<String, RegionCount>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RegionCount {
    pub frequency: u64,
    #[serde(rename = "numberOfSigners")]
    pub number_of_signers: u64,
}

/// The final report, sorted by gloss text ascending.
pub type SignCounts = BTreeMap<String, GlossCount>;

/// Corpus-wide totals, logged at the end of a counting run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub tokens: u64,
    pub types: u64,
    pub singletons: u64,
}

/// Gloss occurrence counts: global, per participant and per region.
#[derive(Debug, Default)]
pub struct GlossFrequencies {
    freqs: HashMap<String, u64>,
    per_person: HashMap<String, HashMap<String, u64>>,
    per_region: HashMap<String, HashMap<String, HashMap<String, u64>>>,
}

impl GlossFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one unit into the tables. A gloss occurring on several
    /// annotations of the same participant within the unit counts once:
    /// the unit is one merged event, not several.
    ///
    /// Fails with [Error::UnknownParticipant] when a participant is missing
    /// from the region table.
    pub fn add_unit(&mut self, unit: &Unit, regions: &Regions) -> Result<(), Error> {
        let mut seen: HashMap<String, HashSet<&str>> = HashMap::new();
        for annotation in unit.annotations() {
            let gloss = normalize_gloss(&annotation.value);
            if gloss.is_empty() {
                continue;
            }
            seen.entry(gloss)
                .or_default()
                .insert(annotation.participant.as_str());
        }

        // resolve every region first so a failed lookup leaves the tables
        // untouched for this unit
        let mut resolved: HashMap<&str, &str> = HashMap::new();
        for &person in seen.values().flatten() {
            resolved.insert(person, regions.region(person)?);
        }

        for (gloss, participants) in &seen {
            *self.freqs.entry(gloss.clone()).or_default() += 1;
            for &person in participants {
                let region = resolved[person];
                *self
                    .per_person
                    .entry(person.to_owned())
                    .or_default()
                    .entry(gloss.clone())
                    .or_default() += 1;
                *self
                    .per_region
                    .entry(region.to_owned())
                    .or_default()
                    .entry(person.to_owned())
                    .or_default()
                    .entry(gloss.clone())
                    .or_default() += 1;
            }
        }
        Ok(())
    }

    pub fn add_units(&mut self, units: &[Unit], regions: &Regions) -> Result<(), Error> {
        for unit in units {
            self.add_unit(unit, regions)?;
        }
        Ok(())
    }

    pub fn summary(&self) -> Summary {
        Summary {
            tokens: self.freqs.values().sum(),
            types: self.freqs.len() as u64,
            singletons: self.freqs.values().filter(|&&f| f == 1).count() as u64,
        }
    }

    /// Builds the sorted report. Regions only appear under a gloss when at
    /// least one of their participants produced it.
    pub fn report(&self) -> SignCounts {
        let mut counts = SignCounts::new();
        for (gloss, &frequency) in &self.freqs {
            let number_of_signers = self
                .per_person
                .values()
                .filter(|glosses| glosses.contains_key(gloss))
                .count() as u64;

            let mut frequencies_per_region = BTreeMap::new();
            for (region, persons) in &self.per_region {
                let signers = persons
                    .values()
                    .filter(|glosses| glosses.contains_key(gloss))
                    .count() as u64;
                if signers == 0 {
                    continue;
                }
                let frequency = persons
                    .values()
                    .filter_map(|glosses| glosses.get(gloss))
                    .sum();
                frequencies_per_region.insert(
                    region.clone(),
                    RegionCount {
                        frequency,
                        number_of_signers: signers,
                    },
                );
            }

            counts.insert(
                gloss.clone(),
                GlossCount {
                    frequency,
                    number_of_signers,
                    frequencies_per_region,
                },
            );
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Annotation, Hand, Unit};

    fn ann(begin: i64, end: i64, value: &str, participant: &str) -> Annotation {
        Annotation {
            begin,
            end,
            value: value.to_owned(),
            participant: participant.to_owned(),
            hand: Hand::Right,
        }
    }

    fn regions() -> Regions {
        Regions::from_reader(
            "Participant\tRegion\nP1\tGroningen\nP2\tAmsterdam\nP3\tGroningen\n".as_bytes(),
        )
        .unwrap()
    }

    #[test]
    fn normalization_collapses_whitespace() {
        assert_eq!(normalize_gloss("  GEBAREN \t X\n"), "GEBAREN X");
        assert_eq!(normalize_gloss("PT:1"), "PT:1");
        assert_eq!(normalize_gloss(" \n\t "), "");
    }

    #[test]
    fn same_participant_same_gloss_counts_once_per_unit() {
        let unit = Unit::new(vec![ann(0, 10, "X", "P1"), ann(2, 12, "X", "P1")]);
        let mut freqs = GlossFrequencies::new();
        freqs.add_unit(&unit, &regions()).unwrap();

        let report = freqs.report();
        let x = &report["X"];
        assert_eq!(x.frequency, 1);
        assert_eq!(x.number_of_signers, 1);
        assert_eq!(x.frequencies_per_region["Groningen"].frequency, 1);
    }

    #[test]
    fn empty_glosses_are_skipped() {
        let unit = Unit::new(vec![ann(0, 10, "", "P1"), ann(0, 10, " \t ", "P1")]);
        let mut freqs = GlossFrequencies::new();
        freqs.add_unit(&unit, &regions()).unwrap();
        assert!(freqs.report().is_empty());
    }

    #[test]
    fn regions_are_stratified() {
        let mut freqs = GlossFrequencies::new();
        let units = vec![
            Unit::new(vec![ann(0, 10, "X", "P1")]),
            Unit::new(vec![ann(20, 30, "X", "P2")]),
            Unit::new(vec![ann(40, 50, "X", "P3")]),
            Unit::new(vec![ann(60, 70, "Y", "P1")]),
        ];
        freqs.add_units(&units, &regions()).unwrap();

        let report = freqs.report();
        let x = &report["X"];
        assert_eq!(x.frequency, 3);
        assert_eq!(x.number_of_signers, 3);
        assert_eq!(x.frequencies_per_region["Groningen"].frequency, 2);
        assert_eq!(x.frequencies_per_region["Groningen"].number_of_signers, 2);
        assert_eq!(x.frequencies_per_region["Amsterdam"].frequency, 1);

        // Amsterdam produced no Y
        let y = &report["Y"];
        assert!(!y.frequencies_per_region.contains_key("Amsterdam"));
    }

    #[test]
    fn unknown_participant_is_an_error() {
        let unit = Unit::new(vec![ann(0, 10, "X", "P9")]);
        let mut freqs = GlossFrequencies::new();
        match freqs.add_unit(&unit, &regions()) {
            Err(Error::UnknownParticipant(p)) => assert_eq!(p, "P9"),
            other => panic!("expected UnknownParticipant, got {:?}", other),
        }
    }

    #[test]
    fn aggregation_is_deterministic_across_runs() {
        let units = vec![
            Unit::new(vec![ann(0, 10, "X", "P1"), ann(5, 15, "Y", "P1")]),
            Unit::new(vec![ann(20, 30, "X", "P2")]),
        ];
        let run = || {
            let mut freqs = GlossFrequencies::new();
            freqs.add_units(&units, &regions()).unwrap();
            freqs.report()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn summary_counts_tokens_types_singletons() {
        let mut freqs = GlossFrequencies::new();
        let units = vec![
            Unit::new(vec![ann(0, 10, "X", "P1")]),
            Unit::new(vec![ann(20, 30, "X", "P2")]),
            Unit::new(vec![ann(40, 50, "Y", "P1")]),
        ];
        freqs.add_units(&units, &regions()).unwrap();
        assert_eq!(
            freqs.summary(),
            Summary {
                tokens: 3,
                types: 2,
                singletons: 1
            }
        );
    }
}
