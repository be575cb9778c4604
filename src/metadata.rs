//! Participant metadata: the participant → region table.
//!
//! Loaded from a tab-separated file with a header row, column 0 holding the
//! participant id and column 1 the region label.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Error;

#[derive(Debug, Default)]
pub struct Regions {
    regions: HashMap<String, String>,
}

impl Regions {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Self::from_reader(File::open(path)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut regions = HashMap::new();
        for record in csv_reader.records() {
            let record = record?;
            if let (Some(participant), Some(region)) = (record.get(0), record.get(1)) {
                regions.insert(participant.to_owned(), region.to_owned());
            }
        }
        Ok(Self { regions })
    }

    /// Region lookup. A missing participant is an explicit error: silently
    /// defaulting would skew the stratified counts.
    pub fn region(&self, participant: &str) -> Result<&str, Error> {
        self.regions
            .get(participant)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownParticipant(participant.to_owned()))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
