//! Sign frequency counting pipeline.
//!
//! For every file and signer pair, the two hand tiers are merged into
//! units of overlapping annotations and folded into the corpus-wide
//! frequency tables. The tables live for the whole batch and are read out
//! once at the end.

use std::path::{Path, PathBuf};

use log::{error, info, warn};

use crate::counts::{GlossFrequencies, SignCounts};
use crate::error::Error;
use crate::metadata::Regions;
use crate::sources::discovery::collect_eaf_files;
use crate::sources::EafFile;
use crate::units::counting::merge_hands;
use crate::units::{Hand, Signer};

use super::pipeline::Pipeline;

pub struct SignCount {
    files: Vec<PathBuf>,
    metadata: PathBuf,
    min_overlap: i64,
}

impl SignCount {
    pub fn new(files: Vec<PathBuf>, metadata: PathBuf, min_overlap: i64) -> Self {
        Self {
            files,
            metadata,
            min_overlap,
        }
    }

    /// Processes one file into the shared frequency tables. A signer pair
    /// only counts when both of its hand tiers are present.
    fn process_file(
        &self,
        path: &Path,
        regions: &Regions,
        frequencies: &mut GlossFrequencies,
    ) -> Result<(), Error> {
        let eaf = EafFile::from_path(path)?;
        for signer in Signer::ALL {
            let (Some(right), Some(left)) = (
                eaf.gloss_tier(Hand::Right, signer),
                eaf.gloss_tier(Hand::Left, signer),
            ) else {
                continue;
            };
            let units = merge_hands(&right.annotations, &left.annotations, self.min_overlap);
            frequencies.add_units(&units, regions)?;
        }
        Ok(())
    }
}

impl Pipeline<SignCounts> for SignCount {
    fn run(&self) -> Result<SignCounts, Error> {
        let regions = Regions::from_path(&self.metadata)?;
        info!("loaded {} participant regions", regions.len());

        let files = collect_eaf_files(&self.files)?;
        if files.is_empty() {
            warn!("no EAF files to process");
        }

        let mut frequencies = GlossFrequencies::new();
        for file in &files {
            info!("processing {:?}", file);
            if let Err(e) = self.process_file(file, &regions, &mut frequencies) {
                error!("skipping {:?}: {:?}", file, e);
            }
        }

        let summary = frequencies.summary();
        info!(
            "{} types, {} tokens, {} singletons",
            summary.types, summary.tokens, summary.singletons
        );
        Ok(frequencies.report())
    }
}
