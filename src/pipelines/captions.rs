//! EAF → WebVTT caption conversion pipeline.
//!
//! Both hand tiers of a signer are flattened by begin time and
//! re-segmented with the extraction merge, so overlapping two-handed
//! repeats of the same gloss become one caption instead of two.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use log::{error, info, warn};

use crate::error::Error;
use crate::sources::discovery::collect_eaf_files;
use crate::sources::EafFile;
use crate::units::extraction::extract_spans;
use crate::units::{Annotation, Hand, Signer};
use crate::vtt::{write_cues, Cue};

use super::pipeline::Pipeline;

pub struct Eaf2Vtt {
    files: Vec<PathBuf>,
    output_dir: PathBuf,
    min_overlap: i64,
}

impl Eaf2Vtt {
    pub fn new(files: Vec<PathBuf>, output_dir: PathBuf, min_overlap: i64) -> Self {
        Self {
            files,
            output_dir,
            min_overlap,
        }
    }

    fn process_file(&self, path: &Path) -> Result<(), Error> {
        let eaf = EafFile::from_path(path)?;
        let file_stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        // corpus file names start with "CNGT"; the caption names drop it
        let base_name = file_stem.strip_prefix("CNGT").unwrap_or(&file_stem);

        for signer in Signer::ALL {
            let mut participant = String::new();
            let mut annotations: Vec<Annotation> = Vec::new();
            for hand in [Hand::Right, Hand::Left] {
                if let Some(tier) = eaf.gloss_tier(hand, signer) {
                    if !tier.participant.is_empty() {
                        participant = tier.participant.clone();
                    }
                    annotations.extend(tier.annotations.iter().cloned());
                }
            }
            if annotations.is_empty() || participant.is_empty() {
                continue;
            }
            annotations.sort_by_key(|a| a.begin);

            let mut cues: Vec<Cue> = extract_spans(&annotations, self.min_overlap)
                .into_iter()
                .filter(|span| !span.value.is_empty())
                .map(|span| Cue {
                    start: span.begin,
                    end: span.end,
                    text: span.value,
                })
                .collect();
            // nested spans are emitted out of order; cues must be chronological
            cues.sort_by_key(|cue| (cue.start, cue.end));

            let output = self
                .output_dir
                .join(format!("{}_{}.vtt", base_name, participant));
            info!("writing {} cues to {:?}", cues.len(), output);
            let mut writer = BufWriter::new(File::create(&output)?);
            write_cues(&mut writer, &cues)?;
        }
        Ok(())
    }
}

impl Pipeline<()> for Eaf2Vtt {
    fn run(&self) -> Result<(), Error> {
        std::fs::create_dir_all(&self.output_dir)?;
        let files = collect_eaf_files(&self.files)?;
        if files.is_empty() {
            warn!("no EAF files to process");
        }
        for file in &files {
            info!("processing {:?}", file);
            if let Err(e) = self.process_file(file) {
                error!("skipping {:?}: {:?}", file, e);
            }
        }
        Ok(())
    }
}
