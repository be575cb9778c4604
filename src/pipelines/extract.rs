//! Video fragment extraction pipeline.
//!
//! Per file and participant, the flattened gloss stream is re-segmented
//! into same-value spans and each span is cut out of the participant's
//! video with ffmpeg. The command is always printed; whether it is also
//! run depends on the [RunMode].

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::error::Error;
use crate::fragment::FragmentCommand;
use crate::sources::discovery::collect_eaf_files;
use crate::sources::EafFile;
use crate::units::extraction::extract_spans;

use super::pipeline::Pipeline;

/// How fragment commands are materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Print the commands without running anything.
    DryRun,
    /// Fire and forget: spawn ffmpeg and move on.
    Spawn,
    /// Await each ffmpeg exit before the next fragment.
    Wait,
}

pub struct GlossExtract {
    files: Vec<PathBuf>,
    video_dir: PathBuf,
    gloss_dir: PathBuf,
    min_overlap: i64,
    extra_time_ms: i64,
    ffmpeg: String,
    mode: RunMode,
}

impl GlossExtract {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        files: Vec<PathBuf>,
        video_dir: PathBuf,
        gloss_dir: PathBuf,
        min_overlap: i64,
        extra_time_ms: i64,
        ffmpeg: String,
        mode: RunMode,
    ) -> Self {
        Self {
            files,
            video_dir,
            gloss_dir,
            min_overlap,
            extra_time_ms,
            ffmpeg,
            mode,
        }
    }

    fn process_file(&self, path: &Path) -> Result<(), Error> {
        let eaf = EafFile::from_path(path)?;
        let file_stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        let streams = eaf.participant_annotations();
        for (participant, video) in eaf.videos() {
            let Some(annotations) = streams.get(participant) else {
                debug!("no gloss annotations for {}", participant);
                continue;
            };
            for span in extract_spans(annotations, self.min_overlap) {
                let Some(command) = FragmentCommand::for_span(
                    &self.ffmpeg,
                    &self.video_dir,
                    video,
                    &self.gloss_dir,
                    &file_stem,
                    participant,
                    &span,
                    self.extra_time_ms,
                ) else {
                    continue;
                };
                self.materialize(&command)?;
            }
        }
        Ok(())
    }

    fn materialize(&self, command: &FragmentCommand) -> Result<(), Error> {
        println!("{}", command);
        match self.mode {
            RunMode::DryRun => {}
            RunMode::Spawn => {
                self.prepare_output_dir(command)?;
                command.command().spawn()?;
            }
            RunMode::Wait => {
                self.prepare_output_dir(command)?;
                let status = command.command().status()?;
                if !status.success() {
                    warn!("{} exited with {}", self.ffmpeg, status);
                }
            }
        }
        Ok(())
    }

    fn prepare_output_dir(&self, command: &FragmentCommand) -> Result<(), Error> {
        if let Some(parent) = command.output.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl Pipeline<()> for GlossExtract {
    fn run(&self) -> Result<(), Error> {
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
