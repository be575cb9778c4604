//! Video fragment extraction commands.
//!
//! Each extracted span maps to one ffmpeg invocation cutting the span out
//! of the participant's video, padded symmetrically by a configurable
//! extra-time margin. Building the command is pure; running it is up to the
//! pipeline.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::units::extraction::Span;

/// One fragment-extraction invocation: `<program> -i <input> -ss <start>
/// -t <duration> -c copy <output>`.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentCommand {
    pub program: String,
    pub input: PathBuf,
    /// Seconds. May be negative when the margin extends before the video
    /// start; ffmpeg clamps that itself.
    pub start: f64,
    /// Seconds, span length plus the margin on both sides.
    pub duration: f64,
    pub output: PathBuf,
}

impl FragmentCommand {
    /// Builds the command for one span, or `None` for unvalued spans
    /// (including the segmentation sentinel).
    ///
    /// `extra_time_ms` pads the fragment on both sides. Output fragments
    /// are grouped in one directory per gloss value and named
    /// `<stem>_<participant>_<begin>_<end>.mpg`.
    #[allow(clippy::too_many_arguments)]
    pub fn for_span(
        program: &str,
        video_dir: &Path,
        video: &str,
        gloss_dir: &Path,
        file_stem: &str,
        participant: &str,
        span: &Span,
        extra_time_ms: i64,
    ) -> Option<Self> {
        if span.value.is_empty() {
            return None;
        }
        let extra = extra_time_ms as f64 / 1000.0;
        let start = span.begin as f64 / 1000.0 - extra;
        let duration = (span.end - span.begin) as f64 / 1000.0 + 2.0 * extra;

        let output = gloss_dir.join(sanitize_value(&span.value)).join(format!(
            "{}_{}_{}_{}.mpg",
            file_stem, participant, span.begin, span.end
        ));

        Some(Self {
            program: program.to_owned(),
            input: video_dir.join(video),
            start,
            duration,
            output,
        })
    }

    pub fn args(&self) -> Vec<String> {
        vec![
            "-i".to_owned(),
            self.input.display().to_string(),
            "-ss".to_owned(),
            self.start.to_string(),
            "-t".to_owned(),
            self.duration.to_string(),
            "-c".to_owned(),
            "copy".to_owned(),
            self.output.display().to_string(),
        ]
    }

    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(self.args());
        command
    }
}

impl fmt::Display for FragmentCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program, self.args().join(" "))
    }
}

/// Replaces characters that are unsafe in fragment directory names.
pub fn sanitize_value(value: &str) -> String {
    let mut sanitized = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '/' | '?' | '<' | '>' | '\\' | ':' | '*' | '|') {
            sanitized.push_str("__");
        } else {
            sanitized.push(c);
        }
    }
    sanitized
}
