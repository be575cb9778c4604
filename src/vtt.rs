//! Minimal WebVTT cue writing for the caption conversion pipeline.

use std::io::{self, Write};

/// One caption cue, times in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    pub start: i64,
    pub end: i64,
    pub text: String,
}

/// Formats a millisecond offset as a WebVTT timestamp, `HH:MM:SS.mmm`.
pub fn timestamp(milliseconds: i64) -> String {
    let (seconds, millis) = (milliseconds / 1000, milliseconds % 1000);
    let (minutes, seconds) = (seconds / 60, seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}

/// Writes a complete WebVTT document.
pub fn write_cues<W: Write>(writer: &mut W, cues: &[Cue]) -> io::Result<()> {
    writeln!(writer, "WEBVTT")?;
    for cue in cues {
        writeln!(writer)?;
        writeln!(writer, "{} --> {}", timestamp(cue.start), timestamp(cue.end))?;
        writeln!(writer, "{}", cue.text)?;
    }
    Ok(())
}
