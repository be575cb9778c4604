//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "cngt-tools", about = "sign language corpus batch tools.")]
/// Holds every command callable by the `cngt-tools` command.
pub enum CngtTools {
    #[structopt(about = "Count sign/gloss frequencies across a corpus")]
    Count(Count),
    #[structopt(about = "Extract a video fragment per sign")]
    Extract(Extract),
    #[structopt(about = "Convert gloss tiers to WebVTT captions")]
    Vtt(Vtt),
}

#[derive(Debug, StructOpt)]
/// Count command and parameters.
pub struct Count {
    #[structopt(
        parse(from_os_str),
        short = "m",
        long = "metadata",
        help = "participant metadata file (TSV: participant, region)"
    )]
    pub metadata: PathBuf,
    #[structopt(
        short = "o",
        long = "min-overlap",
        default_value = "0",
        help = "minimal overlap (ms) for two annotations to count as one sign"
    )]
    pub min_overlap: i64,
    #[structopt(parse(from_os_str), help = "EAF files or directories")]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Extract command and parameters.
pub struct Extract {
    #[structopt(
        parse(from_os_str),
        short = "v",
        long = "video-dir",
        help = "directory containing the corpus videos"
    )]
    pub video_dir: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "g",
        long = "gloss-dir",
        help = "output directory for the fragments of each gloss"
    )]
    pub gloss_dir: PathBuf,
    #[structopt(
        short = "o",
        long = "min-overlap",
        default_value = "0",
        help = "minimal overlap (ms) for two-handed signs"
    )]
    pub min_overlap: i64,
    #[structopt(
        short = "t",
        long = "extra-time",
        default_value = "0",
        help = "extra time (ms) at the beginning and end of each fragment"
    )]
    pub extra_time: i64,
    #[structopt(
        short = "c",
        long = "ffmpeg-cmd",
        default_value = "ffmpeg",
        help = "transcoder command, e.g. avconv on systems without ffmpeg"
    )]
    pub ffmpeg: String,
    #[structopt(long = "dry-run", help = "print the commands without running them")]
    pub dry_run: bool,
    #[structopt(long = "wait", help = "await each transcoder exit")]
    pub wait: bool,
    #[structopt(parse(from_os_str), help = "EAF files or directories")]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Vtt command and parameters.
pub struct Vtt {
    #[structopt(
        parse(from_os_str),
        short = "d",
        long = "output-dir",
        help = "output directory for the caption files"
    )]
    pub output_dir: PathBuf,
    #[structopt(
        short = "o",
        long = "min-overlap",
        default_value = "0",
        help = "minimal overlap (ms) for merging overlapping annotations"
    )]
    pub min_overlap: i64,
    #[structopt(parse(from_os_str), help = "EAF files or directories")]
    pub files: Vec<PathBuf>,
}
