//! # CNGT tools
//!
//! Batch tools for sign language corpus annotation files (ELAN EAF).
//!
//! ```sh
//! cngt-tools 0.1.0
//! sign language corpus batch tools.
//!
//! USAGE:
//!     cngt-tools <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     count      Count sign/gloss frequencies across a corpus
//!     extract    Extract a video fragment per sign
//!     help       Prints this message or the help of the given subcommand(s)
//!     vtt        Convert gloss tiers to WebVTT captions
//! ```
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use cngt_tools::error::Error;
use cngt_tools::pipelines::{Eaf2Vtt, GlossExtract, Pipeline, RunMode, SignCount};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::CngtTools::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::CngtTools::Count(c) => {
            let pipeline = SignCount::new(c.files, c.metadata, c.min_overlap);
            let report = pipeline.run()?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        cli::CngtTools::Extract(e) => {
            let mode = match (e.dry_run, e.wait) {
                (true, _) => RunMode::DryRun,
                (false, true) => RunMode::Wait,
                (false, false) => RunMode::Spawn,
            };
            let pipeline = GlossExtract::new(
                e.files,
                e.video_dir,
                e.gloss_dir,
                e.min_overlap,
                e.extra_time,
                e.ffmpeg,
                mode,
            );
            pipeline.run()?;
        }

        cli::CngtTools::Vtt(v) => {
            let pipeline = Eaf2Vtt::new(v.files, v.output_dir, v.min_overlap);
            pipeline.run()?;
        }
    };
    Ok(())
}
