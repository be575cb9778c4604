//! End-to-end fragment extraction and caption conversion.
use std::fs;
use std::path::Path;

use cngt_tools::fragment::FragmentCommand;
use cngt_tools::pipelines::{Eaf2Vtt, GlossExtract, Pipeline, RunMode};
use cngt_tools::sources::EafFile;
use cngt_tools::units::extraction::extract_spans;

const EAF: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ANNOTATION_DOCUMENT AUTHOR="" DATE="2016-07-01T00:00:00+01:00" FORMAT="2.8" VERSION="2.8">
    <HEADER MEDIA_FILE="" TIME_UNITS="milliseconds">
        <MEDIA_DESCRIPTOR MEDIA_URL="file:///videos/CNGT0001_S001_b.mpg" MIME_TYPE="video/mpeg"/>
    </HEADER>
    <TIME_ORDER>
        <TIME_SLOT TIME_SLOT_ID="ts1" TIME_VALUE="0"/>
        <TIME_SLOT TIME_SLOT_ID="ts2" TIME_VALUE="1000"/>
        <TIME_SLOT TIME_SLOT_ID="ts3" TIME_VALUE="100"/>
        <TIME_SLOT TIME_SLOT_ID="ts4" TIME_VALUE="900"/>
        <TIME_SLOT TIME_SLOT_ID="ts5" TIME_VALUE="2000"/>
        <TIME_SLOT TIME_SLOT_ID="ts6" TIME_VALUE="3000"/>
    </TIME_ORDER>
    <TIER TIER_ID="GlossR S1" PARTICIPANT="S001" LINGUISTIC_TYPE_REF="gloss">
        <ANNOTATION>
            <ALIGNABLE_ANNOTATION ANNOTATION_ID="a1" TIME_SLOT_REF1="ts1" TIME_SLOT_REF2="ts2">
                <ANNOTATION_VALUE>HUIS</ANNOTATION_VALUE>
            </ALIGNABLE_ANNOTATION>
        </ANNOTATION>
        <ANNOTATION>
            <ALIGNABLE_ANNOTATION ANNOTATION_ID="a2" TIME_SLOT_REF1="ts5" TIME_SLOT_REF2="ts6">
                <ANNOTATION_VALUE>BOOM</ANNOTATION_VALUE>
            </ALIGNABLE_ANNOTATION>
        </ANNOTATION>
    </TIER>
    <TIER TIER_ID="GlossL S1" PARTICIPANT="S001" LINGUISTIC_TYPE_REF="gloss">
        <ANNOTATION>
            <ALIGNABLE_ANNOTATION ANNOTATION_ID="a3" TIME_SLOT_REF1="ts3" TIME_SLOT_REF2="ts4">
                <ANNOTATION_VALUE>HUIS</ANNOTATION_VALUE>
            </ALIGNABLE_ANNOTATION>
        </ANNOTATION>
    </TIER>
</ANNOTATION_DOCUMENT>"#;

#[test_log::test]
fn spans_and_commands_from_a_parsed_file() {
    let eaf = EafFile::from_reader(EAF.as_bytes()).unwrap();
    let streams = eaf.participant_annotations();
    let stream = &streams["S001"];

    let spans: Vec<_> = extract_spans(stream, 0)
        .into_iter()
        .filter(|span| !span.value.is_empty())
        .collect();
    // the two-handed HUIS merges into one span
    assert_eq!(spans.len(), 2);
    assert_eq!((spans[0].begin, spans[0].end, spans[0].value.as_str()), (0, 1000, "HUIS"));
    assert_eq!((spans[1].begin, spans[1].end, spans[1].value.as_str()), (2000, 3000, "BOOM"));

    let command = FragmentCommand::for_span(
        "ffmpeg",
        Path::new("/videos"),
        &eaf.videos()["S001"],
        Path::new("/glosses"),
        "CNGT0001",
        "S001",
        &spans[0],
        100,
    )
    .unwrap();
    assert_eq!(command.start, -0.1);
    assert_eq!(command.duration, 1.2);
    assert_eq!(
        command.output,
        Path::new("/glosses/HUIS/CNGT0001_S001_0_1000.mpg")
    );
}

#[test_log::test]
fn dry_run_extraction_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("CNGT0001.eaf"), EAF).unwrap();
    let gloss_dir = dir.path().join("glosses");

    let pipeline = GlossExtract::new(
        vec![dir.path().to_path_buf()],
        dir.path().join("videos"),
        gloss_dir.clone(),
        0,
        0,
        "ffmpeg".to_owned(),
        RunMode::DryRun,
    );
    pipeline.run().unwrap();
    assert!(!gloss_dir.exists());
}

#[test_log::test]
fn captions_are_written_per_participant() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("CNGT0001.eaf"), EAF).unwrap();
    let output_dir = dir.path().join("vtt");

    let pipeline = Eaf2Vtt::new(vec![dir.path().to_path_buf()], output_dir.clone(), 0);
    pipeline.run().unwrap();

    // leading "CNGT" dropped from the output name
    let vtt = fs::read_to_string(output_dir.join("0001_S001.vtt")).unwrap();
    assert_eq!(
        vtt,
        "WEBVTT\n\n00:00:00.000 --> 00:00:01.000\nHUIS\n\n00:00:02.000 --> 00:00:03.000\nBOOM\n"
    );
}
