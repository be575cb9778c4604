//! ELAN annotation file (EAF) reading.
//!
//! Only the subset of the EAF schema the tools need is modeled: the time
//! order, top-level alignable gloss tiers and the media descriptors. Gloss
//! tiers follow the corpus convention `Gloss<hand> S<signer>` (the `Glos`
//! spelling occurs in older files) and carry no PARENT_REF.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;
use serde::Deserialize;
use url::Url;

use crate::error::Error;
use crate::units::{Annotation, Hand, Signer};

// Serde model of the ANNOTATION_DOCUMENT subset.

#[derive(Debug, Deserialize)]
struct EafDocument {
    #[serde(rename = "HEADER")]
    header: Option<Header>,
    #[serde(rename = "TIME_ORDER")]
    time_order: Option<TimeOrder>,
    #[serde(rename = "TIER", default)]
    tiers: Vec<RawTier>,
}

#[derive(Debug, Deserialize)]
struct Header {
    #[serde(rename = "MEDIA_DESCRIPTOR", default)]
    media_descriptors: Vec<MediaDescriptor>,
}

#[derive(Debug, Deserialize)]
struct MediaDescriptor {
    #[serde(rename = "@MEDIA_URL")]
    media_url: String,
}

#[derive(Debug, Deserialize)]
struct TimeOrder {
    #[serde(rename = "TIME_SLOT", default)]
    time_slots: Vec<TimeSlot>,
}

#[derive(Debug, Deserialize)]
struct TimeSlot {
    #[serde(rename = "@TIME_SLOT_ID")]
    id: String,
    #[serde(rename = "@TIME_VALUE")]
    value: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct RawTier {
    #[serde(rename = "@TIER_ID")]
    id: String,
    #[serde(rename = "@PARTICIPANT")]
    participant: Option<String>,
    #[serde(rename = "@PARENT_REF")]
    parent_ref: Option<String>,
    #[serde(rename = "ANNOTATION", default)]
    annotations: Vec<RawAnnotation>,
}

#[derive(Debug, Deserialize)]
struct RawAnnotation {
    #[serde(rename = "ALIGNABLE_ANNOTATION")]
    alignable: Option<AlignableAnnotation>,
}

#[derive(Debug, Deserialize)]
struct AlignableAnnotation {
    #[serde(rename = "@TIME_SLOT_REF1")]
    time_slot_ref1: String,
    #[serde(rename = "@TIME_SLOT_REF2")]
    time_slot_ref2: String,
    #[serde(rename = "ANNOTATION_VALUE")]
    value: AnnotationValue,
}

#[derive(Debug, Deserialize)]
struct AnnotationValue {
    #[serde(rename = "$text")]
    text: Option<String>,
}

/// One gloss tier: the annotations of one hand of one signer.
#[derive(Debug, Clone)]
pub struct GlossTier {
    pub participant: String,
    /// Sorted ascending by `begin`.
    pub annotations: Vec<Annotation>,
}

/// A parsed EAF file with time slots resolved to milliseconds.
#[derive(Debug, Default)]
pub struct EafFile {
    gloss_tiers: HashMap<(Hand, Signer), GlossTier>,
    videos: HashMap<String, String>,
}

impl EafFile {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let document: EafDocument = quick_xml::de::from_reader(reader)?;
        Self::from_document(document)
    }

    fn from_document(document: EafDocument) -> Result<Self, Error> {
        let time_slots: HashMap<&str, Option<i64>> = document
            .time_order
            .as_ref()
            .map(|order| {
                order
                    .time_slots
                    .iter()
                    .map(|slot| (slot.id.as_str(), slot.value))
                    .collect()
            })
            .unwrap_or_default();

        let resolve = |slot_ref: &str| -> Result<i64, Error> {
            time_slots
                .get(slot_ref)
                .copied()
                .flatten()
                .ok_or_else(|| Error::UnknownTimeSlot(slot_ref.to_owned()))
        };

        let mut gloss_tiers = HashMap::new();
        for tier in &document.tiers {
            if tier.parent_ref.as_deref().is_some_and(|p| !p.is_empty()) {
                continue;
            }
            let Some((hand, signer)) = gloss_tier_id(&tier.id) else {
                continue;
            };
            let participant = tier.participant.clone().unwrap_or_default();

            let mut annotations = Vec::with_capacity(tier.annotations.len());
            for annotation in &tier.annotations {
                let Some(alignable) = &annotation.alignable else {
                    continue;
                };
                annotations.push(Annotation {
                    begin: resolve(&alignable.time_slot_ref1)?,
                    end: resolve(&alignable.time_slot_ref2)?,
                    value: alignable.value.text.clone().unwrap_or_default(),
                    participant: participant.clone(),
                    hand,
                });
            }
            annotations.sort_by_key(|a| a.begin);

            gloss_tiers.insert(
                (hand, signer),
                GlossTier {
                    participant,
                    annotations,
                },
            );
        }

        let mut videos = HashMap::new();
        for descriptor in document
            .header
            .iter()
            .flat_map(|h| h.media_descriptors.iter())
        {
            let file_name = media_file_name(&descriptor.media_url);
            match video_participant(&file_name) {
                Some(participant) => {
                    videos.insert(participant.to_owned(), file_name.clone());
                }
                None => warn!("unrecognized media file name: {}", file_name),
            }
        }

        Ok(Self {
            gloss_tiers,
            videos,
        })
    }

    pub fn gloss_tier(&self, hand: Hand, signer: Signer) -> Option<&GlossTier> {
        self.gloss_tiers.get(&(hand, signer))
    }

    /// participant code → video file basename, from the media descriptors.
    pub fn videos(&self) -> &HashMap<String, String> {
        &self.videos
    }

    /// Flattens both hand tiers into one begin-sorted stream per
    /// participant. Tiers are visited in a fixed channel order so that
    /// annotations sharing a begin time keep a stable relative order
    /// (right hand first) across runs.
    pub fn participant_annotations(&self) -> HashMap<String, Vec<Annotation>> {
        let mut streams: HashMap<String, Vec<Annotation>> = HashMap::new();
        for signer in Signer::ALL {
            for hand in [Hand::Right, Hand::Left] {
                let Some(tier) = self.gloss_tiers.get(&(hand, signer)) else {
                    continue;
                };
                if tier.participant.is_empty() {
                    continue;
                }
                streams
                    .entry(tier.participant.clone())
                    .or_default()
                    .extend(tier.annotations.iter().cloned());
            }
        }
        for stream in streams.values_mut() {
            stream.sort_by_key(|a| a.begin);
        }
        streams
    }
}

/// Parses a gloss tier id (`GlossR S1`, `GlosL S2`, …) into its channel.
fn gloss_tier_id(id: &str) -> Option<(Hand, Signer)> {
    let rest = id
        .strip_prefix("Gloss")
        .or_else(|| id.strip_prefix("Glos"))?;
    let hand = match rest.chars().next()? {
        'R' => Hand::Right,
        'L' => Hand::Left,
        _ => return None,
    };
    let signer = match rest.get(1..)? {
        " S1" => Signer::S1,
        " S2" => Signer::S2,
        _ => return None,
    };
    Some((hand, signer))
}

/// Basename of a MEDIA_URL, tolerating plain relative paths.
fn media_file_name(media_url: &str) -> String {
    let path = Url::parse(media_url)
        .map(|url| url.path().to_owned())
        .unwrap_or_else(|_| media_url.to_owned());
    path.rsplit('/').next().unwrap_or(&path).to_owned()
}

/// Extracts the participant code from a corpus video basename of the form
/// `CNGT0001_S001_b.mpg`.
fn video_participant(file_name: &str) -> Option<&str> {
    let rest = file_name.strip_prefix("CNGT")?;
    if !rest.get(..4)?.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let rest = rest.get(4..)?.strip_prefix('_')?;
    let code = rest.get(..4)?;
    let mut chars = code.chars();
    if chars.next() != Some('S') || !chars.all(|c| c.is_ascii_digit()) {
        return None;
    }
    (rest.get(4..)? == "_b.mpg").then_some(code)
}
