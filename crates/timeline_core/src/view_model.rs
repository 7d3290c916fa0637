use crate::{Accumulator, Payload, Phase};

pub const USER_KEY: &str = "user";
pub const PHOTO_KEY: &str = "photo";
pub const FAVOURITED_KEY: &str = "favourited";

/// Snapshot of the sequence used for status logging.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SequenceViewModel {
    pub phase: Phase,
    pub total_steps: usize,
    pub fetched: usize,
}

/// Number of entries whose top-level object carries `key`.
pub fn count_property(accumulator: &Accumulator, key: &str) -> usize {
    accumulator
        .iter()
        .filter(|payload| payload.has_key(key))
        .count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counters {
    pub tweets: usize,
    pub photos: usize,
    pub favourited: usize,
}

impl Counters {
    pub fn from_accumulator(accumulator: &Accumulator) -> Self {
        Self {
            tweets: count_property(accumulator, USER_KEY),
            photos: count_property(accumulator, PHOTO_KEY),
            favourited: count_property(accumulator, FAVOURITED_KEY),
        }
    }
}

/// An entry lacked a field the timeline needs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed payload at entry {index}: missing string field `{field}`")]
pub struct MalformedPayload {
    pub index: usize,
    pub field: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineRow {
    pub name: String,
    pub handle: String,
    pub message: String,
}

impl TimelineRow {
    pub fn from_payload(index: usize, payload: &Payload) -> Result<Self, MalformedPayload> {
        let text = |path: &[&str], field: &'static str| {
            payload
                .str_at(path)
                .map(ToOwned::to_owned)
                .ok_or(MalformedPayload { index, field })
        };

        Ok(Self {
            name: text(&["user", "name"], "user.name")?,
            handle: format!("@{}", text(&["user", "handle"], "user.handle")?),
            message: text(&["message"], "message")?,
        })
    }
}

/// Everything the presentation sink needs, built in one pass so a malformed
/// entry stops rendering before anything reaches the sink.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PresentationView {
    pub counters: Counters,
    pub rows: Vec<TimelineRow>,
}

impl PresentationView {
    pub fn from_accumulator(accumulator: &Accumulator) -> Result<Self, MalformedPayload> {
        let rows = accumulator
            .iter()
            .enumerate()
            .map(|(index, payload)| TimelineRow::from_payload(index, payload))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            counters: Counters::from_accumulator(accumulator),
            rows,
        })
    }
}
