//! Id generation for newly created records.
//!
//! Ids are opaque strings used only for list-keying and lookup. Generation is an
//! injected capability so callers control uniqueness instead of relying on an
//! ambient clock read.

use crate::projects::Project;

/// Source of fresh record ids.
pub trait IdSource {
    /// Produce the next id. Must not repeat an id this source already produced.
    fn next_id(&mut self) -> String;
}

/// Monotonic counter source.
///
/// Seed it past the ids already live in a document (`seeded_past`) and every id it
/// hands out is unique among them, independent of timing.
#[derive(Debug, Clone)]
pub struct CounterIds {
    next: u64,
}

impl CounterIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Start above the largest numeric id present in `projects`.
    ///
    /// Non-numeric ids (e.g. hand-edited files) are ignored; they can never collide
    /// with the decimal ids this source emits unless they are themselves decimal.
    pub fn seeded_past(projects: &[Project]) -> Self {
        let max = projects
            .iter()
            .filter_map(|p| p.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self { next: max + 1 }
    }
}

impl Default for CounterIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for CounterIds {
    fn next_id(&mut self) -> String {
        let id = self.next.to_string();
        self.next += 1;
        id
    }
}

/// Millisecond wall-clock source, producing ids shaped like the ones in documents
/// written by older builds. Two calls within the same millisecond would collide, so
/// a monotonic floor bumps the value past the previous one.
#[derive(Debug, Clone, Default)]
pub struct WallClockIds {
    last: i64,
}

impl WallClockIds {
    pub fn new() -> Self {
        Self { last: 0 }
    }
}

impl IdSource for WallClockIds {
    fn next_id(&mut self) -> String {
        let now = chrono::Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        self.last.to_string()
    }
}
