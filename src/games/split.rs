use crate::evaluation::Evaluation;

/// A showdown result, split between the high and low halves of the pot.
///
/// High-only games leave `low` empty and lowball games leave `high` empty.
/// Qualified lows (`/8` games) also leave `low` empty when nothing qualifies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Split {
    pub high: Option<Evaluation>,
    pub low: Option<Evaluation>,
}

impl Split {
    pub fn high(high: Evaluation) -> Self {
        Self {
            high: Some(high),
            low: None,
        }
    }
    pub fn low(low: Evaluation) -> Self {
        Self {
            high: None,
            low: Some(low),
        }
    }
    /// a NULL low did not qualify and is dropped
    pub fn both(high: Evaluation, low: Evaluation) -> Self {
        Self {
            high: Some(high),
            low: Some(low).filter(|l| !l.is_null()),
        }
    }
}

impl std::fmt::Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.high, self.low) {
            (Some(high), Some(low)) => write!(f, "{:<28}low {}", high.to_string(), low),
            (Some(high), None) => write!(f, "{}", high),
            (None, Some(low)) => write!(f, "{}", low),
            (None, None) => write!(f, "Null"),
        }
    }
}
