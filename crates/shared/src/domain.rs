use serde::{Deserialize, Serialize};

/// Word budget offered by the max-length selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaxLength(pub u32);

impl MaxLength {
    pub const CHOICES: [MaxLength; 3] = [MaxLength(50), MaxLength(100), MaxLength(150)];

    /// Snaps an arbitrary value to the closest selector choice.
    pub fn nearest(value: u32) -> Self {
        Self::CHOICES
            .into_iter()
            .min_by_key(|choice| choice.0.abs_diff(value))
            .unwrap_or_default()
    }

    /// `min(30, floor(max_length * 0.3))`
    pub fn min_length(self) -> u32 {
        (self.0 * 3 / 10).min(30)
    }

    pub fn label(self) -> String {
        format!("{} words", self.0)
    }
}

impl Default for MaxLength {
    fn default() -> Self {
        MaxLength(100)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterTier {
    Normal,
    Warning,
    Alert,
}

impl CounterTier {
    pub const WARNING_AT: usize = 1500;
    pub const ALERT_ABOVE: usize = 1800;

    pub fn for_count(count: usize) -> Self {
        if count > Self::ALERT_ABOVE {
            CounterTier::Alert
        } else if count >= Self::WARNING_AT {
            CounterTier::Warning
        } else {
            CounterTier::Normal
        }
    }
}
