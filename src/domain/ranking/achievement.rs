//! Podium badges

use serde::Serialize;

/// Badge for the first three positions of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Achievement {
    Gold,
    Silver,
    Bronze,
}

impl Achievement {
    /// Badge for a zero-based rank position
    pub fn from_position(position: usize) -> Option<Self> {
        match position {
            0 => Some(Self::Gold),
            1 => Some(Self::Silver),
            2 => Some(Self::Bronze),
            _ => None,
        }
    }

    /// Classification tag attached to podium cells
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Gold => "cell-gold",
            Self::Silver => "cell-silver",
            Self::Bronze => "cell-bronze",
        }
    }
}

impl std::fmt::Display for Achievement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gold => write!(f, "gold"),
            Self::Silver => write!(f, "silver"),
            Self::Bronze => write!(f, "bronze"),
        }
    }
}
