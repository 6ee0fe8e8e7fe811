//! Team randomizer domain model.
//!
//! # Responsibility
//! - Define the group count choice and its normalization policy.
//! - Define labelled groups and allocation results.
//!
//! # Invariants
//! - `GroupCount` is always one of 2, 3 or 4.
//! - Unknown counts and labels normalize to `GroupCount::Two`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const GROUP_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];
const PLAYER_SEPARATOR: &str = ", ";

/// Number of groups an allocation produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "usize", from = "usize")]
pub enum GroupCount {
    #[default]
    Two,
    Three,
    Four,
}

impl GroupCount {
    /// Returns the numeric group count.
    pub fn get(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Normalizes an arbitrary count; values outside 2..=4 become `Two`.
    pub fn normalize(value: usize) -> Self {
        match value {
            3 => Self::Three,
            4 => Self::Four,
            _ => Self::Two,
        }
    }

    /// Parses a user-facing label.
    ///
    /// Accepts digits, English words and the classification labels used by
    /// the mobile picker. Anything else falls back to `Two`.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        if let Ok(value) = trimmed.parse::<usize>() {
            return Self::normalize(value);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "three" | "三分类" => Self::Three,
            "four" | "四分类" => Self::Four,
            _ => Self::Two,
        }
    }
}

impl From<usize> for GroupCount {
    fn from(value: usize) -> Self {
        Self::normalize(value)
    }
}

impl From<GroupCount> for usize {
    fn from(value: GroupCount) -> Self {
        value.get()
    }
}

/// One labelled partition of the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    /// `A` for the first group, `B` for the second, and so on.
    pub label: char,
    pub players: Vec<String>,
}

impl Group {
    /// Creates the group at position `index` (0-based).
    ///
    /// Indexes past the label table reuse the last label; callers only build
    /// up to four groups.
    pub fn new(index: usize, players: Vec<String>) -> Self {
        let label = GROUP_LABELS
            .get(index)
            .copied()
            .unwrap_or(GROUP_LABELS[GROUP_LABELS.len() - 1]);
        Self { label, players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Group {}: {}",
            self.label,
            self.players.join(PLAYER_SEPARATOR)
        )
    }
}

/// Result of one allocation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    pub group_count: GroupCount,
    pub groups: Vec<Group>,
}

impl Allocation {
    /// Total number of allocated players.
    pub fn player_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Group sizes in group order.
    pub fn sizes(&self) -> Vec<usize> {
        self.groups.iter().map(Group::len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Group, GroupCount};

    #[test]
    fn normalize_falls_back_to_two() {
        assert_eq!(GroupCount::normalize(3), GroupCount::Three);
        assert_eq!(GroupCount::normalize(4), GroupCount::Four);
        assert_eq!(GroupCount::normalize(0), GroupCount::Two);
        assert_eq!(GroupCount::normalize(7), GroupCount::Two);
    }

    #[test]
    fn from_label_accepts_digits_words_and_picker_labels() {
        assert_eq!(GroupCount::from_label(" 4 "), GroupCount::Four);
        assert_eq!(GroupCount::from_label("Three"), GroupCount::Three);
        assert_eq!(GroupCount::from_label("二分类"), GroupCount::Two);
        assert_eq!(GroupCount::from_label("三分类"), GroupCount::Three);
        assert_eq!(GroupCount::from_label("四分类"), GroupCount::Four);
        assert_eq!(GroupCount::from_label("lots"), GroupCount::Two);
    }

    #[test]
    fn group_display_joins_players() {
        let group = Group::new(2, vec!["7".to_string(), "3".to_string()]);
        assert_eq!(group.to_string(), "Group C: 7, 3");
    }
}
