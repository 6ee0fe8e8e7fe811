//! Team allocation board.
//!
//! # Responsibility
//! - Hold roster, selection, group count and the last allocation as one
//!   explicit value owned by the caller.
//! - Validate the selection before delegating to the partitioner.
//!
//! # Invariants
//! - The selection is a sub-multiset of the roster.
//! - `allocate` never partitions an empty selection.
//! - Each allocation is computed from scratch; the previous one is replaced.

use crate::model::team::{Allocation, GroupCount};
use crate::partition::partition_with_rng;
use log::info;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

static PLAYER_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;\s]+").expect("valid separator regex"));

const DEFAULT_ROSTER_SIZE: usize = 9;

/// Validation error raised before any partitioning happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    /// No players are selected.
    EmptySelection,
    /// A selected player is missing from the roster, or selected more often
    /// than the roster lists them.
    UnknownPlayer(String),
}

impl Display for TeamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySelection => write!(f, "Select players before allocating teams"),
            Self::UnknownPlayer(name) => {
                write!(f, "player `{name}` is not on the roster often enough")
            }
        }
    }
}

impl Error for TeamError {}

/// Roster and allocation state for one randomizer screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamBoard {
    roster: Vec<String>,
    selection: Vec<String>,
    group_count: GroupCount,
    allocation: Option<Allocation>,
}

impl Default for TeamBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamBoard {
    /// Creates a board with the default roster `"1"..="9"` and a two-way split.
    pub fn new() -> Self {
        Self::with_roster((1..=DEFAULT_ROSTER_SIZE).map(|idx| idx.to_string()).collect())
    }

    pub fn with_roster(roster: Vec<String>) -> Self {
        Self {
            roster,
            selection: Vec::new(),
            group_count: GroupCount::default(),
            allocation: None,
        }
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    pub fn group_count(&self) -> GroupCount {
        self.group_count
    }

    /// Last allocation, if `allocate` has succeeded at least once.
    pub fn allocation(&self) -> Option<&Allocation> {
        self.allocation.as_ref()
    }

    /// Replaces the whole roster.
    ///
    /// Selected entries the new roster can no longer cover are dropped, later
    /// duplicates first, and the previous allocation is discarded.
    pub fn replace_roster(&mut self, roster: Vec<String>) {
        self.roster = roster;
        let mut available = roster_counts(&self.roster);
        self.selection
            .retain(|player| take_one(&mut available, player.as_str()));
        self.allocation = None;
    }

    /// Replaces the selection.
    ///
    /// Each name may be selected at most as many times as it appears on the
    /// roster.
    ///
    /// # Errors
    /// - `UnknownPlayer` for the first entry the roster cannot cover; the
    ///   current selection is left untouched.
    pub fn select(&mut self, players: Vec<String>) -> Result<(), TeamError> {
        let mut available = roster_counts(&self.roster);
        if let Some(uncovered) = players
            .iter()
            .find(|player| !take_one(&mut available, player.as_str()))
        {
            return Err(TeamError::UnknownPlayer(uncovered.clone()));
        }
        self.selection = players;
        Ok(())
    }

    pub fn select_all(&mut self) {
        self.selection = self.roster.clone();
    }

    pub fn set_group_count(&mut self, count: GroupCount) {
        self.group_count = count;
    }

    /// Number of group rows a view should show.
    ///
    /// Follows the chosen count until the first allocation, then sticks to the
    /// count of the last allocation.
    pub fn visible_group_slots(&self) -> usize {
        match &self.allocation {
            Some(allocation) => allocation.group_count.get(),
            None => self.group_count.get(),
        }
    }

    /// Shuffles the selection and splits it into the chosen number of groups.
    ///
    /// # Errors
    /// - `EmptySelection` when nothing is selected.
    pub fn allocate<R>(&mut self, rng: &mut R) -> Result<&Allocation, TeamError>
    where
        R: Rng + ?Sized,
    {
        if self.selection.is_empty() {
            info!("event=teams_allocate module=service status=rejected reason=empty_selection");
            return Err(TeamError::EmptySelection);
        }

        let groups = partition_with_rng(&self.selection, self.group_count, rng);
        let allocation = Allocation {
            group_count: self.group_count,
            groups,
        };
        info!(
            "event=teams_allocate module=service status=ok players={} groups={} sizes={:?}",
            allocation.player_count(),
            allocation.group_count.get(),
            allocation.sizes()
        );
        Ok(self.allocation.insert(allocation))
    }
}

fn roster_counts(roster: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for player in roster {
        *counts.entry(player.as_str()).or_default() += 1;
    }
    counts
}

// Consumes one roster slot for `player`; false when none is left.
fn take_one(available: &mut HashMap<&str, usize>, player: &str) -> bool {
    match available.get_mut(player) {
        Some(remaining) if *remaining > 0 => {
            *remaining -= 1;
            true
        }
        _ => false,
    }
}

/// Splits a free-form player list on commas, semicolons and whitespace.
///
/// Empty fragments are dropped; duplicates are kept.
pub fn parse_player_list(input: &str) -> Vec<String> {
    PLAYER_SEPARATOR_RE
        .split(input)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}
