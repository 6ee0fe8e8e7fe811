//! Balanced random group partitioning.
//!
//! # Responsibility
//! - Shuffle a selection and slice it into 2–4 contiguous groups.
//! - Keep group sizing a pure function of `(len, count)`.
//!
//! # Invariants
//! - Output always contains exactly `count.get()` groups.
//! - Group sizes differ by at most one; earlier groups absorb the remainder.
//! - Concatenating groups in order reproduces the shuffled selection.

use crate::model::team::{Group, GroupCount};
use rand::seq::SliceRandom;
use rand::Rng;

/// Returns the size of each group for `len` players split `count` ways.
///
/// The first `len % count` groups receive one extra player.
pub fn group_sizes(len: usize, count: GroupCount) -> Vec<usize> {
    let count = count.get();
    let base = len / count;
    let remainder = len % count;
    (0..count)
        .map(|idx| if idx < remainder { base + 1 } else { base })
        .collect()
}

/// Slices an already shuffled sequence into contiguous groups.
pub fn split_into_groups(shuffled: Vec<String>, count: GroupCount) -> Vec<Group> {
    let sizes = group_sizes(shuffled.len(), count);
    let mut players = shuffled.into_iter();
    sizes
        .into_iter()
        .enumerate()
        .map(|(index, size)| Group::new(index, players.by_ref().take(size).collect()))
        .collect()
}

/// Shuffles `selection` with `rng` and partitions it into `count` groups.
pub fn partition_with_rng<R>(selection: &[String], count: GroupCount, rng: &mut R) -> Vec<Group>
where
    R: Rng + ?Sized,
{
    let mut shuffled = selection.to_vec();
    shuffled.shuffle(rng);
    split_into_groups(shuffled, count)
}

/// Shuffles `selection` with the thread-local RNG and partitions it.
pub fn partition(selection: &[String], count: GroupCount) -> Vec<Group> {
    partition_with_rng(selection, count, &mut rand::thread_rng())
}
