use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::builder::LockImageBuilder;
use crate::donor::DonorPool;
use crate::error::{LockError, LockResult};
use crate::hide::{Algorithm, NUM_ALGORITHMS};

// Lock list
//------------------------------------------------------------------------------

/// One named lock and its code, as read from a lock list row.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Lock {
    pub name: String,
    pub code: String,
}

impl Lock {
    /// The grouping key: the first character of the lock name.
    pub fn group(&self) -> char {
        // Parsing rejects empty names, see parse_lock_list.
        self.name.chars().next().unwrap_or('?')
    }
}

/// Parses a tab-separated lock list: a header line followed by
/// `name<TAB>code` rows. Blank lines are skipped; anything else malformed is
/// an error, never silently dropped.
pub fn parse_lock_list(text: &str) -> LockResult<Vec<Lock>> {
    let mut lines = text.lines();
    if lines.next().is_none() {
        return Err(LockError::BadLockList("missing header line".into()));
    }

    let mut locks = Vec::new();
    for (i, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = i + 2;
        let (name, code) = line
            .split_once('\t')
            .ok_or_else(|| LockError::BadLockList(format!("line {row}: expected name<TAB>code")))?;
        if name.is_empty() {
            return Err(LockError::BadLockList(format!("line {row}: empty lock name")));
        }
        locks.push(Lock { name: name.to_string(), code: code.to_string() });
    }
    Ok(locks)
}

/// Partitions locks by group key, in stable key order.
pub fn group_locks(locks: Vec<Lock>) -> BTreeMap<char, Vec<Lock>> {
    let mut groups: BTreeMap<char, Vec<Lock>> = BTreeMap::new();
    for lock in locks {
        groups.entry(lock.group()).or_default().push(lock);
    }
    groups
}

// Batch generation
//------------------------------------------------------------------------------

/// A random ordering of the full algorithm set, assigned to the members of one
/// group in sequence so no algorithm repeats within the group.
pub fn shuffled_algorithms(rng: &mut impl Rng) -> [Algorithm; NUM_ALGORITHMS as usize] {
    let mut algorithms = Algorithm::ALL;
    algorithms.shuffle(rng);
    algorithms
}

/// Generates one image per lock. Per group a fresh algorithm permutation is
/// drawn and assigned member by member; groups larger than the algorithm set
/// are rejected. Each image is a single-slot 200x150 canvas captioned
/// `name-code` and saved as `{group}{5 random digits}.png` under `out_dir`.
///
/// A save failure is reported on stderr and skips only that lock; donor pool
/// failures abort the whole run.
pub fn run_batch(
    locks: Vec<Lock>,
    donors: &DonorPool,
    out_dir: impl AsRef<Path>,
    rng: &mut impl Rng,
) -> LockResult<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    let mut written = Vec::new();

    for (group, members) in group_locks(locks) {
        if members.len() > Algorithm::ALL.len() {
            return Err(LockError::GroupTooLarge { group, size: members.len() });
        }
        let algorithms = shuffled_algorithms(rng);

        for (lock, algorithm) in members.iter().zip(algorithms) {
            let mut img =
                LockImageBuilder::new(format!("{}-{}", lock.name, lock.code)).build()?;
            img.apply(algorithm, 0, donors, rng)?;

            let path = out_dir.join(format!("{group}{:05}.png", rng.random_range(0..99999)));
            match img.save(&path) {
                Ok(()) => written.push(path),
                Err(e) => eprintln!("{e}"),
            }
        }
    }
    Ok(written)
}
