//! Couple pairing for heats of two

use super::RosterEntry;
use crate::models::Gender;

/// Reorder a roster so consecutive pairs are male/female couples.
///
/// Output order: `m1, f1, m2, f2, ...`, then the unpaired rest of the
/// larger gender, then participants without a gender. Relative input
/// order is kept inside every group.
pub fn pair_couples(roster: &[RosterEntry]) -> Vec<RosterEntry> {
    let (mut male, mut female, mut other) = (Vec::new(), Vec::new(), Vec::new());
    for entry in roster {
        match entry.gender {
            Some(Gender::Male) => male.push(*entry),
            Some(Gender::Female) => female.push(*entry),
            None => other.push(*entry),
        }
    }

    let pairs = male.len().min(female.len());
    let mut ordered = Vec::with_capacity(roster.len());
    for (man, woman) in male.iter().zip(female.iter()) {
        ordered.push(*man);
        ordered.push(*woman);
    }

    ordered.extend(male.drain(pairs..));
    ordered.extend(female.drain(pairs..));
    ordered.append(&mut other);
    ordered
}
