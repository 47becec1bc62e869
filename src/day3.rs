use crate::error::{RucksackError, SolveError};
use bitvec::prelude::*;
use itertools::Itertools;
use tracing::debug;

type Items = BitArr!(for 53, in u64);

fn priority(item: u8) -> Option<usize> {
    match item {
        b'a' ..= b'z' => Some((item - b'a' + 1) as usize),
        b'A' ..= b'Z' => Some((item - b'A' + 27) as usize),
        _ => None
    }
}

fn items(line: usize, rucksack: &[u8]) -> Result<Items, RucksackError> {
    let mut set = bitarr![u64, Lsb0; 0; 53];
    for &item in rucksack {
        let prio = priority(item).ok_or(RucksackError::InvalidItem {line, item: item as char})?;
        set.set(prio, true);
    }
    Ok(set)
}

/// Lowest priority present in every set, if any.
fn shared(sets: &[Items]) -> Option<usize> {
    let (first, rest) = sets.split_first()?;
    let common = rest.iter().fold(*first, |mut acc, set| {
        acc &= set.as_bitslice();
        acc
    });
    common.first_one()
}

pub fn solve(part: u8, input: &str) -> Result<String, SolveError> {
    let rucksacks = input.lines().map(str::trim).enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| (i + 1, line.as_bytes()))
        .collect::<Vec<_>>();
    debug!(rucksacks = rucksacks.len(), "read rucksacks");

    let total = if part == 1 {
        rucksacks.iter().map(|&(line, rucksack)| {
            if rucksack.len() % 2 != 0 {
                return Err(RucksackError::OddLength {line});
            }
            let (left, right) = rucksack.split_at(rucksack.len() / 2);
            shared(&[items(line, left)?, items(line, right)?])
                .ok_or(RucksackError::NoSharedItem {line})
        }).sum::<Result<usize, _>>()?
    } else {
        if rucksacks.len() % 3 != 0 {
            return Err(RucksackError::IncompleteGroup {count: rucksacks.len()}.into());
        }
        rucksacks.iter().tuples().map(|(&(line, a), &(line_b, b), &(line_c, c))| {
            shared(&[items(line, a)?, items(line_b, b)?, items(line_c, c)?])
                .ok_or(RucksackError::NoBadge {line})
        }).sum::<Result<usize, _>>()?
    };
    Ok(total.to_string())
}
