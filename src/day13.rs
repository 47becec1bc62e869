use crate::error::{SignalError, SolveError};
use crate::packet::{compare, Packet, Verdict};
use itertools::Itertools;
use tracing::{debug, warn};

fn parse_pairs(input: &str) -> Result<Vec<(Packet, Packet)>, SignalError> {
    let input = input.replace("\r\n", "\n");
    input.trim().split("\n\n").enumerate().map(|(i, block)| {
        let index = i + 1;
        let lines = block.lines().map(str::trim).filter(|line| !line.is_empty());
        let Some((left, right)) = lines.clone().collect_tuple() else {
            return Err(SignalError::NotAPair {index, found: lines.count()});
        };
        let packet = |line: &str| line.parse::<Packet>().map_err(|source|
            SignalError::Packet {index, source}
        );
        Ok((packet(left)?, packet(right)?))
    }).collect()
}

pub fn right_order_sum(pairs: &[(Packet, Packet)]) -> usize {
    pairs.iter().enumerate().filter_map(|(i, (left, right))| {
        match compare(left, right) {
            Verdict::Less => Some(i + 1),
            Verdict::Greater => None,
            Verdict::Undecided => {
                warn!(pair = i + 1, "packets are identical, counting pair as out of order");
                None
            }
        }
    }).sum()
}

pub fn decoder_key(pairs: Vec<(Packet, Packet)>) -> usize {
    let dividers = [Packet::divider(2), Packet::divider(6)];
    let mut packets = pairs.into_iter()
        .flat_map(|(left, right)| [left, right])
        .chain(dividers.iter().cloned())
        .collect::<Vec<_>>();
    packets.sort_unstable_by(|a, b| compare(a, b).into());

    dividers.iter().map(|divider| {
        let rank = packets.iter().position(|packet| packet == divider).map_or(0, |at| at + 1);
        debug!(%divider, rank, "divider placed");
        rank
    }).product()
}

pub fn solve(part: u8, input: &str) -> Result<String, SolveError> {
    let pairs = parse_pairs(input)?;
    debug!(pairs = pairs.len(), "parsed packet pairs");
    if part == 1 {
        Ok(right_order_sum(&pairs).to_string())
    } else {
        Ok(decoder_key(pairs).to_string())
    }
}
