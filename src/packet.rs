//! Distress signal packets: nested lists of integers, their parser, and the
//! ordering used to decide whether two packets arrive in the right order.

use crate::error::PacketError;
use itertools::Itertools;
use std::cmp::Ordering;
use std::fmt;
use std::iter::zip;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Packet {Int(u32), List(Vec<Packet>)}

impl Packet {
    /// `[[n]]`, as used for the divider packets.
    pub fn divider(n: u32) -> Packet {
        Packet::List(vec![Packet::List(vec![Packet::Int(n)])])
    }
}

/// Outcome of comparing two packets. `Undecided` means the inputs agree so
/// far and the caller should keep looking at whatever comes next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {Less, Greater, Undecided}

impl Verdict {
    pub fn reverse(self) -> Verdict {
        match self {
            Verdict::Less => Verdict::Greater,
            Verdict::Greater => Verdict::Less,
            Verdict::Undecided => Verdict::Undecided
        }
    }
}

impl From<Ordering> for Verdict {
    fn from(ord: Ordering) -> Verdict {
        match ord {
            Ordering::Less => Verdict::Less,
            Ordering::Greater => Verdict::Greater,
            Ordering::Equal => Verdict::Undecided
        }
    }
}

impl From<Verdict> for Ordering {
    fn from(verdict: Verdict) -> Ordering {
        match verdict {
            Verdict::Less => Ordering::Less,
            Verdict::Greater => Ordering::Greater,
            Verdict::Undecided => Ordering::Equal
        }
    }
}

pub fn compare(left: &Packet, right: &Packet) -> Verdict {
    match (left, right) {
        (Packet::Int(l), Packet::Int(r)) => l.cmp(r).into(),
        (Packet::List(l), Packet::List(r)) => compare_lists(l, r),
        // a lone integer compares like a list holding just that integer
        (Packet::Int(_), Packet::List(r)) => compare_lists(std::slice::from_ref(left), r),
        (Packet::List(l), Packet::Int(_)) => compare_lists(l, std::slice::from_ref(right)),
    }
}

fn compare_lists(left: &[Packet], right: &[Packet]) -> Verdict {
    zip(left, right)
        .map(|(l, r)| compare(l, r))
        .find(|&verdict| verdict != Verdict::Undecided)
        .unwrap_or_else(|| left.len().cmp(&right.len()).into())
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { match self {
        Packet::Int(v) => write!(f, "{}", v),
        Packet::List(items) => write!(f, "[{}]", items.iter().format(","))
    }}
}

impl FromStr for Packet {
    type Err = PacketError;

    fn from_str(s: &str) -> Result<Packet, PacketError> {
        let mut parser = Parser {src: s, pos: 0};
        let packet = parser.packet()?;
        if parser.pos < s.len() {
            return Err(PacketError::TrailingInput {pos: parser.pos});
        }
        Ok(packet)
    }
}

// Only ever steps over ASCII, so `pos` always sits on a char boundary.
struct Parser<'a> {src: &'a str, pos: usize}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {self.src.as_bytes().get(self.pos).copied()}

    fn unexpected(&self) -> PacketError {
        match self.src[self.pos ..].chars().next() {
            Some(found) => PacketError::UnexpectedChar {pos: self.pos, found},
            None => PacketError::UnexpectedEnd {pos: self.pos}
        }
    }

    fn packet(&mut self) -> Result<Packet, PacketError> {
        match self.peek() {
            Some(b'[') => self.list(),
            Some(b'0' ..= b'9') => self.int(),
            _ => Err(self.unexpected())
        }
    }

    fn list(&mut self) -> Result<Packet, PacketError> {
        self.pos += 1;
        let mut items = vec![];
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Packet::List(items));
        }
        loop {
            items.push(self.packet()?);
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    return Ok(Packet::List(items));
                },
                _ => return Err(self.unexpected())
            }
        }
    }

    fn int(&mut self) -> Result<Packet, PacketError> {
        let start = self.pos;
        let mut value = 0u32;
        while let Some(digit @ b'0' ..= b'9') = self.peek() {
            value = value.checked_mul(10)
                .and_then(|v| v.checked_add((digit - b'0') as u32))
                .ok_or(PacketError::IntOverflow {pos: start})?;
            self.pos += 1;
        }
        Ok(Packet::Int(value))
    }
}
