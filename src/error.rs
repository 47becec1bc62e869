use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PacketError {
    #[error("unexpected '{found}' at offset {pos}")]
    UnexpectedChar { pos: usize, found: char },

    #[error("packet ends early at offset {pos}")]
    UnexpectedEnd { pos: usize },

    #[error("trailing input after packet at offset {pos}")]
    TrailingInput { pos: usize },

    #[error("integer at offset {pos} does not fit in 32 bits")]
    IntOverflow { pos: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RucksackError {
    #[error("line {line}: odd number of items, cannot split into compartments")]
    OddLength { line: usize },

    #[error("line {line}: '{item}' is not an item")]
    InvalidItem { line: usize, item: char },

    #[error("line {line}: compartments share no item")]
    NoSharedItem { line: usize },

    #[error("group starting at line {line}: no badge common to all three")]
    NoBadge { line: usize },

    #[error("{count} rucksacks cannot be split into groups of three")]
    IncompleteGroup { count: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    #[error("pair {index}: expected two packets, found {found}")]
    NotAPair { index: usize, found: usize },

    #[error("pair {index}: {source}")]
    Packet {
        index: usize,
        #[source]
        source: PacketError,
    },
}

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("no solution for day {0}")]
    UnknownDay(u8),

    #[error(transparent)]
    Rucksack(#[from] RucksackError),

    #[error(transparent)]
    Signal(#[from] SignalError),
}
