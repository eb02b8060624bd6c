use crate::types::Faction;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal problems found while building the initial board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("the board needs at least one territory")]
    EmptyBoard,

    #[error("territory #{index} has an invalid name {name:?} (1-{max} characters, no spaces)")]
    InvalidName { index: usize, name: String, max: usize },

    #[error("territory {name:?} must start with at least 1 troop")]
    NoTroops { name: String },
}

/// Why an attacker/defender pair was turned down. Recovered by re-prompting.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionError {
    #[error("territory #{index} does not exist (choose 1-{len})")]
    OutOfRange { index: usize, len: usize },

    #[error("a territory cannot attack itself")]
    SelfAttack,

    #[error("cannot attack a territory of your own color ({0})")]
    SameFaction(Faction),
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatError {
    #[error("{name} has only {troops} troop and cannot attack")]
    InsufficientTroops { name: String, troops: u32 },
}
