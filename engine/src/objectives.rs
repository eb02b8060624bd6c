// ═══════════════════════════════════════════════════════════════════════
// Secret objectives — the five-entry catalog and its win predicates.
// ═══════════════════════════════════════════════════════════════════════

use crate::board::Board;
use crate::types::Faction;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Objective {
    /// Own at least `count` territories, every one of them holding `min_troops`+.
    HoldTerritories { count: usize, min_troops: u32 },
    /// Wipe out every troop of `target`. Only `target`'s opponent can complete it.
    EliminateFaction { target: Faction },
    /// Own at least `numerator / denominator` of the board.
    ControlShare { numerator: usize, denominator: usize },
    /// Conquer `count` territories in a row within one round.
    /// Conquest streaks are not tracked, so this is never satisfied.
    ConsecutiveConquests { count: usize },
    /// Own a strict majority of the board with no enemy troops left.
    MajorityAndElimination,
}

pub const CATALOG: [Objective; 5] = [
    Objective::HoldTerritories { count: 6, min_troops: 2 },
    Objective::EliminateFaction { target: Faction::Blue },
    Objective::ControlShare { numerator: 7, denominator: 10 },
    Objective::ConsecutiveConquests { count: 3 },
    Objective::MajorityAndElimination,
];

/// Per-faction figures every objective is judged on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardTally {
    pub total: usize,
    pub owned: usize,
    pub enemy_troops: u64,
}

impl BoardTally {
    pub fn new(board: &Board, faction: Faction) -> Self {
        BoardTally {
            total: board.len(),
            owned: board.owned_count(faction),
            enemy_troops: board.troops_of(faction.opponent()),
        }
    }
}

impl Objective {
    /// Pick one catalog entry uniformly. Players may end up with the same one.
    pub fn draw(rng: &mut impl Rng) -> Objective {
        CATALOG[rng.gen_range(0..CATALOG.len())]
    }

    /// The text shown to the player.
    pub fn description(&self) -> &'static str {
        match self {
            Objective::HoldTerritories { .. } => {
                "Dominate 6 territories and keep at least 2 troops in each."
            }
            Objective::EliminateFaction { target: Faction::Blue } => "Eliminate every BLUE troop.",
            Objective::EliminateFaction { target: Faction::Red } => "Eliminate every RED troop.",
            Objective::ControlShare { .. } => "Dominate 10 territories in total.",
            Objective::ConsecutiveConquests { .. } => {
                "Conquer 3 territories in a row in the same round."
            }
            Objective::MajorityAndElimination => {
                "Hold more than half of the territories with every enemy troop eliminated."
            }
        }
    }

    pub fn is_satisfied(&self, board: &Board, faction: Faction) -> bool {
        let tally = BoardTally::new(board, faction);
        match *self {
            Objective::HoldTerritories { count, min_troops } => {
                tally.owned >= count
                    && board.territories_of(faction).all(|t| t.troops >= min_troops)
            }
            Objective::EliminateFaction { target } => {
                faction == target.opponent() && tally.enemy_troops == 0
            }
            Objective::ControlShare { numerator, denominator } => {
                tally.owned * denominator >= tally.total * numerator
            }
            Objective::ConsecutiveConquests { .. } => false,
            Objective::MajorityAndElimination => {
                tally.owned > tally.total / 2 && tally.enemy_troops == 0
            }
        }
    }
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
