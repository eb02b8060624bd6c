// ═══════════════════════════════════════════════════════════════════════
// Core types — factions, players, turn phases and the game state
// ═══════════════════════════════════════════════════════════════════════

use crate::board::Board;
use crate::combat::BattleReport;
use crate::error::{CombatError, SelectionError};
use crate::objectives::Objective;
use serde::{Deserialize, Serialize};

// ── Enums ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Red,
    Blue,
}

impl Faction {
    /// Player order: Red is player 1, Blue is player 2.
    pub const ALL: [Faction; 2] = [Faction::Red, Faction::Blue];

    pub fn opponent(self) -> Faction {
        match self {
            Faction::Red => Faction::Blue,
            Faction::Blue => Faction::Red,
        }
    }

    /// Owner of the territory registered at `index` (0-based): colors alternate.
    pub fn for_slot(index: usize) -> Faction {
        Faction::ALL[index % Faction::ALL.len()]
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Faction::Red => write!(f, "RED"),
            Faction::Blue => write!(f, "BLUE"),
        }
    }
}

/// Turn controller states.
///
///   AwaitingSelection → Validating → Resolving → EvaluatingObjectives
///       ↑                   │                         │
///       └── (invalid) ──────┘        AwaitingContinue ←┘ (no winner)
///       └──────────────── (yes) ──────────┘
///
/// Stop, "no" or a completed objective lead to GameOver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    AwaitingSelection,
    Validating,
    Resolving,
    EvaluatingObjectives,
    AwaitingContinue,
    GameOver,
}

// ── Player ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub faction: Faction,
    pub objective: Objective,
}

// ── Selection ──────────────────────────────────────────────────────────

/// An attacker/defender pair as entered by the user (1-based indices).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub attacker: usize,
    pub defender: usize,
}

/// A selection that passed validation (0-based indices).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub attacker: usize,
    pub defender: usize,
}

// ── Pending Decision Types ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingDecision {
    /// Pick attacker and defender, or stop
    SelectBattle,
    /// Attack again after a battle?
    ConfirmContinue,
}

// ── Outcome & Events ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// `player` is the 0-based player index.
    Victory { player: usize },
    NoWinner,
}

/// Narration published for the output side. Drained by the runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    SelectionRejected(SelectionError),
    AttackRefused(CombatError),
    BattleResolved(BattleReport),
    ObjectiveCompleted { player: usize, faction: Faction, objective: Objective },
    GameEnded(Outcome),
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::combat::BattleOutcome;
        match self {
            GameEvent::SelectionRejected(err) => write!(f, "ALERT: {}.", err),
            GameEvent::AttackRefused(err) => write!(f, "WARNING: {}.", err),
            GameEvent::BattleResolved(report) => {
                writeln!(f, "--- BATTLE: {} vs {} ---", report.attacker, report.defender)?;
                writeln!(f, "Attack die: {} | Defense die: {}", report.attack_roll, report.defense_roll)?;
                match report.outcome {
                    BattleOutcome::AttackerWon { transferred } => write!(
                        f,
                        "ATTACKER WINS! {} conquers {} and moves in {} troop(s).",
                        report.attacker, report.defender, transferred
                    ),
                    BattleOutcome::DefenderHeld => write!(
                        f,
                        "DEFENDER HOLDS! {} loses 1 troop.",
                        report.attacker
                    ),
                }
            }
            GameEvent::ObjectiveCompleted { player, faction, objective } => write!(
                f,
                "PLAYER {} ({}) COMPLETED THEIR SECRET OBJECTIVE: '{}'",
                player + 1,
                faction,
                objective
            ),
            GameEvent::GameEnded(Outcome::Victory { player }) => {
                write!(f, "Game over: player {} wins by objective.", player + 1)
            }
            GameEvent::GameEnded(Outcome::NoWinner) => {
                write!(f, "Game over: no player completed their objective.")
            }
        }
    }
}

// ── Game State ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    /// Index order is turn order for objective checks.
    pub players: Vec<Player>,
    pub phase: Phase,

    /// Raw selection waiting for validation.
    pub selection: Option<Selection>,
    /// Validated pair waiting for resolution.
    pub engagement: Option<Engagement>,

    /// Battles actually fought (refused attacks excluded).
    pub battles_fought: u32,

    // Current pending decision the game is waiting on
    pub pending: Option<PendingDecision>,

    pub outcome: Option<Outcome>,

    /// Narration not yet consumed by the runner.
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Player by 0-based index.
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// The winning player, if the game ended on an objective.
    pub fn winner(&self) -> Option<&Player> {
        match self.outcome {
            Some(Outcome::Victory { player }) => self.player(player),
            _ => None,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Take all narration published since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
