// ═══════════════════════════════════════════════════════════════════════
// Game Engine — turn controller
//
// Architecture:
//   The engine is a pure state machine. It never does I/O or talks to the
//   user. It sets `state.pending` to describe what it needs next, the
//   runner asks an agent, and the answer comes back via `apply_action()`.
//   Everything the user should be told is pushed onto `state.events`.
//
// Flow:
//   1. Runner calls `advance()`; engine stops at SelectBattle
//   2. Agent answers with Attack / Stop
//   3. Engine validates, resolves the battle, checks every objective
//   4. Engine stops at ConfirmContinue (or GameOver on a winner)
//   5. Repeat until state.phase is GameOver
// ═══════════════════════════════════════════════════════════════════════

use crate::combat::{self, Dice};
use crate::error::SelectionError;
use crate::types::*;
use crate::board::Board;

/// Answers agents can submit to resolve pending decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Attack using 1-based territory numbers. An attacker of 0 means stop.
    Attack(Selection),

    /// Stop attacking; the game ends without a winner
    Stop,

    /// Answer to "attack again?"
    Continue(bool),
}

impl Action {
    pub fn attack(attacker: usize, defender: usize) -> Self {
        Action::Attack(Selection { attacker, defender })
    }
}

/// Advance the game state through automatic phases until a decision is
/// needed (sets state.pending) or the game ends.
pub fn advance<D: Dice + ?Sized>(state: &mut GameState, dice: &mut D) {
    if state.pending.is_some() || state.is_over() {
        return;
    }

    loop {
        tracing::trace!(phase = ?state.phase, "advance");
        match state.phase {
            Phase::AwaitingSelection => {
                state.pending = Some(PendingDecision::SelectBattle);
                return;
            }
            Phase::Validating => validate_pending_selection(state),
            Phase::Resolving => resolve_engagement(state, dice),
            Phase::EvaluatingObjectives => evaluate_objectives(state),
            Phase::AwaitingContinue => {
                state.pending = Some(PendingDecision::ConfirmContinue);
                return;
            }
            Phase::GameOver => return,
        }
    }
}

/// Apply an agent's answer to the pending decision, then advance.
/// An answer that doesn't fit the pending decision is ignored.
pub fn apply_action<D: Dice + ?Sized>(state: &mut GameState, action: Action, dice: &mut D) {
    let Some(pending) = state.pending.take() else {
        return; // No pending decision
    };

    match (pending, action) {
        (PendingDecision::SelectBattle, Action::Stop) => finish(state, Outcome::NoWinner),

        (PendingDecision::SelectBattle, Action::Attack(selection)) => {
            if selection.attacker == 0 {
                finish(state, Outcome::NoWinner);
            } else {
                state.selection = Some(selection);
                state.phase = Phase::Validating;
            }
        }

        (PendingDecision::ConfirmContinue, Action::Continue(true)) => {
            state.phase = Phase::AwaitingSelection;
        }

        // Anything but an explicit "yes" ends the game
        (PendingDecision::ConfirmContinue, _) => finish(state, Outcome::NoWinner),

        (pending, action) => {
            tracing::warn!(?pending, ?action, "action does not answer the pending decision");
            state.pending = Some(pending);
            return;
        }
    }

    advance(state, dice);
}

/// Check a 1-based selection against the board. Range and self-attack are
/// checked before ownership.
pub fn validate_selection(board: &Board, selection: Selection) -> Result<Engagement, SelectionError> {
    let len = board.len();
    for index in [selection.attacker, selection.defender] {
        if index == 0 || index > len {
            return Err(SelectionError::OutOfRange { index, len });
        }
    }
    if selection.attacker == selection.defender {
        return Err(SelectionError::SelfAttack);
    }

    let attacker = selection.attacker - 1;
    let defender = selection.defender - 1;
    match (board.get(attacker), board.get(defender)) {
        (Some(a), Some(d)) if a.owner == d.owner => Err(SelectionError::SameFaction(a.owner)),
        (Some(_), Some(_)) => Ok(Engagement { attacker, defender }),
        _ => Err(SelectionError::OutOfRange { index: selection.attacker.max(selection.defender), len }),
    }
}

// ── Phase handlers ─────────────────────────────────────────────────────

fn validate_pending_selection(state: &mut GameState) {
    let Some(selection) = state.selection.take() else {
        state.phase = Phase::AwaitingSelection;
        return;
    };

    match validate_selection(&state.board, selection) {
        Ok(engagement) => {
            state.engagement = Some(engagement);
            state.phase = Phase::Resolving;
        }
        Err(err) => {
            tracing::info!(?selection, %err, "selection rejected");
            state.events.push(GameEvent::SelectionRejected(err));
            state.phase = Phase::AwaitingSelection;
        }
    }
}

fn resolve_engagement<D: Dice + ?Sized>(state: &mut GameState, dice: &mut D) {
    let Some(engagement) = state.engagement.take() else {
        state.phase = Phase::AwaitingSelection;
        return;
    };
    let Some((attacker, defender)) = state.board.pair_mut(engagement.attacker, engagement.defender) else {
        state.phase = Phase::AwaitingSelection;
        return;
    };

    match combat::resolve(attacker, defender, dice) {
        Ok(report) => {
            state.battles_fought += 1;
            state.events.push(GameEvent::BattleResolved(report));
        }
        Err(err) => {
            tracing::info!(%err, "attack refused");
            state.events.push(GameEvent::AttackRefused(err));
        }
    }
    state.phase = Phase::EvaluatingObjectives;
}

fn evaluate_objectives(state: &mut GameState) {
    let winner = state.players.iter()
        .enumerate()
        .find(|(_, p)| p.objective.is_satisfied(&state.board, p.faction))
        .map(|(i, p)| (i, *p));

    match winner {
        Some((player, p)) => {
            state.events.push(GameEvent::ObjectiveCompleted {
                player,
                faction: p.faction,
                objective: p.objective,
            });
            finish(state, Outcome::Victory { player });
        }
        None => state.phase = Phase::AwaitingContinue,
    }
}

fn finish(state: &mut GameState, outcome: Outcome) {
    tracing::debug!(?outcome, battles = state.battles_fought, "game over");
    state.selection = None;
    state.engagement = None;
    state.pending = None;
    state.outcome = Some(outcome);
    state.phase = Phase::GameOver;
    state.events.push(GameEvent::GameEnded(outcome));
}
