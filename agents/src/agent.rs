// ═══════════════════════════════════════════════════════════════════════
// Agent Trait — where the engine's pending decisions get answered.
//
// The engine never reads input itself. Whoever drives the game (a person
// at a terminal, a replayed script) implements this trait and is asked
// one question per pending decision.
// ═══════════════════════════════════════════════════════════════════════

use crate::error::Result;
use war_engine::board::Board;
use war_engine::engine::Action;
use war_engine::types::PendingDecision;

pub trait Agent {
    /// Human-readable name for this agent.
    fn name(&self) -> &str;

    /// Answer a pending decision. Dispatches to the specific methods below.
    fn decide(&mut self, pending: PendingDecision, board: &Board) -> Result<Action> {
        match pending {
            PendingDecision::SelectBattle => Ok(match self.select_battle(board)? {
                Some((attacker, defender)) => Action::attack(attacker, defender),
                None => Action::Stop,
            }),
            PendingDecision::ConfirmContinue => Ok(Action::Continue(self.attack_again(board)?)),
        }
    }

    /// 1-based (attacker, defender) territory numbers. None = stop attacking.
    fn select_battle(&mut self, board: &Board) -> Result<Option<(usize, usize)>>;

    /// Whether to attack again after a battle.
    fn attack_again(&mut self, board: &Board) -> Result<bool>;
}
