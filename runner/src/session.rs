// ═══════════════════════════════════════════════════════════════════════
// Session — drives one game from first selection to game over
// ═══════════════════════════════════════════════════════════════════════

use anyhow::{bail, Result};
use std::io::Write;
use war_agents::Agent;
use war_engine::board::Board;
use war_engine::combat::Dice;
use war_engine::engine;
use war_engine::types::*;

/// Each player's color and secret objective.
pub fn write_briefing<W: Write>(out: &mut W, state: &GameState) -> Result<()> {
    for (i, player) in state.players.iter().enumerate() {
        writeln!(out, "\n--- PLAYER {} ({}) ---", i + 1, player.faction)?;
        writeln!(out, "Secret objective: {}", player.objective)?;
        writeln!(out, "---------------------------")?;
    }
    Ok(())
}

pub fn write_board<W: Write>(out: &mut W, board: &Board) -> Result<()> {
    writeln!(out, "\n--- CURRENT MAP ---")?;
    for (i, t) in board.iter().enumerate() {
        writeln!(out, "#{}. Name: {} | Color: {} | Troops: {}", i + 1, t.name, t.owner, t.troops)?;
    }
    writeln!(out, "-------------------")?;
    Ok(())
}

fn write_final<W: Write>(out: &mut W, state: &GameState) -> Result<()> {
    match state.outcome {
        Some(Outcome::Victory { player }) => {
            let Some(p) = state.player(player) else {
                bail!("winning player {} does not exist", player + 1);
            };
            writeln!(out, "\n=======================================================")?;
            writeln!(out, "!!! VICTORY BY OBJECTIVE !!!")?;
            writeln!(out, "PLAYER {} ({}) COMPLETED THEIR SECRET OBJECTIVE:", player + 1, p.faction)?;
            writeln!(out, " '{}'", p.objective)?;
            writeln!(out, "=======================================================")?;
        }
        Some(Outcome::NoWinner) | None => {
            writeln!(out, "\nEnd of simulation. No player completed their objective.")?;
        }
    }
    Ok(())
}

fn write_events<W: Write>(out: &mut W, state: &mut GameState) -> Result<()> {
    for event in state.drain_events() {
        // The final banner covers these
        if matches!(event, GameEvent::GameEnded(_) | GameEvent::ObjectiveCompleted { .. }) {
            continue;
        }
        writeln!(out, "\n{}", event)?;
    }
    Ok(())
}

/// Run the game until it ends, asking `agent` for every decision.
pub fn run_session<A, D, W>(
    state: &mut GameState,
    agent: &mut A,
    dice: &mut D,
    out: &mut W,
) -> Result<Outcome>
where
    A: Agent + ?Sized,
    D: Dice + ?Sized,
    W: Write,
{
    tracing::info!(agent = agent.name(), territories = state.board.len(), "session started");

    loop {
        engine::advance(state, dice);
        write_events(out, state)?;

        if state.is_over() {
            write_final(out, state)?;
            out.flush()?;
            return match state.outcome {
                Some(outcome) => Ok(outcome),
                None => bail!("game ended without an outcome"),
            };
        }

        let Some(pending) = state.pending else {
            bail!("game stuck: phase={:?} with nothing pending", state.phase);
        };

        if pending == PendingDecision::SelectBattle {
            writeln!(out, "\n\n=============== ATTACK TURN ===============")?;
            write_board(out, &state.board)?;
        }
        out.flush()?;

        let action = agent.decide(pending, &state.board)?;
        tracing::debug!(?pending, ?action, "agent answered");
        engine::apply_action(state, action, dice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use war_agents::{ScriptedAgent, TerminalAgent};
    use war_engine::board::TerritorySpec;
    use war_engine::combat::LoadedDice;
    use war_engine::engine::Action;
    use war_engine::objectives::CATALOG;
    use war_engine::setup::create_state_with_objectives;

    fn new_state(objectives: [war_engine::Objective; 2]) -> GameState {
        create_state_with_objectives(
            vec![TerritorySpec::new("Alaska", 6), TerritorySpec::new("Brazil", 3)],
            objectives,
        )
        .unwrap()
    }

    fn play(state: &mut GameState, agent: &mut impl Agent, dice: &mut LoadedDice) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = run_session(state, agent, dice, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_stop_immediately() {
        let mut state = new_state([CATALOG[3], CATALOG[3]]);
        let mut agent = ScriptedAgent::new([Action::Stop]);
        let (outcome, out) = play(&mut state, &mut agent, &mut LoadedDice::default());
        assert_eq!(outcome, Outcome::NoWinner);
        assert!(out.contains("#1. Name: Alaska | Color: RED | Troops: 6"));
        assert!(out.contains("#2. Name: Brazil | Color: BLUE | Troops: 3"));
        assert!(out.contains("No player completed their objective"));
    }

    #[test]
    fn test_battle_then_quit() {
        let mut state = new_state([CATALOG[3], CATALOG[3]]);
        let mut agent = ScriptedAgent::new([Action::attack(1, 2), Action::Continue(false)]);
        let (outcome, out) = play(&mut state, &mut agent, &mut LoadedDice::battle(2, 5));
        assert_eq!(outcome, Outcome::NoWinner);
        assert!(out.contains("--- BATTLE: Alaska vs Brazil ---"));
        assert!(out.contains("Attack die: 2 | Defense die: 5"));
        assert!(out.contains("DEFENDER HOLDS! Alaska loses 1 troop."));
        assert_eq!(state.board.get(0).unwrap().troops, 5);
    }

    #[test]
    fn test_victory_banner() {
        let mut state = new_state([CATALOG[1], CATALOG[3]]);
        let mut agent = ScriptedAgent::new([Action::attack(1, 2)]);
        let (outcome, out) = play(&mut state, &mut agent, &mut LoadedDice::battle(6, 1));
        assert_eq!(outcome, Outcome::Victory { player: 0 });
        assert!(out.contains("VICTORY BY OBJECTIVE"));
        assert!(out.contains("PLAYER 1 (RED)"));
        assert!(out.contains(CATALOG[1].description()));
        assert_eq!(agent.remaining(), 0);
    }

    #[test]
    fn test_alert_then_retry() {
        let mut state = new_state([CATALOG[3], CATALOG[3]]);
        let mut agent = ScriptedAgent::new([Action::attack(2, 2), Action::Stop]);
        let (_, out) = play(&mut state, &mut agent, &mut LoadedDice::default());
        assert!(out.contains("ALERT: a territory cannot attack itself."));
        assert_eq!(out.matches("ATTACK TURN").count(), 2);
    }

    #[test]
    fn test_terminal_agent_session() {
        let mut state = new_state([CATALOG[3], CATALOG[3]]);
        let input = "1\n2\ny\n2\n1\n0\n";
        let mut agent = TerminalAgent::new(std::io::Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let (outcome, _) = play(&mut state, &mut agent, &mut LoadedDice::new([6, 1, 1, 6]));
        assert_eq!(outcome, Outcome::NoWinner);
        // Alaska took Brazil, then Brazil (now RED) could not attack Alaska
        assert_eq!(state.battles_fought, 1);
        assert_eq!(state.board.get(1).unwrap().owner, Faction::Red);
    }

    #[test]
    fn test_script_file_session() {
        let mut state = new_state([CATALOG[3], CATALOG[3]]);
        let mut agent = ScriptedAgent::parse("1 2\ns\n2 1\nn\n").unwrap();
        let mut boxed: Box<dyn Agent> = Box::new(agent.clone());
        let (outcome, out) = play(&mut state, &mut agent, &mut LoadedDice::new([2, 5, 2, 5]));
        assert_eq!(outcome, Outcome::NoWinner);
        assert_eq!(state.battles_fought, 2);
        assert_eq!(out.matches("DEFENDER HOLDS!").count(), 2);
        assert_eq!(agent.remaining(), 0);

        let mut state = new_state([CATALOG[3], CATALOG[3]]);
        let mut dice = LoadedDice::new([2, 5, 2, 5]);
        let outcome = run_session(&mut state, boxed.as_mut(), &mut dice, &mut Vec::<u8>::new()).unwrap();
        assert_eq!(outcome, Outcome::NoWinner);
        assert_eq!(state.battles_fought, 2);
    }

    #[test]
    fn test_briefing_lists_both_players() {
        let state = new_state([CATALOG[0], CATALOG[4]]);
        let mut out = Vec::new();
        write_briefing(&mut out, &state).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("PLAYER 1 (RED)"));
        assert!(out.contains("PLAYER 2 (BLUE)"));
        assert!(out.contains(CATALOG[4].description()));
    }
}
