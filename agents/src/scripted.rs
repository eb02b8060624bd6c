// ═══════════════════════════════════════════════════════════════════════
// Scripted Agent — answers from a prepared queue, then stops.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::Agent;
use crate::error::{InputError, Result};
use crate::prompt::parse_number;
use std::collections::VecDeque;
use std::io::BufRead;
use war_engine::board::Board;
use war_engine::engine::Action;

#[derive(Debug, Clone, Default)]
pub struct ScriptedAgent {
    script: VecDeque<Action>,
}

impl ScriptedAgent {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        ScriptedAgent { script: actions.into_iter().collect() }
    }

    /// Build a script from text, one answer per line:
    ///
    /// - `A D`: attack territory D from territory A (1-based)
    /// - `0`: stop
    /// - `s` or `y`: attack again
    /// - `n`: end the game
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut script = VecDeque::new();
        for (i, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let action = parse_script_line(line).ok_or_else(|| InputError::Script {
                line: i + 1,
                text: line.to_string(),
            })?;
            script.push_back(action);
        }
        Ok(ScriptedAgent { script })
    }

    pub fn load<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

fn parse_script_line(line: &str) -> Option<Action> {
    match line {
        "0" => return Some(Action::Stop),
        "s" | "S" | "y" | "Y" => return Some(Action::Continue(true)),
        "n" | "N" => return Some(Action::Continue(false)),
        _ => {}
    }
    let mut parts = line.split_whitespace();
    let attacker = parse_number(parts.next()?)?;
    let defender = parse_number(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(Action::attack(attacker, defender))
}

impl Agent for ScriptedAgent {
    fn name(&self) -> &str { "Scripted" }

    fn select_battle(&mut self, _board: &Board) -> Result<Option<(usize, usize)>> {
        while let Some(action) = self.script.pop_front() {
            match action {
                Action::Attack(sel) => return Ok(Some((sel.attacker, sel.defender))),
                Action::Stop => return Ok(None),
                Action::Continue(_) => {
                    tracing::warn!("scripted continue answer skipped while selecting a battle");
                }
            }
        }
        Ok(None)
    }

    fn attack_again(&mut self, _board: &Board) -> Result<bool> {
        Ok(matches!(self.script.pop_front(), Some(Action::Continue(true))))
    }
}
