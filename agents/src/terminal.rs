// ═══════════════════════════════════════════════════════════════════════
// Terminal Agent — a person typing answers.
// End of input counts as "stop" / "no".
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::Agent;
use crate::error::Result;
use crate::prompt::{parse_number, parse_yes_no, Prompter};
use std::io::{BufRead, Write};
use war_engine::board::Board;

pub struct TerminalAgent<R, W> {
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> TerminalAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalAgent { prompter: Prompter::new(input, output) }
    }

    pub fn from_prompter(prompter: Prompter<R, W>) -> Self {
        TerminalAgent { prompter }
    }

    pub fn into_inner(self) -> (R, W) {
        self.prompter.into_inner()
    }
}

impl<R: BufRead, W: Write> Agent for TerminalAgent<R, W> {
    fn name(&self) -> &str { "Terminal" }

    fn select_battle(&mut self, _board: &Board) -> Result<Option<(usize, usize)>> {
        let attacker = self.prompter.ask_until(
            "Choose the ATTACKING territory (number #, 0 to stop): ",
            "Invalid input. Type a territory number (0 to stop): ",
            parse_number,
        )?;
        let attacker = match attacker {
            Some(0) | None => return Ok(None),
            Some(n) => n,
        };

        let defender = self.prompter.ask_until(
            "Choose the DEFENDING territory (number #): ",
            "Invalid input. Type a territory number: ",
            parse_number,
        )?;
        Ok(defender.map(|defender| (attacker, defender)))
    }

    fn attack_again(&mut self, _board: &Board) -> Result<bool> {
        let answer = self.prompter.ask_until(
            "\nAttack again this turn? (y/n): ",
            "Invalid choice. Type 'y' or 'n': ",
            parse_yes_no,
        )?;
        Ok(answer.unwrap_or(false))
    }
}
