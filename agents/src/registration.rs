// ═══════════════════════════════════════════════════════════════════════
// Territory registration — asks for the board size, then name and troops
// for each territory. Colors are announced as the engine will assign them.
// ═══════════════════════════════════════════════════════════════════════

use crate::error::{InputError, Result};
use crate::prompt::{parse_positive, Prompter};
use std::io::{BufRead, Write};
use war_engine::board::{is_valid_name, TerritorySpec, MAX_NAME_LEN};
use war_engine::types::Faction;

pub fn register_territories<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<TerritorySpec>> {
    let count = prompter
        .ask_until(
            "Enter the total number of territories to register: ",
            "Invalid input. Type a positive number: ",
            parse_positive,
        )?
        .ok_or(InputError::UnexpectedEof { expected: "the number of territories" })?;
    let count = count as usize;

    prompter.say("\n** TERRITORY REGISTRATION **")?;
    let name_prompt = format!("Name (max. {}, no spaces): ", MAX_NAME_LEN);
    let name_retry = format!("Invalid name. Use 1-{} characters without spaces: ", MAX_NAME_LEN);

    let mut specs = Vec::with_capacity(count);
    for index in 0..count {
        prompter.say(format!("\nTerritory {} of {}", index + 1, count))?;

        let name = prompter
            .ask_until(&name_prompt, &name_retry, |s| is_valid_name(s).then(|| s.to_string()))?
            .ok_or(InputError::UnexpectedEof { expected: "a territory name" })?;
        prompter.say(format!("Color assigned: {}", Faction::for_slot(index)))?;

        let troops = prompter
            .ask_until(
                "Troops (whole number >= 1): ",
                "Invalid input. Troops must be >= 1: ",
                parse_positive,
            )?
            .ok_or(InputError::UnexpectedEof { expected: "a troop count" })?;

        specs.push(TerritorySpec::new(name, troops));
    }

    prompter.say("\n** REGISTRATION COMPLETE **")?;
    tracing::debug!(territories = specs.len(), "registration complete");
    Ok(specs)
}
