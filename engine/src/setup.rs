// ═══════════════════════════════════════════════════════════════════════
// Game setup — builds the initial GameState from registered territories
// ═══════════════════════════════════════════════════════════════════════

use crate::board::{is_valid_name, Board, Territory, TerritorySpec, MAX_NAME_LEN};
use crate::error::SetupError;
use crate::objectives::Objective;
use crate::types::*;
use rand::Rng;

/// Check every spec and lay out the board, alternating colors from RED.
pub fn build_board(specs: Vec<TerritorySpec>) -> Result<Board, SetupError> {
    if specs.is_empty() {
        return Err(SetupError::EmptyBoard);
    }

    let territories = specs.into_iter()
        .enumerate()
        .map(|(index, spec)| {
            if !is_valid_name(&spec.name) {
                return Err(SetupError::InvalidName { index: index + 1, name: spec.name, max: MAX_NAME_LEN });
            }
            if spec.troops == 0 {
                return Err(SetupError::NoTroops { name: spec.name });
            }
            Ok(Territory::new(spec.name, Faction::for_slot(index), spec.troops))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Board::new(territories))
}

/// Create the initial game state, drawing a secret objective for each player.
pub fn create_initial_state(
    specs: Vec<TerritorySpec>,
    rng: &mut impl Rng,
) -> Result<GameState, SetupError> {
    let objectives = Faction::ALL.map(|_| Objective::draw(&mut *rng));
    create_state_with_objectives(specs, objectives)
}

/// Same as `create_initial_state` with objectives chosen by the caller,
/// in player order (RED, BLUE).
pub fn create_state_with_objectives(
    specs: Vec<TerritorySpec>,
    objectives: [Objective; 2],
) -> Result<GameState, SetupError> {
    let board = build_board(specs)?;

    let players = Faction::ALL.iter()
        .zip(objectives)
        .map(|(&faction, objective)| Player { faction, objective })
        .collect();

    tracing::debug!(territories = board.len(), ?objectives, "game created");

    Ok(GameState {
        board,
        players,
        phase: Phase::AwaitingSelection,
        selection: None,
        engagement: None,
        battles_fought: 0,
        pending: None,
        outcome: None,
        events: Vec::new(),
    })
}
