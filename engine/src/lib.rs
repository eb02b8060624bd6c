pub mod types;
pub mod board;
pub mod error;
pub mod combat;
pub mod objectives;
pub mod setup;
pub mod engine;

pub use types::*;
pub use board::{Board, Territory, TerritorySpec};
pub use objectives::{Objective, CATALOG};
