// ═══════════════════════════════════════════════════════════════════════
// Board — the ordered territory list and the queries objectives need.
// The board never grows or shrinks after setup; its length is the board size.
// ═══════════════════════════════════════════════════════════════════════

use crate::types::Faction;
use serde::{Deserialize, Serialize};

/// Longest territory name accepted at setup.
pub const MAX_NAME_LEN: usize = 29;

/// A territory as typed in by the user during registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritorySpec {
    pub name: String,
    pub troops: u32,
}

impl TerritorySpec {
    pub fn new(name: impl Into<String>, troops: u32) -> Self {
        TerritorySpec { name: name.into(), troops }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub name: String,
    pub owner: Faction,
    pub troops: u32,
}

impl Territory {
    pub fn new(name: impl Into<String>, owner: Faction, troops: u32) -> Self {
        Territory { name: name.into(), owner, troops }
    }

    /// Only a territory with more than one troop may launch an attack.
    pub fn can_attack(&self) -> bool {
        self.troops > 1
    }
}

/// Returns true if `name` fits the registration rules (non-empty, bounded, one word).
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().count() <= MAX_NAME_LEN
        && !name.chars().any(char::is_whitespace)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    territories: Vec<Territory>,
}

impl Board {
    pub fn new(territories: Vec<Territory>) -> Self {
        Board { territories }
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Territory by 0-based index.
    pub fn get(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Territory> {
        self.territories.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Territory> {
        self.territories.iter()
    }

    /// Two distinct territories borrowed mutably at once.
    /// Returns None if either index is out of range or both are equal.
    pub fn pair_mut(&mut self, a: usize, b: usize) -> Option<(&mut Territory, &mut Territory)> {
        if a == b || a >= self.len() || b >= self.len() {
            return None;
        }
        if a < b {
            let (left, right) = self.territories.split_at_mut(b);
            Some((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.territories.split_at_mut(a);
            Some((&mut right[0], &mut left[b]))
        }
    }

    pub fn territories_of(&self, faction: Faction) -> impl Iterator<Item = &Territory> {
        self.territories.iter().filter(move |t| t.owner == faction)
    }

    pub fn owned_count(&self, faction: Faction) -> usize {
        self.territories_of(faction).count()
    }

    /// Total troops stationed in territories owned by `faction`.
    pub fn troops_of(&self, faction: Faction) -> u64 {
        self.territories_of(faction).map(|t| u64::from(t.troops)).sum()
    }
}
