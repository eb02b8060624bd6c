// ═══════════════════════════════════════════════════════════════════════
// Combat — one attack die against one defense die.
//
//   attack > defense  → defender changes color, attacker moves half its
//                       troops (rounded down) in; old defenders are lost
//   attack <= defense → attacker loses one troop
//
// An attacker with a single troop is refused before any die is rolled.
// ═══════════════════════════════════════════════════════════════════════

use crate::board::Territory;
use crate::error::CombatError;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

pub const DIE_FACES: u8 = 6;

/// Source of six-sided die rolls.
pub trait Dice {
    /// A face in `1..=6`.
    fn roll(&mut self) -> u8;
}

/// Fair dice over a seeded ChaCha stream.
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: ChaCha8Rng,
}

impl RandomDice {
    pub fn new(seed: u64) -> Self {
        RandomDice { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// The underlying generator, shared with objective draws at setup.
    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }
}

impl Dice for RandomDice {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..=DIE_FACES)
    }
}

/// Replays a fixed list of faces, wrapping around at the end.
/// Faces outside `1..=6` are clamped; an empty list always rolls 1.
#[derive(Debug, Clone, Default)]
pub struct LoadedDice {
    faces: Vec<u8>,
    next: usize,
}

impl LoadedDice {
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        LoadedDice {
            faces: faces.into_iter().map(|f| f.clamp(1, DIE_FACES)).collect(),
            next: 0,
        }
    }

    /// Attack and defense faces for a single battle.
    pub fn battle(attack: u8, defense: u8) -> Self {
        Self::new([attack, defense])
    }

    /// How many faces have been rolled so far.
    pub fn rolled(&self) -> usize {
        self.next
    }
}

impl Dice for LoadedDice {
    fn roll(&mut self) -> u8 {
        if self.faces.is_empty() {
            self.next += 1;
            return 1;
        }
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        face
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// Defender conquered; `transferred` troops now occupy it.
    AttackerWon { transferred: u32 },
    /// Attack repelled; attacker lost one troop.
    DefenderHeld,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub attacker: String,
    pub defender: String,
    pub attack_roll: u8,
    pub defense_roll: u8,
    pub outcome: BattleOutcome,
}

/// Resolve one attack, mutating both territories in place.
///
/// Callers are expected to have checked that the two territories belong to
/// different factions.
pub fn resolve<D: Dice + ?Sized>(
    attacker: &mut Territory,
    defender: &mut Territory,
    dice: &mut D,
) -> Result<BattleReport, CombatError> {
    if !attacker.can_attack() {
        return Err(CombatError::InsufficientTroops {
            name: attacker.name.clone(),
            troops: attacker.troops,
        });
    }

    let attack_roll = dice.roll();
    let defense_roll = dice.roll();

    let outcome = if attack_roll > defense_roll {
        let transferred = attacker.troops / 2;
        attacker.troops -= transferred;
        defender.owner = attacker.owner;
        defender.troops = transferred;
        BattleOutcome::AttackerWon { transferred }
    } else {
        attacker.troops -= 1;
        BattleOutcome::DefenderHeld
    };

    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        attack_roll,
        defense_roll,
        ?outcome,
        "battle resolved"
    );

    Ok(BattleReport {
        attacker: attacker.name.clone(),
        defender: defender.name.clone(),
        attack_roll,
        defense_roll,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Faction;
    use proptest::prelude::*;

    fn red(troops: u32) -> Territory {
        Territory::new("Alaska", Faction::Red, troops)
    }

    fn blue(troops: u32) -> Territory {
        Territory::new("Brazil", Faction::Blue, troops)
    }

    #[test]
    fn test_attacker_wins_takes_half() {
        let (mut a, mut d) = (red(5), blue(3));
        let report = resolve(&mut a, &mut d, &mut LoadedDice::battle(6, 2)).unwrap();
        assert_eq!(report.outcome, BattleOutcome::AttackerWon { transferred: 2 });
        assert_eq!(a.troops, 3);
        assert_eq!(d.troops, 2);
        assert_eq!(d.owner, Faction::Red);
        assert_eq!(a.owner, Faction::Red);
    }

    #[test]
    fn test_tie_goes_to_defender() {
        let (mut a, mut d) = (red(5), blue(3));
        let report = resolve(&mut a, &mut d, &mut LoadedDice::battle(4, 4)).unwrap();
        assert_eq!(report.outcome, BattleOutcome::DefenderHeld);
        assert_eq!(a.troops, 4);
        assert_eq!(d, blue(3));
    }

    #[test]
    fn test_two_troop_attacker_keeps_one_either_way() {
        let (mut a, mut d) = (red(2), blue(9));
        resolve(&mut a, &mut d, &mut LoadedDice::battle(6, 1)).unwrap();
        assert_eq!((a.troops, d.troops), (1, 1));

        let (mut a, mut d) = (red(2), blue(9));
        resolve(&mut a, &mut d, &mut LoadedDice::battle(1, 6)).unwrap();
        assert_eq!(a.troops, 1);
    }

    #[test]
    fn test_single_troop_refused_without_rolling() {
        let (mut a, mut d) = (red(1), blue(3));
        let mut dice = LoadedDice::battle(6, 1);
        let err = resolve(&mut a, &mut d, &mut dice).unwrap_err();
        assert_eq!(err, CombatError::InsufficientTroops { name: "Alaska".into(), troops: 1 });
        assert_eq!(dice.rolled(), 0);
        assert_eq!(a, red(1));
        assert_eq!(d, blue(3));
    }

    #[test]
    fn test_random_dice_stay_on_the_die() {
        let mut dice = RandomDice::new(7);
        for _ in 0..1000 {
            let face = dice.roll();
            assert!((1..=DIE_FACES).contains(&face));
        }
    }

    #[test]
    fn test_loaded_dice_wrap_and_clamp() {
        let mut dice = LoadedDice::new([0, 9, 3]);
        assert_eq!(dice.roll(), 1);
        assert_eq!(dice.roll(), 6);
        assert_eq!(dice.roll(), 3);
        assert_eq!(dice.roll(), 1);
    }

    proptest! {
        #[test]
        fn prop_battle_never_adds_troops(
            atk in 2u32..500,
            def in 1u32..500,
            attack_roll in 1u8..=6,
            defense_roll in 1u8..=6,
        ) {
            let (mut a, mut d) = (red(atk), blue(def));
            let before = atk + def;
            resolve(&mut a, &mut d, &mut LoadedDice::battle(attack_roll, defense_roll)).unwrap();
            prop_assert!(a.troops + d.troops <= before);
            prop_assert!(a.troops >= 1);
            prop_assert!(d.troops >= 1);
            prop_assert_eq!(a.owner, Faction::Red);
            if attack_roll > defense_roll {
                prop_assert_eq!(d.owner, Faction::Red);
                prop_assert_eq!(a.troops + d.troops, atk);
            } else {
                prop_assert_eq!(d.owner, Faction::Blue);
                prop_assert_eq!(a.troops + d.troops, before - 1);
            }
        }
    }
}
