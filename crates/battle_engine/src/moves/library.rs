//! Built-in library of substitute damage computations.
//!
//! Named computations a caller can attach in place of the default
//! formula, in lieu of an external scripting host. Each returns a
//! pre-effectiveness magnitude; the boundary requires purity, so the
//! formulas are deterministic functions of the two combatant views.

use thiserror::Error;

use crate::combatant::{Combatant, CustomStatus};
use crate::moves::computation::DamageComputation;
use crate::moves::{Move, MoveCategory};

/// Failure to produce a named computation.
///
/// Callers fall back to the default formula on this error; it never fails
/// an encounter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComputationError {
    #[error("unknown damage computation '{0}'")]
    Unknown(String),
}

/// Look up a computation by name.
pub fn lookup(name: &str) -> Result<Box<dyn DamageComputation>, ComputationError> {
    match name {
        "thunderbolt" | "flamethrower" | "water_gun" => Ok(Box::new(LevelScaledStrike)),
        "electro_ball" => Ok(Box::new(ElectroBall)),
        "eruption" => Ok(Box::new(Eruption)),
        "recover" => Ok(Box::new(Recover)),
        _ => Err(ComputationError::Unknown(name.to_string())),
    }
}

/// Level assumed by the scaled formulas.
const LEVEL: u32 = 50;

/// `floor(floor(2 * LEVEL / 5 + 2) * power * attack / defense / 50) + 2`.
fn level_scaled(power: u32, attack: u32, defense: u32) -> i32 {
    let damage = (2 * LEVEL as u64 / 5 + 2) * power as u64 * attack as u64
        / defense.max(1) as u64
        / 50
        + 2;
    damage.min(i32::MAX as u64) as i32
}

fn defense_for(action: &Move, target: &Combatant) -> u32 {
    match action.category() {
        MoveCategory::Special => target.special_defense() as u32,
        _ => target.defense() as u32,
    }
}

// ============================================================================
// Level-Scaled Strike (thunderbolt, flamethrower, water_gun)
// ============================================================================

/// Straight level-scaled strike using the move's own base power.
pub struct LevelScaledStrike;

impl DamageComputation for LevelScaledStrike {
    fn compute(&self, action: &Move, user: &Combatant, target: &Combatant) -> i32 {
        if action.base_power() == 0 {
            return 0;
        }
        level_scaled(
            action.base_power() as u32,
            user.attack() as u32,
            defense_for(action, target),
        )
    }
}

// ============================================================================
// Electro Ball: power tiered by the speed ratio
// ============================================================================

/// Power rises with how much faster the user is than the target:
/// 4x+ speed is 150 power, down to 40 power when slower.
pub struct ElectroBall;

impl ElectroBall {
    fn power(user: &Combatant, target: &Combatant) -> u32 {
        let ratio = user.speed() as u32 / (target.speed() as u32).max(1);
        match ratio {
            0 => 40,
            1 => 60,
            2 => 80,
            3 => 120,
            _ => 150,
        }
    }
}

impl DamageComputation for ElectroBall {
    fn compute(&self, action: &Move, user: &Combatant, target: &Combatant) -> i32 {
        level_scaled(
            Self::power(user, target),
            user.attack() as u32,
            defense_for(action, target),
        )
    }
}

// ============================================================================
// Eruption: power scales with the user's remaining HP
// ============================================================================

/// `150 * current_hp / max_hp` power, floored at 1.
pub struct Eruption;

impl DamageComputation for Eruption {
    fn compute(&self, action: &Move, user: &Combatant, target: &Combatant) -> i32 {
        let power = (150 * user.current_hp() as u32 / user.max_hp() as u32).max(1);
        level_scaled(power, user.attack() as u32, defense_for(action, target))
    }
}

// ============================================================================
// Recover: heals half the user's max HP
// ============================================================================

pub struct Recover;

impl DamageComputation for Recover {
    fn compute(&self, _action: &Move, user: &Combatant, _target: &Combatant) -> i32 {
        -((user.max_hp() / 2) as i32)
    }
}

// ============================================================================
// Seeded: custom drain condition
// ============================================================================

fn seeded_tick(combatant: &Combatant) -> u16 {
    combatant.max_hp() / 8
}

/// Drains an eighth of max HP per tick via the custom-status extension
/// point.
pub static SEEDED: CustomStatus = CustomStatus {
    name: "Seeded",
    on_tick: seeded_tick,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::StatusKind;
    use crate::types::Kind;

    fn pikachu() -> Combatant {
        Combatant::new("Pikachu", Kind::Electric, 100, 55, 40, 50, 90)
    }

    fn charmander() -> Combatant {
        Combatant::new("Charmander", Kind::Fire, 110, 52, 43, 50, 65)
    }

    #[test]
    fn lookup_known_names() {
        for name in ["thunderbolt", "flamethrower", "water_gun", "electro_ball", "eruption", "recover"] {
            assert!(lookup(name).is_ok(), "{name} should resolve");
        }
    }

    #[test]
    fn lookup_unknown_name_fails() {
        assert_eq!(
            lookup("hyper_beam"),
            Err(ComputationError::Unknown("hyper_beam".to_string()))
        );
    }

    #[test]
    fn level_scaled_strike_magnitude() {
        let bolt = Move::new("Thunderbolt", Kind::Electric, MoveCategory::Special, 90, 100);
        // floor(22 * 90 * 55 / 50 / 50) + 2 = 45.
        assert_eq!(LevelScaledStrike.compute(&bolt, &pikachu(), &charmander()), 45);
    }

    #[test]
    fn electro_ball_power_tiers() {
        let slowpoke = Combatant::new("Slowpoke", Kind::Water, 100, 50, 50, 50, 15);
        // 90 / 15 = 6x speed: top tier.
        assert_eq!(ElectroBall::power(&pikachu(), &slowpoke), 150);

        // 90 / 65 = 1x.
        assert_eq!(ElectroBall::power(&pikachu(), &charmander()), 60);

        // Slower than the target.
        assert_eq!(ElectroBall::power(&charmander(), &pikachu()), 40);

        // Zero target speed is clamped, not divided by.
        let statue = Combatant::new("Statue", Kind::Rock, 100, 50, 50, 50, 0);
        assert_eq!(ElectroBall::power(&pikachu(), &statue), 150);
    }

    #[test]
    fn eruption_power_tracks_remaining_hp() {
        let volcano = Move::new("Eruption", Kind::Fire, MoveCategory::Special, 150, 100);

        let full = charmander();
        let hurt = charmander().with_hp(11); // 10% HP
        let full_magnitude = Eruption.compute(&volcano, &full, &pikachu());
        let hurt_magnitude = Eruption.compute(&volcano, &hurt, &pikachu());

        assert!(full_magnitude > hurt_magnitude);
        // At 10% HP: power = 150 * 11 / 110 = 15.
        // floor(22 * 15 * 52 / 50 / 50) + 2 = 8.
        assert_eq!(hurt_magnitude, 8);
    }

    #[test]
    fn recover_returns_negative_half_max_hp() {
        let mend = Move::new("Recover", Kind::Normal, MoveCategory::Status, 0, 100);
        assert_eq!(Recover.compute(&mend, &pikachu(), &charmander()), -50);
        assert_eq!(Recover.compute(&mend, &charmander(), &pikachu()), -55);
    }

    #[test]
    fn seeded_status_drains_an_eighth() {
        let mut victim = charmander();
        victim.apply_status(StatusKind::Custom(&SEEDED), 3);

        let tick = victim.tick_status().unwrap();
        assert_eq!(tick.damage, 13); // 110 / 8
        assert_eq!(victim.current_hp(), 97);
        assert_eq!(victim.status_kind().unwrap().name(), "Seeded");
    }
}
