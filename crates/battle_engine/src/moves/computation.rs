//! The damage-computation boundary.
//!
//! A `DamageComputation` turns an (attacker, defender) pair into a signed
//! pre-effectiveness magnitude: positive damages the defender, negative
//! heals the attacker, zero has no HP effect. Type effectiveness is applied
//! by `Move::resolve`, never inside a computation.

use crate::combatant::Combatant;
use crate::moves::{Move, MoveCategory};

/// Capability interface for a move's effect computation.
///
/// Implementations must be pure with respect to the passed views and must
/// return pre-effectiveness magnitudes; the resolver applies the chart
/// scaling afterwards.
pub trait DamageComputation {
    fn compute(&self, action: &Move, user: &Combatant, target: &Combatant) -> i32;
}

/// The built-in formula every move starts with.
///
/// `max(1, attack * base_power / (defense_stat * 2))` with integer floor
/// division. Physical and Special both read the attacker's single attack
/// stat; only the defensive stat differs. A base power of 0 marks a pure
/// status move and computes to 0.
pub struct DefaultFormula;

impl DamageComputation for DefaultFormula {
    fn compute(&self, action: &Move, user: &Combatant, target: &Combatant) -> i32 {
        if action.base_power() == 0 {
            return 0;
        }

        let attack = user.attack() as u32;
        let defense = match action.category() {
            MoveCategory::Special => target.special_defense(),
            _ => target.defense(),
        };
        // Zero defense is clamped rather than rejected.
        let denominator = (defense.max(1) as u32) * 2;

        let damage = attack * action.base_power() as u32 / denominator;
        damage.max(1) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Kind;

    fn user() -> Combatant {
        Combatant::new("User", Kind::Normal, 100, 55, 40, 50, 90)
    }

    fn target() -> Combatant {
        Combatant::new("Target", Kind::Normal, 100, 52, 40, 30, 65)
    }

    #[test]
    fn physical_uses_defense() {
        let strike = Move::new("Strike", Kind::Normal, MoveCategory::Physical, 40, 100);
        assert_eq!(DefaultFormula.compute(&strike, &user(), &target()), 27);
    }

    #[test]
    fn special_uses_special_defense() {
        let beam = Move::new("Beam", Kind::Normal, MoveCategory::Special, 40, 100);
        // (55 * 40) / (30 * 2) = 36.
        assert_eq!(DefaultFormula.compute(&beam, &user(), &target()), 36);
    }

    #[test]
    fn zero_power_computes_to_zero() {
        let chant = Move::new("Chant", Kind::Normal, MoveCategory::Status, 0, 100);
        assert_eq!(DefaultFormula.compute(&chant, &user(), &target()), 0);
    }

    #[test]
    fn floors_at_one_damage() {
        let tickle = Move::new("Tickle", Kind::Normal, MoveCategory::Physical, 1, 100);
        let wall = Combatant::new("Wall", Kind::Normal, 100, 1, 1000, 1000, 1);
        assert_eq!(DefaultFormula.compute(&tickle, &user(), &wall), 1);
    }

    #[test]
    fn zero_defense_is_clamped() {
        let strike = Move::new("Strike", Kind::Normal, MoveCategory::Physical, 40, 100);
        let husk = Combatant::new("Husk", Kind::Normal, 100, 1, 0, 0, 1);
        // Denominator clamps to 1 * 2.
        assert_eq!(DefaultFormula.compute(&strike, &user(), &husk), 1100);
    }
}
