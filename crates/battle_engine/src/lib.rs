//! battle_engine - Turn-based combat resolution between two combatants.
//!
//! Each round the faster combatant acts, the slower one acts if still
//! standing, and end-of-turn status conditions tick. Damage computations,
//! move selection, and presentation are all pluggable boundaries; the core
//! only resolves.

/// Elemental kinds and the type-effectiveness chart
pub mod types;

/// Combatants and status conditions
pub mod combatant;

/// Moves, outcomes, and the damage-computation boundary
pub mod moves;

/// The encounter resolver and the selection boundary
pub mod battle;

/// Structured events and the presenter boundary
pub mod events;

// Re-export commonly used types
pub use battle::{ActionSelector, Battle, BattlePhase, FixedSelector, RandomSelector};
pub use combatant::{ActiveStatus, Combatant, CustomStatus, StatusKind, StatusTick};
pub use events::{BattleEvent, EventSink, JsonLinesSink, NullSink, RecordingSink};
pub use moves::{
    ActionOutcome, ComputationError, DamageComputation, DefaultFormula, Move, MoveCategory,
    StatusInfliction,
};
pub use types::{Effectiveness, Kind, TypeChart, STANDARD_CHART};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_lookup() {
        assert_eq!(Kind::from_str("water"), Some(Kind::Water));
        assert_eq!(Kind::from_str("Water"), Some(Kind::Water));
        assert_eq!(Kind::from_str("invalid"), None);
    }

    #[test]
    fn test_chart_signature_values() {
        // Water vs Fire = 2x
        assert_eq!(
            STANDARD_CHART
                .effectiveness(Kind::Water, Kind::Fire)
                .multiplier(),
            2.0
        );

        // Fire vs Water = 0.5x
        assert_eq!(
            STANDARD_CHART
                .effectiveness(Kind::Fire, Kind::Water)
                .multiplier(),
            0.5
        );

        // Ground vs Flying = 0x
        assert_eq!(
            STANDARD_CHART
                .effectiveness(Kind::Ground, Kind::Flying)
                .multiplier(),
            0.0
        );
    }

    #[test]
    fn test_computation_library_lookup() {
        assert!(moves::lookup("thunderbolt").is_ok());
        assert!(moves::lookup("no_such_skill").is_err());
    }
}
