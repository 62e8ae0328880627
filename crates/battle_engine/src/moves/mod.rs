//! Moves and per-action resolution.
//!
//! A `Move` is an immutable definition shared by reference across any
//! number of combatants. Its damage computation is bound at construction
//! (the default formula) and can be substituted exactly once through the
//! `DamageComputation` boundary.

pub mod computation;
pub mod library;

pub use computation::{DamageComputation, DefaultFormula};
pub use library::{lookup, ComputationError, SEEDED};

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::combatant::{Combatant, StatusKind};
use crate::types::{Effectiveness, Kind, TypeChart};

/// Category of a move, deciding which defensive stat damage is checked
/// against. Physical and Special both read the attacker's single attack
/// stat; Status moves deal no direct damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

/// Status condition a move inflicts on the defender.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusInfliction {
    pub kind: StatusKind,
    pub turns: u8,
}

/// Result of resolving one move against a defender.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ActionOutcome {
    /// The accuracy roll failed; nothing else happened.
    pub missed: bool,
    /// Post-effectiveness damage dealt to the defender.
    pub damage_dealt: u16,
    /// HP restored to the attacker.
    pub healing_done: u16,
    /// Effectiveness tier of the damage (Neutral for non-damaging results).
    pub effectiveness: Effectiveness,
    /// Status condition newly applied to the defender, if any.
    pub status_applied: Option<StatusKind>,
}

impl ActionOutcome {
    fn miss() -> Self {
        Self {
            missed: true,
            ..Self::default()
        }
    }
}

/// A selectable combat move.
pub struct Move {
    name: String,
    kind: Kind,
    category: MoveCategory,
    base_power: u16,
    accuracy: u8,
    inflicts: Option<StatusInfliction>,
    effect: Box<dyn DamageComputation>,
    effect_overridden: bool,
}

impl Move {
    /// Create a move bound to the default damage formula.
    ///
    /// `accuracy` is a percent hit chance, clamped to 100. A `base_power`
    /// of 0 marks a non-damaging move.
    pub fn new(
        name: impl Into<String>,
        kind: Kind,
        category: MoveCategory,
        base_power: u16,
        accuracy: u8,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            category,
            base_power,
            accuracy: accuracy.min(100),
            inflicts: None,
            effect: Box::new(DefaultFormula),
            effect_overridden: false,
        }
    }

    /// Attach a status condition, applied to the defender when the move's
    /// category is Status.
    pub fn inflicts(mut self, kind: StatusKind, turns: u8) -> Self {
        self.inflicts = Some(StatusInfliction { kind, turns });
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn category(&self) -> MoveCategory {
        self.category
    }

    pub fn base_power(&self) -> u16 {
        self.base_power
    }

    pub fn accuracy(&self) -> u8 {
        self.accuracy
    }

    pub fn status_infliction(&self) -> Option<StatusInfliction> {
        self.inflicts
    }

    // ========================================================================
    // Effect substitution
    // ========================================================================

    /// Substitute the bound damage computation.
    ///
    /// Allowed exactly once; later calls are observable no-ops returning
    /// `false` and keep the first substitution. The move trusts the bound
    /// computation completely.
    pub fn set_effect(&mut self, effect: Box<dyn DamageComputation>) -> bool {
        if self.effect_overridden {
            return false;
        }
        self.effect = effect;
        self.effect_overridden = true;
        true
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Resolve this move against a defender.
    ///
    /// Rolls accuracy, invokes the bound computation for a signed
    /// pre-effectiveness magnitude, scales positive magnitudes by the
    /// chart, applies damage or healing, and applies the status condition
    /// for Status-category moves independent of the magnitude.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        attacker: &mut Combatant,
        defender: &mut Combatant,
        chart: &TypeChart,
        rng: &mut R,
    ) -> ActionOutcome {
        let roll: u8 = rng.gen_range(0..100);
        if roll >= self.accuracy {
            return ActionOutcome::miss();
        }

        let magnitude = self.effect.compute(self, attacker, defender);
        let mut outcome = ActionOutcome::default();

        if magnitude > 0 {
            let effectiveness = chart.effectiveness(self.kind, defender.kind());
            let damage = effectiveness
                .apply(magnitude as u32)
                .min(u16::MAX as u32) as u16;
            defender.take_damage(damage);
            outcome.damage_dealt = damage;
            outcome.effectiveness = effectiveness;
        } else if magnitude < 0 {
            let healing = magnitude.unsigned_abs().min(u16::MAX as u32) as u16;
            attacker.heal(healing);
            outcome.healing_done = healing;
        }

        if self.category == MoveCategory::Status {
            if let Some(infliction) = self.inflicts {
                if defender.apply_status(infliction.kind, infliction.turns) {
                    outcome.status_applied = Some(infliction.kind);
                }
            }
        }

        outcome
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Move")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("category", &self.category)
            .field("base_power", &self.base_power)
            .field("accuracy", &self.accuracy)
            .field("inflicts", &self.inflicts)
            .field("effect_overridden", &self.effect_overridden)
            .finish()
    }
}
