//! Combatants and their status conditions.
//!
//! A `Combatant` owns its vitals, core stats, moveset, and at most one
//! active status condition. It is created fully initialized and mutated
//! only through the damage / heal / status operations the resolver drives.

use std::rc::Rc;

use serde::{Serialize, Serializer};

use crate::moves::Move;
use crate::types::Kind;

// ============================================================================
// Status Conditions
// ============================================================================

/// A caller-defined status condition.
///
/// `on_tick` returns the HP loss to apply on each end-of-turn tick; it sees
/// an immutable view of the afflicted combatant.
#[derive(Debug, PartialEq, Eq)]
pub struct CustomStatus {
    pub name: &'static str,
    pub on_tick: fn(&Combatant) -> u16,
}

/// Status condition kind. Only one can be active on a combatant at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    /// Loses `max_hp / 8` per tick.
    Poisoned,
    /// Loses `max_hp / 16` per tick.
    Burned,
    /// No HP effect on tick; 50% chance to waste the turn, resolved by the
    /// encounter driver.
    Paralyzed,
    /// Extension point for caller-defined conditions.
    Custom(&'static CustomStatus),
}

impl StatusKind {
    /// Display name of the condition.
    pub fn name(self) -> &'static str {
        match self {
            StatusKind::Poisoned => "Poisoned",
            StatusKind::Burned => "Burned",
            StatusKind::Paralyzed => "Paralyzed",
            StatusKind::Custom(custom) => custom.name,
        }
    }
}

impl Serialize for StatusKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// An active status condition with its remaining duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveStatus {
    pub kind: StatusKind,
    pub remaining_turns: u8,
}

/// Result of one status tick, reported to the caller for event emission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusTick {
    /// The condition that ticked.
    pub kind: StatusKind,
    /// HP lost to the tick (0 for Paralyzed).
    pub damage: u16,
    /// Whether the condition expired on this tick.
    pub expired: bool,
}

// ============================================================================
// Combatant
// ============================================================================

/// A participant in an encounter.
#[derive(Clone, Debug)]
pub struct Combatant {
    name: String,
    kind: Kind,
    max_hp: u16,
    current_hp: u16,
    attack: u16,
    defense: u16,
    special_defense: u16,
    speed: u16,
    moves: Vec<Rc<Move>>,
    status: Option<ActiveStatus>,
}

impl Combatant {
    /// Create a combatant at full HP with fixed stats.
    ///
    /// `hp` is clamped up to 1 so the max-HP invariant (> 0) holds.
    pub fn new(
        name: impl Into<String>,
        kind: Kind,
        hp: u16,
        attack: u16,
        defense: u16,
        special_defense: u16,
        speed: u16,
    ) -> Self {
        let max_hp = hp.max(1);
        Self {
            name: name.into(),
            kind,
            max_hp,
            current_hp: max_hp,
            attack,
            defense,
            special_defense,
            speed,
            moves: Vec::new(),
            status: None,
        }
    }

    /// Restore a partially-damaged combatant (clamped to `0..=max_hp`).
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = hp.min(self.max_hp);
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

    pub fn max_hp(&self) -> u16 {
        self.max_hp
    }

    pub fn current_hp(&self) -> u16 {
        self.current_hp
    }

    pub fn attack(&self) -> u16 {
        self.attack
    }

    pub fn defense(&self) -> u16 {
        self.defense
    }

    pub fn special_defense(&self) -> u16 {
        self.special_defense
    }

    pub fn speed(&self) -> u16 {
        self.speed
    }

    pub fn moves(&self) -> &[Rc<Move>] {
        &self.moves
    }

    /// The active status condition, if any.
    pub fn status(&self) -> Option<ActiveStatus> {
        self.status
    }

    /// Kind of the active status condition, if any.
    pub fn status_kind(&self) -> Option<StatusKind> {
        self.status.map(|active| active.kind)
    }

    /// Fainted is a derived predicate, not a separate state.
    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Reduce HP, saturating at 0.
    pub fn take_damage(&mut self, amount: u16) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Restore HP, clamped at `max_hp`.
    pub fn heal(&mut self, amount: u16) {
        self.current_hp = self.current_hp.saturating_add(amount).min(self.max_hp);
    }

    /// Append a move to the moveset. No dedup, no cap.
    pub fn add_move(&mut self, action: Rc<Move>) {
        self.moves.push(action);
    }

    /// Apply a status condition unless one is already active.
    ///
    /// Returns `false` (leaving the existing condition and its remaining
    /// duration untouched) when a condition is already active. Zero
    /// durations are clamped to 1.
    pub fn apply_status(&mut self, kind: StatusKind, turns: u8) -> bool {
        if self.status.is_some() {
            return false;
        }
        self.status = Some(ActiveStatus {
            kind,
            remaining_turns: turns.max(1),
        });
        true
    }

    /// Tick the active status condition.
    ///
    /// The HP effect applies before the duration decrement, so a condition
    /// with one turn remaining deals its final tick before clearing.
    /// Returns `None` without side effects when no condition is active.
    pub fn tick_status(&mut self) -> Option<StatusTick> {
        let active = self.status?;

        let damage = match active.kind {
            StatusKind::Poisoned => self.max_hp / 8,
            StatusKind::Burned => self.max_hp / 16,
            StatusKind::Paralyzed => 0,
            StatusKind::Custom(custom) => (custom.on_tick)(self),
        };
        if damage > 0 {
            self.take_damage(damage);
        }

        let expired = active.remaining_turns <= 1;
        self.status = if expired {
            None
        } else {
            Some(ActiveStatus {
                kind: active.kind,
                remaining_turns: active.remaining_turns - 1,
            })
        };

        Some(StatusTick {
            kind: active.kind,
            damage,
            expired,
        })
    }
}
