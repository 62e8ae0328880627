//! The encounter resolver.
//!
//! A `Battle` owns exactly two combatants for the duration of the
//! encounter, determines turn order each round from their speed, sequences
//! actions and end-of-turn status ticks, and reports the winner. All
//! randomness (accuracy, paralysis, default move selection) is drawn from
//! one injectable source.

use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::combatant::{Combatant, StatusKind};
use crate::events::{BattleEvent, EventSink, NullSink};
use crate::types::{TypeChart, STANDARD_CHART};

// ============================================================================
// Action Selection
// ============================================================================

/// Supplies the move index an actor uses on its turn.
///
/// Only invoked for actors with at least one move; out-of-range indices are
/// clamped to 0 by the resolver.
pub trait ActionSelector {
    fn select(&mut self, actor: &Combatant, rng: &mut dyn RngCore) -> usize;
}

/// Uniform random selection over the actor's moveset. Selection strategy
/// is not core logic, so this is the stock default.
#[derive(Default)]
pub struct RandomSelector;

impl ActionSelector for RandomSelector {
    fn select(&mut self, actor: &Combatant, rng: &mut dyn RngCore) -> usize {
        rng.gen_range(0..actor.moves().len())
    }
}

/// Always picks the same slot.
pub struct FixedSelector(pub usize);

impl ActionSelector for FixedSelector {
    fn select(&mut self, _actor: &Combatant, _rng: &mut dyn RngCore) -> usize {
        self.0
    }
}

// ============================================================================
// Battle
// ============================================================================

/// Lifecycle of an encounter. `winner` is an index into the combatant pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattlePhase {
    NotStarted,
    InProgress,
    Concluded { winner: usize },
}

/// A full encounter between two combatants.
pub struct Battle {
    combatants: [Combatant; 2],
    chart: &'static TypeChart,
    selector: Box<dyn ActionSelector>,
    sink: Box<dyn EventSink>,
    rng: Box<dyn RngCore>,
    phase: BattlePhase,
    turn: u32,
}

impl Battle {
    /// Create an encounter with the standard chart, uniform random move
    /// selection, no presenter, and an entropy-seeded rng.
    pub fn new(first: Combatant, second: Combatant) -> Self {
        Self {
            combatants: [first, second],
            chart: &STANDARD_CHART,
            selector: Box::new(RandomSelector),
            sink: Box::new(NullSink),
            rng: Box::new(SmallRng::from_entropy()),
            phase: BattlePhase::NotStarted,
            turn: 0,
        }
    }

    /// Seed the random source for reproducible outcomes.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(Box::new(SmallRng::seed_from_u64(seed)))
    }

    /// Inject a random source.
    pub fn with_rng(mut self, rng: Box<dyn RngCore>) -> Self {
        self.rng = rng;
        self
    }

    /// Inject a move selector.
    pub fn with_selector(mut self, selector: Box<dyn ActionSelector>) -> Self {
        self.selector = selector;
        self
    }

    /// Attach a presenter.
    pub fn with_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Use a different matchup chart.
    pub fn with_chart(mut self, chart: &'static TypeChart) -> Self {
        self.chart = chart;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn combatants(&self) -> &[Combatant; 2] {
        &self.combatants
    }

    /// Rounds played so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The winning combatant once the encounter has concluded.
    pub fn winner(&self) -> Option<&Combatant> {
        match self.phase {
            BattlePhase::Concluded { winner } => Some(&self.combatants[winner]),
            _ => None,
        }
    }

    /// Turn order for the current round: strictly greater speed acts
    /// first, ties go to the combatant registered first. Stable across
    /// calls.
    pub fn turn_order(&self) -> (usize, usize) {
        if self.combatants[1].speed() > self.combatants[0].speed() {
            (1, 0)
        } else {
            (0, 1)
        }
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Run the encounter to completion and return the winner.
    ///
    /// Loops until one combatant faints; if both faint in the same round
    /// (status damage on both sides), the second-registered combatant is
    /// declared the winner.
    pub fn run(&mut self) -> &Combatant {
        if let BattlePhase::Concluded { winner } = self.phase {
            return &self.combatants[winner];
        }

        self.phase = BattlePhase::InProgress;
        self.sink.handle(&BattleEvent::Started {
            combatants: [
                self.combatants[0].name().to_string(),
                self.combatants[1].name().to_string(),
            ],
        });

        while !self.combatants[0].is_fainted() && !self.combatants[1].is_fainted() {
            self.turn += 1;
            tracing::debug!(turn = self.turn, "round start");
            self.sink.handle(&BattleEvent::TurnStarted { number: self.turn });

            let (first, second) = self.turn_order();

            self.run_turn(first);
            if self.combatants[second].is_fainted() {
                self.emit_faint(second);
                break;
            }

            self.run_turn(second);
            if self.combatants[first].is_fainted() {
                self.emit_faint(first);
                break;
            }
        }

        let winner = if self.combatants[0].is_fainted() { 1 } else { 0 };
        self.phase = BattlePhase::Concluded { winner };
        tracing::debug!(winner = self.combatants[winner].name(), "encounter concluded");
        self.sink.handle(&BattleEvent::Ended {
            winner: self.combatants[winner].name().to_string(),
        });

        &self.combatants[winner]
    }

    /// Run one actor's turn against the other combatant.
    fn run_turn(&mut self, actor_idx: usize) {
        let Self {
            combatants,
            chart,
            selector,
            sink,
            rng,
            ..
        } = self;
        let (actor, target) = split_pair(combatants, actor_idx);

        if actor.moves().is_empty() {
            sink.handle(&BattleEvent::NoAvailableActions {
                combatant: actor.name().to_string(),
            });
            return;
        }

        // Paralysis fires before action selection.
        if actor.status_kind() == Some(StatusKind::Paralyzed) {
            let roll: u8 = rng.gen_range(0..100);
            if roll < 50 {
                tracing::debug!(actor = actor.name(), "fully paralyzed, turn wasted");
                sink.handle(&BattleEvent::Immobilized {
                    combatant: actor.name().to_string(),
                });
                // The end-of-turn tick still runs on an immobilized turn.
                emit_status_tick(actor, sink.as_mut());
                return;
            }
        }

        let selected = selector.select(actor, rng.as_mut());
        let index = if selected < actor.moves().len() {
            selected
        } else {
            0
        };

        let action = Rc::clone(&actor.moves()[index]);
        let outcome = action.resolve(actor, target, *chart, rng.as_mut());
        tracing::debug!(
            actor = actor.name(),
            action = action.name(),
            ?outcome,
            "action resolved"
        );
        sink.handle(&BattleEvent::ActionResolved {
            actor: actor.name().to_string(),
            target: target.name().to_string(),
            action: action.name().to_string(),
            outcome,
        });

        emit_status_tick(actor, sink.as_mut());
    }

    fn emit_faint(&mut self, idx: usize) {
        self.sink.handle(&BattleEvent::Fainted {
            combatant: self.combatants[idx].name().to_string(),
        });
    }
}

/// Split the pair into (actor, target) mutable references.
fn split_pair(combatants: &mut [Combatant; 2], actor: usize) -> (&mut Combatant, &mut Combatant) {
    let (left, right) = combatants.split_at_mut(1);
    if actor == 0 {
        (&mut left[0], &mut right[0])
    } else {
        (&mut right[0], &mut left[0])
    }
}

/// Tick the actor's status and report it.
fn emit_status_tick(actor: &mut Combatant, sink: &mut dyn EventSink) {
    if let Some(tick) = actor.tick_status() {
        sink.handle(&BattleEvent::StatusTicked {
            combatant: actor.name().to_string(),
            status: tick.kind,
            damage: tick.damage,
            expired: tick.expired,
        });
    }
}
