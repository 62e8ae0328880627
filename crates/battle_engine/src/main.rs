//! Demo encounter: Pikachu vs Charmander with a console presenter.
//!
//! Custom damage computations are attached from the built-in library where
//! available, falling back to the default formula otherwise.

use std::rc::Rc;

use battle_engine::{
    moves, Battle, BattleEvent, Combatant, Effectiveness, EventSink, Kind, Move, MoveCategory,
    StatusKind,
};

/// Renders battle events as the classic console transcript.
struct ConsolePresenter;

impl EventSink for ConsolePresenter {
    fn handle(&mut self, event: &BattleEvent) {
        match event {
            BattleEvent::Started { combatants } => {
                println!("\n*** Battle Start! ***");
                println!("{} vs {}!", combatants[0], combatants[1]);
            }
            BattleEvent::TurnStarted { number } => {
                println!("\n--- Turn {number} ---");
            }
            BattleEvent::NoAvailableActions { combatant } => {
                println!("{combatant} has no moves!");
            }
            BattleEvent::Immobilized { combatant } => {
                println!("{combatant} is fully paralyzed and can't move!");
            }
            BattleEvent::ActionResolved {
                actor,
                target,
                action,
                outcome,
            } => {
                if outcome.missed {
                    println!("{actor}'s {action} missed!");
                    return;
                }
                println!("{actor} used {action}!");

                if outcome.effectiveness == Effectiveness::Immune {
                    println!("It doesn't affect {target}...");
                } else if outcome.damage_dealt > 0 {
                    println!("It dealt {} damage!", outcome.damage_dealt);
                    match outcome.effectiveness {
                        Effectiveness::SuperEffective => println!("It's super effective!"),
                        Effectiveness::NotVeryEffective => {
                            println!("It's not very effective...")
                        }
                        _ => {}
                    }
                }

                if outcome.healing_done > 0 {
                    println!("{actor} restored {} HP!", outcome.healing_done);
                }
                if let Some(status) = outcome.status_applied {
                    println!("{target} is now {}!", status.name());
                }
            }
            BattleEvent::StatusTicked {
                combatant,
                status,
                damage,
                expired,
            } => {
                match status {
                    StatusKind::Poisoned => {
                        println!("{combatant} is hurt by poison! (-{damage} HP)")
                    }
                    StatusKind::Burned => println!("{combatant} is hurt by burn! (-{damage} HP)"),
                    StatusKind::Paralyzed => println!("{combatant} is paralyzed!"),
                    StatusKind::Custom(_) => {
                        if *damage > 0 {
                            println!("{combatant} is drained! (-{damage} HP)")
                        }
                    }
                }
                if *expired {
                    println!("{combatant} recovered from {}!", status.name());
                }
            }
            BattleEvent::Fainted { combatant } => {
                println!("\n{combatant} fainted!");
            }
            BattleEvent::Ended { winner } => {
                println!("\n*** {winner} wins the battle! ***");
            }
        }
    }
}

/// Attach a library computation to a move, falling back to the default
/// formula when the name is unknown.
fn attach_computation(action: &mut Move, name: &str) {
    match moves::lookup(name) {
        Ok(effect) => {
            action.set_effect(effect);
            println!("Loaded {} computation from the library.", action.name());
        }
        Err(error) => {
            println!("Using default effect for {} ({error}).", action.name());
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Battle Engine Demo ===");

    let mut thunderbolt = Move::new("Thunderbolt", Kind::Electric, MoveCategory::Special, 90, 100);
    attach_computation(&mut thunderbolt, "thunderbolt");

    let mut flamethrower = Move::new("Flamethrower", Kind::Fire, MoveCategory::Special, 90, 100);
    attach_computation(&mut flamethrower, "flamethrower");

    let mut recover = Move::new("Recover", Kind::Normal, MoveCategory::Status, 0, 100);
    attach_computation(&mut recover, "recover");

    let quick_attack = Move::new("Quick Attack", Kind::Normal, MoveCategory::Physical, 40, 100);
    let ember = Move::new("Ember", Kind::Fire, MoveCategory::Special, 40, 100);
    let thunder_wave = Move::new("Thunder Wave", Kind::Electric, MoveCategory::Status, 0, 100)
        .inflicts(StatusKind::Paralyzed, 3);
    let leech_seed = Move::new("Leech Seed", Kind::Grass, MoveCategory::Status, 0, 90)
        .inflicts(StatusKind::Custom(&moves::SEEDED), 4);

    let mut pikachu = Combatant::new("Pikachu", Kind::Electric, 100, 55, 40, 50, 90);
    pikachu.add_move(Rc::new(thunderbolt));
    pikachu.add_move(Rc::new(quick_attack));
    pikachu.add_move(Rc::new(thunder_wave));
    pikachu.add_move(Rc::new(leech_seed));

    let mut charmander = Combatant::new("Charmander", Kind::Fire, 110, 52, 43, 50, 65);
    charmander.add_move(Rc::new(flamethrower));
    charmander.add_move(Rc::new(ember));
    charmander.add_move(Rc::new(recover));

    println!("\nCombatants ready!");

    let mut battle = Battle::new(pikachu, charmander).with_sink(Box::new(ConsolePresenter));
    let winner = battle.run();

    println!("\n=== Battle Summary ===");
    println!("Winner: {}", winner.name());
    println!("Remaining HP: {}/{}", winner.current_hp(), winner.max_hp());
}
