//! The combat round engine.
//!
//! Runs a party-versus-enemies encounter to completion: each round ticks
//! status effects over both rosters, resolves the player side's actions in
//! roster order, then the enemy side's, and settles deaths (and the player
//! revive) at the end of the round. The loop ends when one side has no
//! living members.
//!
//! All mutation happens on the two rosters passed in; the caller reads
//! back alive flags and health afterwards and applies rewards separately.

use serde::{Deserialize, Serialize};

use crate::actor::status::{self, standard_application, StatusKind, StatusTick};
use crate::actor::types::{Actor, VitalCheck};
use crate::combat::damage::{calculate_damage, DamageFormula};
use crate::combat::events::CombatEvent;
use crate::core::constants::{STATUS_ATTACK_DIVISOR, STATUS_BASE_CHANCE};
use crate::core::elements::Element;
use rand::Rng;

/// Encounter-level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatConfig {
    pub damage_formula: DamageFormula,
}

/// Final result of an encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatOutcome {
    /// True iff the player side has at least one living member.
    pub victory: bool,
    pub rounds: u32,
    pub log: Vec<CombatEvent>,
}

/// Chance for an attack to trigger the attacker's elemental status.
pub fn elemental_trigger_chance(attack: u32) -> f64 {
    STATUS_BASE_CHANCE + attack as f64 / STATUS_ATTACK_DIVISOR
}

/// The status an attack of this element can inflict. The second field is
/// true when the effect lands on the attacker (Light empowers self).
fn elemental_trigger(element: Element) -> Option<(StatusKind, bool)> {
    match element {
        Element::Fire => Some((StatusKind::Burn, false)),
        Element::Dark => Some((StatusKind::Cursed, false)),
        Element::Light => Some((StatusKind::Empowered, true)),
        Element::Ice => Some((StatusKind::Frozen, false)),
        Element::Poison => Some((StatusKind::Poisoned, false)),
        Element::Lightning => Some((StatusKind::Shocked, false)),
        _ => None,
    }
}

fn side_has_living(side: &[Actor]) -> bool {
    side.iter().any(Actor::is_alive)
}

fn settle(actor: &mut Actor, log: &mut Vec<CombatEvent>) {
    match actor.settle_health() {
        VitalCheck::Alive => {}
        VitalCheck::Died => log.push(CombatEvent::Died {
            name: actor.name.clone(),
        }),
        VitalCheck::Revived { restored } => log.push(CombatEvent::Revived {
            name: actor.name.clone(),
            restored,
        }),
    }
}

/// Runs an encounter to completion and reports the outcome with the full
/// ordered event log. Initially-empty (or fully dead) sides terminate
/// immediately without running a round.
pub fn resolve_combat(
    players: &mut [Actor],
    enemies: &mut [Actor],
    config: &CombatConfig,
    rng: &mut impl Rng,
) -> CombatOutcome {
    let mut log = Vec::new();
    let mut rounds = 0;

    while side_has_living(players) && side_has_living(enemies) {
        rounds += 1;
        log.push(CombatEvent::RoundStarted { round: rounds });

        // Phase 1: status tick over both rosters, settling status deaths.
        for actor in players.iter_mut().chain(enemies.iter_mut()) {
            if !actor.is_alive() {
                continue;
            }
            for tick in status::process_round(actor) {
                match tick {
                    StatusTick::Damage { kind, amount } => log.push(CombatEvent::StatusDamage {
                        name: actor.name.clone(),
                        status: kind,
                        damage: amount,
                    }),
                    StatusTick::Expired { kind } => log.push(CombatEvent::StatusExpired {
                        name: actor.name.clone(),
                        status: kind,
                    }),
                }
            }
            settle(actor, &mut log);
        }

        // Phases 2 and 3: player side acts, then the enemy side. Only the
        // player side rolls elemental triggers; enemies deal plain damage.
        run_side_pass(players, enemies, config, true, rng, &mut log);
        run_side_pass(enemies, players, config, false, rng, &mut log);

        // Phase 4: settle every actor dropped to zero during the passes.
        for actor in players.iter_mut().chain(enemies.iter_mut()) {
            settle(actor, &mut log);
        }
    }

    CombatOutcome {
        victory: side_has_living(players),
        rounds,
        log,
    }
}

/// One side's action pass, in roster order. An attacker dropped to zero
/// health earlier in the round does not act; if the opposing side has no
/// living members left, the rest of the pass is skipped. Elemental status
/// triggers and weapon procs belong to the player side's pass only
/// (`player_side`); the enemy pass deals plain damage.
fn run_side_pass(
    attackers: &mut [Actor],
    defenders: &mut [Actor],
    config: &CombatConfig,
    player_side: bool,
    rng: &mut impl Rng,
    log: &mut Vec<CombatEvent>,
) {
    for i in 0..attackers.len() {
        if !attackers[i].is_alive() {
            continue;
        }
        if let Some(blocker) = attackers[i].action_blocked() {
            log.push(CombatEvent::ActionForfeited {
                name: attackers[i].name.clone(),
                status: blocker,
            });
            continue;
        }
        if attackers[i].is_player() {
            if let Some((item, healed)) = attackers[i].auto_use_consumable() {
                log.push(CombatEvent::ConsumableUsed {
                    name: attackers[i].name.clone(),
                    item,
                    healed,
                });
            }
        }

        // Fresh uniform pick among living defenders, per action.
        let living: Vec<usize> = defenders
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_alive())
            .map(|(j, _)| j)
            .collect();
        if living.is_empty() {
            break;
        }
        let j = living[rng.gen_range(0..living.len())];

        let damage = calculate_damage(&attackers[i], &defenders[j], config.damage_formula, rng);
        defenders[j].take_damage(damage);
        log.push(CombatEvent::Hit {
            attacker: attackers[i].name.clone(),
            target: defenders[j].name.clone(),
            damage,
            target_health: defenders[j].health,
        });

        // Elemental status roll; a single branch per attack, chosen by the
        // attacker's element. Player side only.
        let chance = elemental_trigger_chance(attackers[i].attack);
        if let Some((kind, on_self)) = elemental_trigger(attackers[i].element) {
            if player_side && rng.gen::<f64>() < chance {
                let recipient = if on_self { &mut attackers[i] } else { &mut defenders[j] };
                let effect = standard_application(kind, recipient.max_health);
                if recipient.apply_status(kind, effect) {
                    log.push(CombatEvent::StatusApplied {
                        target: recipient.name.clone(),
                        status: kind,
                        turns: effect.turns,
                    });
                }
            }
        }

        // Weapon proc: players only, rolled at the weapon's own chance
        // plus the elemental chance. See DESIGN.md on the summed chance.
        if let Some(weapon) = attackers[i].weapon_effect() {
            if rng.gen::<f64>() < weapon.chance + chance {
                let effect = standard_application(weapon.kind, defenders[j].max_health);
                if defenders[j].apply_status(weapon.kind, effect) {
                    log.push(CombatEvent::StatusApplied {
                        target: defenders[j].name.clone(),
                        status: weapon.kind,
                        turns: effect.turns,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::status::StatusEffect;
    use crate::actor::types::{ClassKind, EquipSlot, Item};
    use crate::core::elements::Alignment;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// RNG whose uniform draws land on the midpoint of any range, so no
    /// probabilistic status triggers fire (rolls come out ~0.5).
    fn midpoint_rng() -> StepRng {
        StepRng::new(u64::MAX / 2, 0)
    }

    fn basic_player(attack: u32, defense: u32, health: u32) -> Actor {
        let mut player = Actor::new_player(
            "Hero".to_string(),
            ClassKind::Warrior,
            Element::Water,
            Alignment::NeutralGood,
        );
        player.attack = attack;
        player.defense = defense;
        player.max_health = health;
        player.health = health;
        let data = player.player.as_mut().unwrap();
        data.base_attack = attack;
        data.base_defense = defense;
        data.base_health = health;
        data.revives = 0;
        player
    }

    fn basic_enemy(name: &str, attack: u32, defense: u32, health: u32) -> Actor {
        Actor::new(
            name.to_string(),
            health,
            attack,
            defense,
            2,
            Element::Earth,
            Alignment::ChaoticEvil,
        )
    }

    #[test]
    fn test_scenario_player_beats_single_enemy_within_three_rounds() {
        let mut players = vec![basic_player(15, 10, 120)];
        let mut enemies = vec![basic_enemy("Goblin", 10, 5, 30)];
        let outcome = resolve_combat(
            &mut players,
            &mut enemies,
            &CombatConfig::default(),
            &mut midpoint_rng(),
        );
        assert!(outcome.victory);
        assert!(outcome.rounds <= 3, "took {} rounds", outcome.rounds);
        assert_eq!(enemies[0].health, 0);
        assert!(!enemies[0].alive);
        assert!(players[0].health > 0);
    }

    #[test]
    fn test_enemy_dead_mid_round_does_not_act() {
        let mut players = vec![basic_player(15, 10, 120)];
        let mut enemies = vec![basic_enemy("Goblin", 10, 5, 30)];
        let outcome = resolve_combat(
            &mut players,
            &mut enemies,
            &CombatConfig::default(),
            &mut midpoint_rng(),
        );
        // The goblin dies to the third player hit, so it only attacks in
        // the first two rounds.
        let goblin_attacks = outcome
            .log
            .iter()
            .filter(|e| matches!(e, CombatEvent::Hit { attacker, .. } if attacker == "Goblin"))
            .count();
        assert_eq!(goblin_attacks, 2);
    }

    #[test]
    fn test_empty_enemy_roster_terminates_immediately() {
        let mut players = vec![basic_player(15, 10, 120)];
        let mut enemies: Vec<Actor> = Vec::new();
        let outcome = resolve_combat(
            &mut players,
            &mut enemies,
            &CombatConfig::default(),
            &mut midpoint_rng(),
        );
        assert!(outcome.victory);
        assert_eq!(outcome.rounds, 0);
        assert!(outcome.log.is_empty());
    }

    #[test]
    fn test_empty_player_roster_is_immediate_defeat() {
        let mut players: Vec<Actor> = Vec::new();
        let mut enemies = vec![basic_enemy("Goblin", 10, 5, 30)];
        let outcome = resolve_combat(
            &mut players,
            &mut enemies,
            &CombatConfig::default(),
            &mut midpoint_rng(),
        );
        assert!(!outcome.victory);
        assert_eq!(outcome.rounds, 0);
    }

    #[test]
    fn test_frozen_actor_forfeits_but_status_decrements() {
        let mut players = vec![basic_player(15, 10, 500)];
        players[0].apply_status(StatusKind::Frozen, StatusEffect::lasting(2));
        let mut enemies = vec![basic_enemy("Goblin", 5, 5, 200)];
        let mut rng = midpoint_rng();

        // Run a single round by giving the enemy overwhelming health and
        // inspecting the log afterwards.
        let outcome = resolve_combat(&mut players, &mut enemies, &CombatConfig::default(), &mut rng);

        // Round 1: Frozen ticks 2 -> 1, still active, Hero forfeits.
        // Round 2: Frozen ticks 1 -> 0 and expires, Hero acts.
        let mut saw_forfeit = false;
        let mut hero_hit_round = 0;
        let mut round = 0;
        for event in &outcome.log {
            match event {
                CombatEvent::RoundStarted { round: r } => round = *r,
                CombatEvent::ActionForfeited { name, status } if name == "Hero" => {
                    assert_eq!(*status, StatusKind::Frozen);
                    assert_eq!(round, 1);
                    saw_forfeit = true;
                }
                CombatEvent::Hit { attacker, .. } if attacker == "Hero" && hero_hit_round == 0 => {
                    hero_hit_round = round;
                }
                _ => {}
            }
        }
        assert!(saw_forfeit);
        assert_eq!(hero_hit_round, 2, "Hero must not act while Frozen");
    }

    #[test]
    fn test_revive_consumed_then_permanent_death() {
        let mut players = vec![basic_player(5, 0, 50)];
        players[0].player.as_mut().unwrap().revives = 1;
        let mut enemies = vec![basic_enemy("Ogre", 500, 0, 10_000)];
        let outcome = resolve_combat(
            &mut players,
            &mut enemies,
            &CombatConfig::default(),
            &mut midpoint_rng(),
        );
        assert!(!outcome.victory);
        let revives = outcome
            .log
            .iter()
            .filter(|e| matches!(e, CombatEvent::Revived { .. }))
            .count();
        let deaths = outcome
            .log
            .iter()
            .filter(|e| matches!(e, CombatEvent::Died { name } if name == "Hero"))
            .count();
        assert_eq!(revives, 1);
        assert_eq!(deaths, 1);
        assert!(!players[0].alive);
        assert_eq!(players[0].player.as_ref().unwrap().revives, 0);
    }

    #[test]
    fn test_player_with_zero_revives_dies_permanently() {
        let mut players = vec![basic_player(5, 0, 50)];
        let mut enemies = vec![basic_enemy("Ogre", 500, 0, 10_000)];
        let outcome = resolve_combat(
            &mut players,
            &mut enemies,
            &CombatConfig::default(),
            &mut midpoint_rng(),
        );
        assert!(!outcome.victory);
        assert_eq!(outcome.rounds, 1);
        assert!(!players[0].alive);
        assert!(!outcome
            .log
            .iter()
            .any(|e| matches!(e, CombatEvent::Revived { .. })));
    }

    #[test]
    fn test_actor_killed_by_status_never_acts() {
        // Hero enters the encounter with a lethal Burn and no revives; the
        // NPC carries the fight. Hero must never appear as an attacker.
        let mut hero = basic_player(5, 0, 8);
        hero.apply_status(StatusKind::Burn, StatusEffect::damaging(3, 10));
        let npc = basic_enemy("Branwen", 12, 8, 300);
        let mut players = vec![hero, npc];
        let mut enemies = vec![basic_enemy("Goblin", 5, 5, 40)];
        let outcome = resolve_combat(
            &mut players,
            &mut enemies,
            &CombatConfig::default(),
            &mut midpoint_rng(),
        );
        assert!(outcome.victory);
        assert!(!players[0].alive);
        assert!(!outcome
            .log
            .iter()
            .any(|e| matches!(e, CombatEvent::Hit { attacker, .. } if attacker == "Hero")));
    }

    #[test]
    fn test_weapon_stun_blocks_enemy_in_same_round() {
        let mut players = vec![basic_player(15, 10, 500)];
        // Guaranteed proc: chance 1.0 plus the elemental chance exceeds any roll.
        let hammer = Item::weapon_with_effect("Thunder Hammer", 8, 180, StatusKind::Stunned, 1.0);
        players[0].equip(hammer, EquipSlot::Weapon);
        let mut enemies = vec![basic_enemy("Goblin", 10, 5, 5_000)];

        let outcome = resolve_combat(
            &mut players,
            &mut enemies,
            &CombatConfig::default(),
            &mut midpoint_rng(),
        );

        // Every enemy round is forfeited: stunned in the player pass, and
        // re-stunned each round after the expiry tick.
        assert!(outcome
            .log
            .iter()
            .any(|e| matches!(e, CombatEvent::ActionForfeited { name, status }
                if name == "Goblin" && *status == StatusKind::Stunned)));
        assert!(!outcome
            .log
            .iter()
            .any(|e| matches!(e, CombatEvent::Hit { attacker, .. } if attacker == "Goblin")));
        assert!(outcome.victory);
    }

    #[test]
    fn test_enemy_elements_never_inflict_status() {
        // Elemental triggers belong to the player side's pass. An Ice enemy
        // whose attack saturates the trigger chance still deals plain
        // damage only.
        let mut players = vec![basic_player(15, 10, 120)];
        let mut enemies = vec![basic_enemy("Frost Wraith", 1000, 5, 5_000)];
        enemies[0].element = Element::Ice;
        let outcome = resolve_combat(
            &mut players,
            &mut enemies,
            &CombatConfig::default(),
            &mut midpoint_rng(),
        );
        assert!(!players[0].has_status(StatusKind::Frozen));
        assert!(!outcome
            .log
            .iter()
            .any(|e| matches!(e, CombatEvent::StatusApplied { .. })));
    }

    #[test]
    fn test_elemental_burn_applies_with_saturated_chance() {
        // Attack 1000 pushes the elemental chance above 1.0.
        let mut players = vec![basic_player(1000, 10, 500)];
        players[0].element = Element::Fire;
        let mut enemies = vec![basic_enemy("Troll", 10, 5, 5_000)];
        let outcome = resolve_combat(
            &mut players,
            &mut enemies,
            &CombatConfig::default(),
            &mut midpoint_rng(),
        );
        assert!(outcome
            .log
            .iter()
            .any(|e| matches!(e, CombatEvent::StatusApplied { target, status, .. }
                if target == "Troll" && *status == StatusKind::Burn)));
    }

    #[test]
    fn test_party_battle_terminates_and_settles_invariants() {
        let mut players = vec![
            basic_player(15, 10, 120),
            basic_enemy("Aelien", 12, 8, 100),
            basic_enemy("Branwen", 9, 6, 90),
        ];
        players[1].element = Element::Lightning;
        let mut enemies = vec![
            basic_enemy("Goblin", 8, 4, 60),
            basic_enemy("Slime", 6, 2, 45),
            basic_enemy("Skeleton", 10, 5, 70),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let outcome = resolve_combat(&mut players, &mut enemies, &CombatConfig::default(), &mut rng);

        assert!(outcome.rounds > 0);
        for actor in players.iter().chain(enemies.iter()) {
            assert!(actor.health <= actor.max_health);
            assert_eq!(actor.alive, actor.health > 0, "{} not settled", actor.name);
        }
        // Exactly one side is wiped out.
        assert_ne!(side_has_living(&players), side_has_living(&enemies));
        assert_eq!(outcome.victory, side_has_living(&players));
    }

    #[test]
    fn test_element_advantage_formula_config() {
        let mut players = vec![basic_player(15, 10, 120)];
        players[0].element = Element::Water;
        let mut enemies = vec![basic_enemy("Ember Imp", 10, 5, 30)];
        enemies[0].element = Element::Fire;
        let config = CombatConfig {
            damage_formula: DamageFormula::ElementAdvantage,
        };
        let outcome = resolve_combat(&mut players, &mut enemies, &config, &mut midpoint_rng());
        // Water over Fire: (15 - 5) * 1.5 = 15 damage per hit, 2 rounds.
        assert!(outcome.victory);
        assert_eq!(outcome.rounds, 2);
    }

    #[test]
    fn test_trigger_chance_formula() {
        assert!((elemental_trigger_chance(15) - 0.115).abs() < 1e-12);
        assert!((elemental_trigger_chance(0) - 0.10).abs() < 1e-12);
    }
}
