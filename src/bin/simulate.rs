//! Headless Adventure Simulator
//!
//! Drives the core library end-to-end without any UI: rolls a player and a
//! party, then loops quest -> encounter -> rewards, printing the narrated
//! combat log and a final summary. Deterministic for a given seed.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Options:
//!   --seed N      RNG seed (default: 42)
//!   --quests N    Quests to attempt (default: 10)
//!   --party N     NPC companions to recruit (default: 2)
//!   --quiet       Only the final summary

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use realms::actor::{Actor, ClassKind, EquipSlot};
use realms::combat::{resolve_combat, CombatConfig};
use realms::core::elements::{Alignment, Element};
use realms::gen::{
    archetype_base_stats, estimate_success_chance, generate_enemy, generate_npc, generate_quest,
    health_potion, shop_stock,
};
use realms::progression::{
    apply_level_progression, apply_rank_progression, handle_shared_quest, party_morale,
};

struct SimConfig {
    seed: u64,
    quests: u32,
    party: usize,
    quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            quests: 10,
            party: 2,
            quiet: false,
        }
    }
}

fn parse_args() -> SimConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" if i + 1 < args.len() => {
                config.seed = args[i + 1].parse().unwrap_or(config.seed);
                i += 2;
            }
            "--quests" if i + 1 < args.len() => {
                config.quests = args[i + 1].parse().unwrap_or(config.quests);
                i += 2;
            }
            "--party" if i + 1 < args.len() => {
                config.party = args[i + 1].parse().unwrap_or(config.party);
                i += 2;
            }
            "--quiet" => {
                config.quiet = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown option: {other}");
                std::process::exit(1);
            }
        }
    }
    config
}

/// Archetypes cycled through as opposition, roughly by menace.
const ENCOUNTER_TABLE: [&str; 6] = [
    "Slime",
    "Goblin",
    "Skeleton",
    "Harpy",
    "Werewolf",
    "Dragon Wyrmling",
];

fn main() {
    let config = parse_args();
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    let mut player = Actor::new_player(
        "Hero".to_string(),
        ClassKind::Warrior,
        Element::Fire,
        Alignment::NeutralGood,
    );
    // Starter kit from the shop catalog.
    let stock = shop_stock();
    player.equip(stock[6].clone(), EquipSlot::Weapon);
    player.equip(stock[1].clone(), EquipSlot::Armor);
    player.inventory.push(health_potion());

    let mut party: Vec<Actor> = (0..config.party).map(|_| generate_npc(&mut rng)).collect();
    if !config.quiet {
        println!(
            "{} the {} sets out with {} companion(s), morale {:.1}",
            player.name,
            player.player.as_ref().map(|p| p.class.name()).unwrap_or(""),
            party.len(),
            party_morale(&party)
        );
    }

    let mut victories = 0;
    for quest_index in 0..config.quests {
        let rank = player.player.as_ref().map(|p| p.rank).unwrap_or_default();
        let quest = generate_quest(rank, &mut rng);
        if !config.quiet {
            println!(
                "\n=== Quest {}: {} (difficulty {}, est. {}%)",
                quest_index + 1,
                quest.description,
                quest.difficulty,
                estimate_success_chance(&player, &quest)
            );
        }

        let archetype = ENCOUNTER_TABLE[(rank.value() as usize - 1).min(ENCOUNTER_TABLE.len() - 1)];
        let (health, attack, defense, magic) = archetype_base_stats(archetype, player.level);
        let mut enemies = vec![generate_enemy(archetype, health, attack, defense, magic, &mut rng)];

        let mut side = Vec::with_capacity(1 + party.len());
        side.push(player.clone());
        side.extend(party.iter().cloned());
        let outcome = resolve_combat(&mut side, &mut enemies, &CombatConfig::default(), &mut rng);
        if !config.quiet {
            for event in &outcome.log {
                println!("  {}", event.narrate());
            }
        }

        // Write combat results back to the persistent roster.
        let mut survivors = side.into_iter();
        player = survivors.next().unwrap_or(player);
        party = survivors.filter(|npc| npc.alive).collect();
        if !player.alive {
            println!("\n{} has fallen. The tale ends here.", player.name);
            break;
        }

        let mut quest = quest;
        quest.success = Some(outcome.victory);
        if outcome.victory {
            victories += 1;
            player.gold += quest.rewards.gold;
            for item in quest.rewards.items.clone() {
                player.inventory.push(item);
            }
            let report = apply_level_progression(&mut player, quest.rewards.exp);
            if report.levels_gained > 0 && !config.quiet {
                println!("  {} reaches level {}!", player.name, report.new_level);
            }
            if apply_rank_progression(&mut player, quest.difficulty) && !config.quiet {
                let rank = player.player.as_ref().map(|p| p.rank).unwrap_or_default();
                println!("  {} is promoted to rank {}!", player.name, rank.name());
            }
            if let Some(player_data) = player.player.as_mut() {
                player_data.completed_quests += 1;
            }
        }
        for npc in party.iter_mut() {
            handle_shared_quest(&mut player, npc, &quest, &mut rng);
        }
    }

    let rank = player.player.as_ref().map(|p| p.rank).unwrap_or_default();
    println!(
        "\nSummary: seed={} quests={} victories={} level={} rank={} gold={} party={} morale={:.1}",
        config.seed,
        config.quests,
        victories,
        player.level,
        rank.name(),
        player.gold,
        party.len(),
        party_morale(&party)
    );
}
