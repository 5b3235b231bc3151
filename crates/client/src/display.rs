//! Text rendering of combatants, rosters and battle logs.
//!
//! Everything here returns plain strings; coloring is applied by the caller
//! on whole lines.

use arena_core::{BattleEvent, BattleReport, Combatant, Side, Trainer};

/// One-line summary: `Ignis (fire) - Health: 100 | Energy: 100 | Power: 25 [healthy]`
pub fn combatant_line(combatant: &Combatant) -> String {
    format!(
        "{} ({}) - Health: {} | Energy: {} | Power: {} [{}]",
        combatant.name(),
        combatant.element(),
        combatant.health(),
        combatant.energy(),
        combatant.power(),
        combatant.status(),
    )
}

/// Trainer header followed by numbered combatants (1-based).
pub fn roster_lines(trainer: &Trainer) -> Vec<String> {
    let mut lines = vec![format!(
        "Trainer: {} ({}/{})",
        trainer.name(),
        trainer.len(),
        arena_core::BattleConfig::ROSTER_CAPACITY
    )];
    if trainer.is_empty() {
        lines.push("  (no creatures)".to_string());
    }
    lines.extend(
        trainer
            .combatants()
            .iter()
            .enumerate()
            .map(|(i, combatant)| format!("  {}. {}", i + 1, combatant_line(combatant))),
    );
    lines
}

/// Describes a single battle event using the combatants' names.
pub fn event_line(event: &BattleEvent, first: &Combatant, second: &Combatant) -> String {
    let name = |side: Side| match side {
        Side::First => first.name(),
        Side::Second => second.name(),
    };

    match event {
        BattleEvent::Attack {
            attacker,
            raw_damage,
            applied_damage,
            advantage,
            defender_health,
            ..
        } => {
            let bonus = if *advantage { " (super effective!)" } else { "" };
            format!(
                "{} dealt {} damage to {}{} [raw {}] -> {} health left",
                name(*attacker),
                applied_damage,
                name(attacker.opponent()),
                bonus,
                raw_damage,
                defender_health,
            )
        }
        BattleEvent::Exhausted {
            side, energy_after, ..
        } => format!(
            "{} is out of energy! Recovers to {} energy",
            name(*side),
            energy_after
        ),
        BattleEvent::Defeated { side, .. } => format!("{} was defeated!", name(*side)),
    }
}

/// Full battle transcript: header, turn blocks and the winner banner.
pub fn battle_lines(report: &BattleReport, first: &Combatant, second: &Combatant) -> Vec<String> {
    let mut lines = vec![
        "=== BATTLE ===".to_string(),
        format!("{} VS {}", first.name(), second.name()),
    ];

    let mut current_turn = 0;
    for event in &report.events {
        if event.turn() != current_turn {
            current_turn = event.turn();
            lines.push(String::new());
            lines.push(format!("--- Turn {current_turn} ---"));
        }
        lines.push(event_line(event, first, second));
    }

    lines.push(String::new());
    lines.push(winner_banner(report.winner_of(first, second)));
    lines
}

pub fn winner_banner(winner: &Combatant) -> String {
    format!("=== WINNER: {} ===", winner.name())
}
