//! Interactive menu for managing trainers and starting battles.
//!
//! The session is generic over its input and output so that it can be
//! driven from a terminal or from a scripted buffer in tests. Bad input never
//! ends the session: the current action is abandoned with a message and the
//! menu is shown again. End of input behaves like choosing "Quit".

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use arena_core::{BattleEngine, Combatant, Element, RosterError, Trainer};
use console::style;

use crate::display;

const MENU: &[&str] = &[
    "1. Create trainer",
    "2. Add creature",
    "3. List trainers",
    "4. Battle",
    "0. Quit",
];

/// State of one interactive run.
pub struct Session<R, W> {
    input: R,
    output: W,
    trainers: Vec<Trainer>,
    engine: BattleEngine,
    finished: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, engine: BattleEngine) -> Self {
        Self {
            input,
            output,
            trainers: Vec::new(),
            engine,
            finished: false,
        }
    }

    pub fn trainers(&self) -> &[Trainer] {
        &self.trainers
    }

    /// Shows the menu until the user quits or input runs out.
    pub fn run(&mut self) -> Result<()> {
        tracing::debug!("interactive session started");

        while !self.finished {
            self.show_menu()?;
            let Some(option) = self.prompt("Option: ")? else {
                break;
            };

            match option.as_str() {
                "1" => self.create_trainer()?,
                "2" => self.add_creature()?,
                "3" => self.list_trainers()?,
                "4" => self.battle()?,
                "0" => self.finished = true,
                other => self.error(&format!("Invalid option '{other}'"))?,
            }
        }

        tracing::debug!(trainers = self.trainers.len(), "interactive session ended");
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", style("=== MENU ===").bold())?;
        for entry in MENU {
            writeln!(self.output, "{entry}")?;
        }
        Ok(())
    }

    fn create_trainer(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Trainer name: ")? else {
            return Ok(());
        };
        if name.is_empty() {
            return self.error("Trainer name must not be blank");
        }

        tracing::info!(trainer = %name, "trainer created");
        self.trainers.push(Trainer::new(name));
        self.say("Trainer created!")
    }

    fn add_creature(&mut self) -> Result<()> {
        if self.trainers.is_empty() {
            return self.error("Create a trainer first!");
        }

        writeln!(self.output)?;
        writeln!(self.output, "Trainers:")?;
        for (i, trainer) in self.trainers.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, trainer.name())?;
        }
        let Some(trainer_index) = self.choose("Choose", self.trainers.len())? else {
            return Ok(());
        };

        let Some(name) = self.prompt("Creature name: ")? else {
            return Ok(());
        };

        writeln!(self.output, "1. Fire  2. Ice  3. Lightning")?;
        let Some(kind) = self.prompt("Type: ")? else {
            return Ok(());
        };
        let Some(element) = parse_element_choice(&kind) else {
            return self.error(&format!("Unknown type '{kind}'"));
        };

        let combatant = Combatant::new(name, element);
        let trainer = &mut self.trainers[trainer_index];
        match trainer.add_combatant(combatant) {
            Ok(()) => {
                tracing::info!(trainer = trainer.name(), %element, "creature added");
                self.say("Creature added!")
            }
            Err(err) => {
                tracing::warn!(%err, "creature rejected");
                self.error(&err.to_string())
            }
        }
    }

    fn list_trainers(&mut self) -> Result<()> {
        if self.trainers.is_empty() {
            return self.say("No trainers yet.");
        }
        for trainer in &self.trainers {
            writeln!(self.output)?;
            for line in display::roster_lines(trainer) {
                writeln!(self.output, "{line}")?;
            }
        }
        Ok(())
    }

    fn battle(&mut self) -> Result<()> {
        if self.trainers.len() < 2 {
            return self.error("Need 2 trainers!");
        }

        let Some(first) = self.choose_combatant(1)? else {
            return Ok(());
        };
        let Some(second) = self.choose_combatant(2)? else {
            return Ok(());
        };

        let (a, b) = match combatant_pair(&mut self.trainers, first, second) {
            Ok(pair) => pair,
            Err(err) => return write_error(&mut self.output, &pair_error_message(&err)),
        };

        match self.engine.fight(a, b) {
            Ok(report) => {
                writeln!(self.output)?;
                for line in display::battle_lines(&report, a, b) {
                    if line.starts_with("===") {
                        writeln!(self.output, "{}", style(line).bold())?;
                    } else {
                        writeln!(self.output, "{line}")?;
                    }
                }
                Ok(())
            }
            Err(err) => write_error(&mut self.output, &err.to_string()),
        }
    }

    /// Asks for a trainer and one of its creatures; returns 0-based indices.
    fn choose_combatant(&mut self, slot: usize) -> Result<Option<(usize, usize)>> {
        let Some(trainer) = self.choose(&format!("Trainer {slot}"), self.trainers.len())? else {
            return Ok(None);
        };

        let roster_len = self.trainers[trainer].len();
        if roster_len == 0 {
            let message = format!("{} has no creatures", self.trainers[trainer].name());
            self.error(&message)?;
            return Ok(None);
        }

        let Some(combatant) = self.choose("Creature", roster_len)? else {
            return Ok(None);
        };
        Ok(Some((trainer, combatant)))
    }

    /// Prompts for a number in `1..=len` and returns it 0-based.
    fn choose(&mut self, label: &str, len: usize) -> Result<Option<usize>> {
        let Some(answer) = self.prompt(&format!("{label} (1-{len}): "))? else {
            return Ok(None);
        };
        match answer.parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => Ok(Some(n - 1)),
            _ => {
                self.error(&format!("Invalid choice '{answer}'"))?;
                Ok(None)
            }
        }
    }

    /// Writes `label` and reads one trimmed line. `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            self.finished = true;
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", style(message).green())?;
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        write_error(&mut self.output, message)
    }
}

fn write_error(output: &mut impl Write, message: &str) -> Result<()> {
    writeln!(output, "{}", style(format!("Error: {message}")).red())?;
    Ok(())
}

/// Accepts the menu number (1-3) or the element name.
fn parse_element_choice(choice: &str) -> Option<Element> {
    match choice {
        "1" => Some(Element::Fire),
        "2" => Some(Element::Ice),
        "3" => Some(Element::Lightning),
        other => other.parse().ok(),
    }
}

/// Renders a pairing error with the 1-based creature numbers shown in the menu.
fn pair_error_message(err: &RosterError) -> String {
    match err {
        RosterError::SameCombatant { index } => {
            format!("creature {} cannot battle itself", index + 1)
        }
        RosterError::NoSuchCombatant { trainer, index, len } => {
            format!("{trainer} has no creature {} (roster size: {len})", index + 1)
        }
        other => other.to_string(),
    }
}

/// Borrows two combatants addressed by (trainer, slot) mutably.
///
/// Both may belong to the same trainer as long as the slots differ.
fn combatant_pair(
    trainers: &mut [Trainer],
    (first_trainer, first_slot): (usize, usize),
    (second_trainer, second_slot): (usize, usize),
) -> Result<(&mut Combatant, &mut Combatant), RosterError> {
    if first_trainer == second_trainer {
        return trainers[first_trainer].pair_mut(first_slot, second_slot);
    }

    let low = first_trainer.min(second_trainer);
    let high = first_trainer.max(second_trainer);
    let (head, tail) = trainers.split_at_mut(high);
    let (low_trainer, high_trainer) = (&mut head[low], &mut tail[0]);
    let (first, second) = if first_trainer < second_trainer {
        (low_trainer, high_trainer)
    } else {
        (high_trainer, low_trainer)
    };
    Ok((
        first.combatant_mut(first_slot)?,
        second.combatant_mut(second_slot)?,
    ))
}
