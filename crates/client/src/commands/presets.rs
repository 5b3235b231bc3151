//! Lists the starting stats of each element.

use std::io::Write;

use anyhow::Result;
use arena_core::{Element, preset_for};
use clap::Parser;
use console::style;
use strum::IntoEnumIterator;

/// Show starting stats per element
#[derive(Parser, Debug)]
pub struct Presets {}

impl Presets {
    pub fn execute(self) -> Result<()> {
        let stdout = std::io::stdout();
        self.run(&mut stdout.lock())
    }

    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let header = format!(
            "{:<10} {:>6} {:>6} {:>6}  {}",
            "element", "health", "energy", "power", "beats"
        );
        writeln!(out, "{}", style(header).bold())?;

        for element in Element::iter() {
            let stats = preset_for(element);
            writeln!(
                out,
                "{:<10} {:>6} {:>6} {:>6}  {}",
                element.as_ref(),
                stats.health,
                stats.energy,
                stats.power,
                element.beats()
            )?;
        }
        Ok(())
    }
}
