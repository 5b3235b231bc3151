//! One-off battle between two combatants given on the command line.

use std::io::Write;

use anyhow::{Context, Result};
use arena_core::BattleEngine;
use clap::Parser;
use console::style;

use crate::args::CombatantArg;
use crate::config::CliConfig;
use crate::display;

/// Run a battle between two creatures
#[derive(Parser, Debug)]
pub struct Battle {
    /// First creature as NAME:ELEMENT (acts first every turn), e.g. Ignis:fire
    pub first: CombatantArg,

    /// Second creature as NAME:ELEMENT, e.g. Frost:ice
    pub second: CombatantArg,

    /// Give up after this many turns, 0 for no limit (overrides ARENA_MAX_TURNS)
    #[arg(long)]
    pub max_turns: Option<u32>,

    /// Print the battle report as JSON instead of the turn log
    #[arg(long)]
    pub json: bool,
}

impl Battle {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let stdout = std::io::stdout();
        self.run(config, &mut stdout.lock())
    }

    pub fn run(&self, config: &CliConfig, out: &mut impl Write) -> Result<()> {
        let mut first = self.first.build();
        let mut second = self.second.build();

        let engine = BattleEngine::new(config.battle_config(self.max_turns));
        tracing::debug!(config = ?engine.config(), "running battle");

        let report = engine
            .fight(&mut first, &mut second)
            .context("battle did not finish")?;

        if self.json {
            serde_json::to_writer_pretty(&mut *out, &report)
                .context("failed to serialize battle report")?;
            writeln!(out)?;
            return Ok(());
        }

        for line in display::battle_lines(&report, &first, &second) {
            if line.starts_with("===") {
                writeln!(out, "{}", style(line).bold())?;
            } else {
                writeln!(out, "{line}")?;
            }
        }
        writeln!(out)?;
        for combatant in [&first, &second] {
            writeln!(out, "{}", display::combatant_line(combatant))?;
        }
        Ok(())
    }
}
