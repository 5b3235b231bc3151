//! Interactive menu on the terminal.

use std::io;

use anyhow::Result;
use arena_core::BattleEngine;
use clap::Parser;

use crate::config::CliConfig;
use crate::session::Session;

/// Manage trainers and run battles from an interactive menu
#[derive(Parser, Debug)]
pub struct Play {
    /// Give up on a battle after this many turns, 0 for no limit (overrides ARENA_MAX_TURNS)
    #[arg(long)]
    pub max_turns: Option<u32>,
}

impl Play {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let engine = BattleEngine::new(config.battle_config(self.max_turns));
        let stdin = io::stdin();
        let stdout = io::stdout();
        Session::new(stdin.lock(), stdout.lock(), engine).run()
    }
}
