//! Subcommands of the `arena` binary.

mod battle;
mod play;
mod presets;

pub use battle::Battle;
pub use play::Play;
pub use presets::Presets;
