//! Editor-facing features: commands, quick fixes, hover.

pub mod backend;
pub mod code_actions;
pub mod commands;
pub mod diagnostics;
mod handlers;
pub mod host;
pub mod hover;
pub mod phrase;
pub mod state;
