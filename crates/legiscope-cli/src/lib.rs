// NOTE: Client Architecture
//
// Why a presenter/view split (not print from handlers)?
// - Every command supports --format json; serializing the same view model
//   the plain renderer consumes keeps the two outputs in lockstep
// - Rendering stays testable without capturing stdout
//
// Why client-side truncation (RENDER_CAP)?
// - The backend returns full lists and the client caps what it renders,
//   matching the dashboard this CLI replaces; filters narrow results
//   server-side, the cap only bounds terminal output
//
// Why is the profile editor the only stateful surface?
// - Everything else is fetch-render-exit; only the KOM draft lives between
//   keystrokes, so all mutable state is confined to legiscope-editor and
//   the TUI loop around it

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod presentation;
mod tui;

pub use args::{
    Cli, Commands, CommissionCommand, OutputFormat, PoliticianCommand, ProfileCommand,
};
pub use commands::run;
