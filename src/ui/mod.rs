// Terminal UI using Ratatui

pub mod components;
pub mod constants;
pub mod dashboard;
pub mod events;
pub mod focus;
pub mod help;
pub mod state;

pub use dashboard::Dashboard;
pub use events::{draw, handle_key, run_ui};
pub use help::{HelpModal, HelpModalState, HelpSection};
pub use state::AppState;
