//! Reusable UI components.

mod help_bar;
mod input;
mod loading;
mod select_rows;

pub use help_bar::{render_context_help, KeyContext};
pub use loading::LoadingIndicator;
pub use select_rows::{SelectRowsAction, SelectRowsPrompt};
