//! User interface components and views.
//!
//! This module contains all TUI rendering logic: the artwork table, the
//! select-rows prompt and the help screen.

mod components;
pub mod theme;
mod views;

pub use components::{
    render_context_help, KeyContext, LoadingIndicator, SelectRowsAction, SelectRowsPrompt,
};
pub use views::{ArtworkTableView, HelpView};
