//! Application views (screens).

mod artworks;
mod help;

pub use artworks::ArtworkTableView;
pub use help::HelpView;
