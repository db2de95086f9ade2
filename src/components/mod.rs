//! UI components.

pub mod force_graph;
mod search_bar;
mod side_panel;

pub use search_bar::SearchBar;
pub use side_panel::SidePanel;
