//! egui widgets for the editor toolbar.
//!
//! The widgets only read the toolbar model and report what was clicked.
//! [`ToolbarIntent::apply`] feeds the click back into `Editor::action`, and
//! [`editor_toolbar`] does both for one frame.

pub mod ui;

pub use ui::toolbar::{
    ToolbarIntent, ToolbarWidgetsConfig, editor_toolbar, toolbar_panel, toolbar_widgets,
};
