//! # editor
//!
//! The editing core behind a rich-text toolbar: it runs formatting commands
//! against a host editing surface, keeps the backing plain field in sync
//! with normalized markup, and derives toolbar item states from the current
//! selection.
//!
//! - [`Editor`]: view modes, lifecycle hooks, actions, shortcuts and dialogs
//! - [`CommandDispatcher`]: single-flight command execution plus content flush
//! - [`check_states`]: toolbar active states from the selection anchor
//! - [`ActionRegistry`]: the immutable action table, shared by `Arc`
//!
//! Hosts implement [`EditingSurface`] and [`DialogHost`]; selection access
//! goes through the `selection` crate.

mod action;
mod config;
mod context;
mod dispatcher;
mod editor;
mod error;
mod input;
mod standard;
mod state_sync;
mod surface;
mod toolbar;

pub use action::{
    ActionCommand, ActionDescriptor, ActionHandler, ActionRegistry, StateCheck, StateMatcher,
};
pub use config::{ActionSlot, EditorConfig};
pub use context::EditorContext;
pub use core_types::ViewMode;
pub use dispatcher::{CommandDispatcher, Propagation};
pub use editor::{Editor, Lifecycle};
pub use error::ConfigError;
pub use input::{FieldEvent, Key, KeyInput, SurfaceEvent};
pub use state_sync::check_states;
pub use surface::{DialogHost, EditingSurface, FOCUS_DELAY, FocusTarget};
pub use toolbar::{Activation, Toolbar, ToolbarEntry, ToolbarItem, ToolbarItemState};
