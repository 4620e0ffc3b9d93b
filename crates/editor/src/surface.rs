//! What the editor needs from its host.

use core_types::ViewMode;
use selection::{HostError, SelectionHost};
use std::time::Duration;

/// Delay before a requested focus change takes effect.
pub const FOCUS_DELAY: Duration = Duration::from_millis(10);

/// Where a deferred focus should land.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// The rich editing surface.
    Surface,
    /// The plain backing field.
    Field,
    /// The primary control of the open dialog.
    Dialog,
}

/// A host-provided editable region plus the plain field it is bound to.
pub trait EditingSurface: SelectionHost {
    // =========================================================================
    // Content
    // =========================================================================

    /// Serialized markup of the surface body.
    fn markup(&self) -> String;

    fn set_markup(&mut self, markup: &str);

    /// Run a host-native editing command.
    fn exec_command(&mut self, command: &str, arg: Option<&str>) -> Result<(), HostError>;

    // =========================================================================
    // Backing field
    // =========================================================================

    fn field_value(&self) -> String;

    fn set_field_value(&mut self, value: &str);

    // =========================================================================
    // Presentation
    // =========================================================================

    /// Replace the surface document with `html` and make its body editable.
    fn load_document(&mut self, html: &str);

    /// Show the surface for [`ViewMode::Rich`], the field for
    /// [`ViewMode::Plain`].
    fn show_view(&mut self, mode: ViewMode);

    /// Ask the host to call back into
    /// [`Editor::run_deferred_focus`](crate::Editor::run_deferred_focus)
    /// after `delay`. Fire and forget.
    fn schedule_focus(&mut self, target: FocusTarget, delay: Duration);

    fn focus(&mut self, target: FocusTarget);
}

/// Modal dialogs shown on behalf of procedural actions.
pub trait DialogHost {
    fn alert(&mut self, message: &str);

    /// Ask `question` with `default` filled in. `None` when cancelled.
    fn prompt(&mut self, question: &str, default: &str) -> Option<String>;
}
