use crate::dispatcher::Propagation;
use crate::toolbar::Toolbar;
use core_types::ViewMode;

/// The editor as seen by procedural action handlers.
pub trait EditorContext {
    fn mode(&self) -> ViewMode;

    fn toolbar_mut(&mut self) -> &mut Toolbar;

    fn selection_is_collapsed(&mut self) -> bool;

    fn selected_text(&mut self) -> String;

    fn execute(&mut self, command: &str, arg: Option<&str>) -> Propagation;

    fn toggle_view(&mut self);

    /// Show `message` on behalf of `action`. The toolbar is disabled except
    /// for `action` while the alert is open.
    fn open_alert(&mut self, action: &str, message: &str);

    /// Ask `question` on behalf of `action`. The selection is captured when
    /// the prompt opens and restored when it closes.
    fn open_prompt(&mut self, action: &str, question: &str, default: &str) -> Option<String>;
}
