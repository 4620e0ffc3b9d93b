//! The editor: one editing surface, its toolbar and its view mode.

use crate::action::{ActionCommand, ActionRegistry};
use crate::config::EditorConfig;
use crate::context::EditorContext;
use crate::dispatcher::{CommandDispatcher, Propagation};
use crate::state_sync;
use crate::surface::{DialogHost, EditingSurface, FOCUS_DELAY, FocusTarget};
use crate::toolbar::Toolbar;
use core_types::ViewMode;
use selection::{SelectionAdapter, SelectionFamily};
use std::collections::HashMap;
use std::sync::Arc;

/// Points in the editor's life at which registered hooks run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    Render,
    Attach,
    Detach,
    Focus,
    BeforeToggleView,
    ToggleView,
}

type Hook<S> = Box<dyn FnMut(&Editor<S>)>;

pub struct Editor<S> {
    pub(crate) surface: S,
    pub(crate) config: EditorConfig,
    pub(crate) registry: Arc<ActionRegistry>,
    pub(crate) dispatcher: CommandDispatcher,
    pub(crate) selection: SelectionAdapter,
    pub(crate) toolbar: Toolbar,
    pub(crate) shortcuts: HashMap<char, &'static str>,
    pub(crate) mode: ViewMode,
    attached: bool,
    pub(crate) style_with_css_pending: bool,
    hooks: HashMap<Lifecycle, Vec<Hook<S>>>,
}

impl<S: EditingSurface + DialogHost> Editor<S> {
    /// Bind an editor to `surface`. Nothing is shown until [`Editor::render`].
    pub fn new(surface: S, config: EditorConfig, registry: Arc<ActionRegistry>) -> Self {
        let toolbar = Toolbar::build(&registry, &config.action_slots());
        let shortcuts = toolbar
            .items()
            .filter_map(|item| item.shortcut.map(|key| (key, item.name)))
            .collect();
        let dispatcher = CommandDispatcher::new(config.cleanup);
        Self {
            surface,
            config,
            registry,
            dispatcher,
            selection: SelectionAdapter::default(),
            toolbar,
            shortcuts,
            mode: ViewMode::Rich,
            attached: false,
            style_with_css_pending: false,
            hooks: HashMap::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<ActionRegistry> {
        &self.registry
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn selection(&self) -> &SelectionAdapter {
        &self.selection
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Run `hook` every time `event` fires.
    pub fn on(&mut self, event: Lifecycle, hook: impl FnMut(&Editor<S>) + 'static) {
        self.hooks.entry(event).or_default().push(Box::new(hook));
    }

    fn fire(&mut self, event: Lifecycle) {
        let Some(mut hooks) = self.hooks.remove(&event) else {
            return;
        };
        for hook in &mut hooks {
            hook(self);
        }
        self.hooks.insert(event, hooks);
    }

    /// Attach the surface and fire [`Lifecycle::Render`].
    pub fn render(&mut self) {
        self.attach();
        self.fire(Lifecycle::Render);
    }

    /// Load the surface document from the field's content and switch to the
    /// rich view.
    pub fn attach(&mut self) {
        self.mode = ViewMode::Rich;
        let content = markup::normalize(&self.surface.field_value(), &self.config.cleanup);
        let html = self.config.document_html(&content);
        self.surface.load_document(&html);
        self.surface.show_view(ViewMode::Rich);

        self.selection = SelectionAdapter::probe(&mut self.surface);
        self.style_with_css_pending = self.selection.family() == Some(SelectionFamily::Ranges);
        self.attached = true;
        log::debug!(
            target: "editor",
            "attached, selection family {:?}",
            self.selection.family()
        );

        self.fire(Lifecycle::Attach);
        self.focus();
    }

    /// Flush content into the field and give the field back to the host.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.save_content();
        self.attached = false;
        self.surface.show_view(ViewMode::Plain);
        self.fire(Lifecycle::Detach);
    }

    /// Request focus for the current view after [`FOCUS_DELAY`].
    pub fn focus(&mut self) {
        let target = match self.mode {
            ViewMode::Rich => FocusTarget::Surface,
            ViewMode::Plain => FocusTarget::Field,
        };
        self.surface.schedule_focus(target, FOCUS_DELAY);
    }

    /// Called by the host when a scheduled focus comes due.
    pub fn run_deferred_focus(&mut self, target: FocusTarget) {
        self.surface.focus(target);
        if target != FocusTarget::Dialog {
            self.fire(Lifecycle::Focus);
        }
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Normalized surface content.
    pub fn content(&self) -> String {
        markup::normalize(&self.surface.markup(), &self.config.cleanup)
    }

    pub fn set_content(&mut self, content: &str) {
        self.surface.set_markup(content);
    }

    /// Copy normalized content into the field. Only the rich view has
    /// content to save.
    pub fn save_content(&mut self) {
        if self.mode == ViewMode::Rich {
            self.dispatcher.flush(&mut self.surface);
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Run the action called `name`. Unknown names are ignored.
    pub fn action(&mut self, name: &str, args: &[String]) {
        let Some(action) = self.registry.get(name).copied() else {
            log::debug!(target: "editor", "ignoring unknown action {name:?}");
            return;
        };
        match action.command {
            ActionCommand::Declarative(command) => {
                self.focus();
                self.execute(command, args.first().map(String::as_str));
                if self.mode == ViewMode::Rich {
                    self.check_states();
                }
            }
            ActionCommand::Procedural(handler) => handler(self, args),
        }
    }

    /// Run a surface command through the dispatcher. Commands only reach the
    /// surface in the rich view.
    pub fn execute(&mut self, command: &str, arg: Option<&str>) -> Propagation {
        if self.mode != ViewMode::Rich {
            log::debug!(target: "editor.command", "{command:?} ignored in plain view");
            return Propagation::Stop;
        }
        self.dispatcher.execute(&mut self.surface, command, arg)
    }

    /// Recompute toolbar active states from the current selection.
    pub fn check_states(&mut self) {
        if !self.config.toolbar {
            return;
        }
        let anchor = self.selection.nearest_element(&mut self.surface);
        state_sync::check_states(&self.surface, anchor, &self.registry, &mut self.toolbar);
    }

    /// Switch between the rich surface and the plain field.
    pub fn toggle_view(&mut self) {
        self.fire(Lifecycle::BeforeToggleView);
        let next = self.mode.toggled();
        if next == ViewMode::Plain {
            self.save_content();
        }
        self.mode = next;
        self.surface.show_view(next);
        if next == ViewMode::Rich {
            let content = markup::normalize(&self.surface.field_value(), &self.config.cleanup);
            self.set_content(&content);
        }
        self.fire(Lifecycle::ToggleView);
        self.focus();
    }

    // =========================================================================
    // Dialogs
    // =========================================================================

    fn with_dialog<R>(&mut self, action: &str, show: impl FnOnce(&mut S) -> R) -> R {
        let range = self.selection.current_range(&mut self.surface);
        self.toolbar.disable(Some(action));
        self.surface.schedule_focus(FocusTarget::Dialog, FOCUS_DELAY);

        let result = show(&mut self.surface);

        self.toolbar.enable();
        if let Some(range) = range {
            self.selection.set_range(&mut self.surface, &range);
        }
        result
    }
}

impl<S: EditingSurface + DialogHost> EditorContext for Editor<S> {
    fn mode(&self) -> ViewMode {
        self.mode
    }

    fn toolbar_mut(&mut self) -> &mut Toolbar {
        &mut self.toolbar
    }

    fn selection_is_collapsed(&mut self) -> bool {
        self.selection.is_collapsed(&mut self.surface)
    }

    fn selected_text(&mut self) -> String {
        self.selection.selected_text(&mut self.surface)
    }

    fn execute(&mut self, command: &str, arg: Option<&str>) -> Propagation {
        Editor::execute(self, command, arg)
    }

    fn toggle_view(&mut self) {
        Editor::toggle_view(self);
    }

    fn open_alert(&mut self, action: &str, message: &str) {
        self.with_dialog(action, |surface| surface.alert(message));
    }

    fn open_prompt(&mut self, action: &str, question: &str, default: &str) -> Option<String> {
        self.with_dialog(action, |surface| surface.prompt(question, default))
    }
}
