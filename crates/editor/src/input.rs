//! Host events routed into the editor.

use crate::dispatcher::Propagation;
use crate::editor::Editor;
use crate::state_sync::is_block;
use crate::surface::{DialogHost, EditingSurface};
use core_types::{NodeRef, ViewMode};
use selection::host::ancestors_inclusive;
use selection::{NodeTree, SelectionFamily};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyInput {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }

    /// Ctrl + `c`.
    pub fn ctrl(c: char) -> Self {
        Self {
            ctrl: true,
            ..Self::new(Key::Char(c))
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// Events from the rich editing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    KeyPress(KeyInput),
    KeyDown(KeyInput),
    KeyUp,
    MouseUp,
    Click(NodeRef),
    Focus,
}

/// Events from the plain field and the form around it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldEvent {
    KeyPress(KeyInput),
    LabelClick,
    Submit,
}

impl<S: EditingSurface + DialogHost> Editor<S> {
    /// Handle a surface event. [`Propagation::Stop`] asks the host to
    /// suppress the event's default action.
    pub fn handle_surface_event(&mut self, event: SurfaceEvent) -> Propagation {
        match event {
            SurfaceEvent::KeyPress(key) => self.shortcut(key),
            SurfaceEvent::KeyDown(key) => self.enter(key),
            SurfaceEvent::KeyUp | SurfaceEvent::MouseUp => {
                self.check_states();
                Propagation::Continue
            }
            SurfaceEvent::Click(node) => {
                if self.surface.tag_name(node) == Some("img") {
                    self.selection.select_node(&mut self.surface, node, false);
                }
                Propagation::Continue
            }
            SurfaceEvent::Focus => {
                if std::mem::take(&mut self.style_with_css_pending) {
                    self.execute("styleWithCSS", Some("false"));
                }
                Propagation::Continue
            }
        }
    }

    pub fn handle_field_event(&mut self, event: FieldEvent) -> Propagation {
        match event {
            FieldEvent::KeyPress(key) => self.shortcut(key),
            FieldEvent::LabelClick => {
                if !self.config.handle_label || self.mode != ViewMode::Rich {
                    return Propagation::Continue;
                }
                self.focus();
                Propagation::Stop
            }
            FieldEvent::Submit => {
                if self.config.handle_submit {
                    self.save_content();
                }
                Propagation::Continue
            }
        }
    }

    /// Ctrl+key runs the toolbar action bound to `key`, if its item is
    /// enabled.
    fn shortcut(&mut self, input: KeyInput) -> Propagation {
        let Key::Char(c) = input.key else {
            return Propagation::Continue;
        };
        if !input.ctrl {
            return Propagation::Continue;
        }
        let Some(&name) = self.shortcuts.get(&c.to_ascii_lowercase()) else {
            return Propagation::Continue;
        };
        let enabled = self.toolbar.item(name).is_some_and(|item| item.state.enabled);
        if enabled {
            self.action(name, &[]);
        }
        Propagation::Stop
    }

    fn enter(&mut self, input: KeyInput) -> Propagation {
        if input.key != Key::Enter {
            return Propagation::Continue;
        }

        if self.config.paragraphise && !input.shift {
            let Some(anchor) = self.selection.nearest_element(&mut self.surface) else {
                return Propagation::Continue;
            };
            let surface = &self.surface;
            let in_block = ancestors_inclusive(surface, anchor)
                .any(|node| surface.tag_name(node).is_some_and(is_block));
            if !in_block {
                self.execute("insertparagraph", None);
            }
            return Propagation::Continue;
        }

        // Text-range hosts insert a paragraph on Enter; a line break has to
        // be inserted by hand.
        if self.selection.family() != Some(SelectionFamily::TextRanges) {
            return Propagation::Continue;
        }
        let anchor = self.selection.nearest_element(&mut self.surface);
        let in_item = anchor.and_then(|node| self.surface.tag_name(node)) == Some("li");
        if !in_item && self.selection.current_range(&mut self.surface).is_some() {
            self.selection.insert_markup(&mut self.surface, "<br>");
            self.selection.collapse(&mut self.surface, false);
        }
        Propagation::Stop
    }
}
