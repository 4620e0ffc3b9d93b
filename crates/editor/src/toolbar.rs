//! Toolbar model: which items exist, in what order, and their state.
//!
//! Rendering lives elsewhere; this is only what a renderer reads.

use crate::action::ActionRegistry;
use crate::config::ActionSlot;

/// Whether an item renders active, and with which variant (the matched tag
/// or style value) when the matcher reported one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Activation {
    #[default]
    Inactive,
    Active(Option<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolbarItemState {
    pub enabled: bool,
    pub active: Activation,
}

impl Default for ToolbarItemState {
    fn default() -> Self {
        Self {
            enabled: true,
            active: Activation::Inactive,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolbarItem {
    pub name: &'static str,
    pub title: &'static str,
    pub shortcut: Option<char>,
    pub state: ToolbarItemState,
}

impl ToolbarItem {
    /// Mark active. Disabled items stay inactive.
    pub fn activate(&mut self, variant: Option<String>) {
        if self.state.enabled {
            self.state.active = Activation::Active(variant);
        }
    }

    pub fn deactivate(&mut self) {
        self.state.active = Activation::Inactive;
    }

    pub fn enable(&mut self) {
        self.state.enabled = true;
    }

    pub fn disable(&mut self) {
        self.state.enabled = false;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state.active, Activation::Active(_))
    }

    /// Hover text: the title plus the shortcut, e.g. `Bold ( Ctrl+B )`.
    pub fn tooltip(&self) -> String {
        match self.shortcut {
            Some(key) => format!("{} ( Ctrl+{} )", self.title, key.to_ascii_uppercase()),
            None => self.title.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolbarEntry {
    Item(ToolbarItem),
    Separator,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Toolbar {
    entries: Vec<ToolbarEntry>,
}

impl Toolbar {
    /// Lay out `slots` using the actions in `registry`. Names the registry
    /// does not know are skipped.
    pub fn build(registry: &ActionRegistry, slots: &[ActionSlot]) -> Self {
        let entries = slots
            .iter()
            .filter_map(|slot| match slot {
                ActionSlot::Separator => Some(ToolbarEntry::Separator),
                ActionSlot::Action(name) => match registry.get(name) {
                    Some(action) => Some(ToolbarEntry::Item(ToolbarItem {
                        name: action.name,
                        title: action.title,
                        shortcut: action.shortcut,
                        state: ToolbarItemState::default(),
                    })),
                    None => {
                        log::debug!(target: "editor.toolbar", "skipping unknown action {name:?}");
                        None
                    }
                },
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ToolbarEntry] {
        &self.entries
    }

    pub fn items(&self) -> impl Iterator<Item = &ToolbarItem> {
        self.entries.iter().filter_map(|entry| match entry {
            ToolbarEntry::Item(item) => Some(item),
            ToolbarEntry::Separator => None,
        })
    }

    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut ToolbarItem> {
        self.entries.iter_mut().filter_map(|entry| match entry {
            ToolbarEntry::Item(item) => Some(item),
            ToolbarEntry::Separator => None,
        })
    }

    pub fn item(&self, name: &str) -> Option<&ToolbarItem> {
        self.items().find(|item| item.name == name)
    }

    pub fn item_mut(&mut self, name: &str) -> Option<&mut ToolbarItem> {
        self.items_mut().find(|item| item.name == name)
    }

    /// Disable every item except `except`, which is marked active instead.
    pub fn disable(&mut self, except: Option<&str>) {
        for item in self.items_mut() {
            if Some(item.name) == except {
                item.activate(None);
            } else {
                item.deactivate();
                item.disable();
            }
        }
    }

    pub fn enable(&mut self) {
        for item in self.items_mut() {
            item.enable();
        }
    }
}
