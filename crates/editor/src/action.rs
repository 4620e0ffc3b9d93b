//! Action descriptors and the registry they live in.

use crate::context::EditorContext;
use crate::toolbar::ToolbarItem;
use core_types::NodeRef;
use selection::NodeTree;
use std::collections::HashMap;

/// Handler of a procedural action.
pub type ActionHandler = fn(&mut dyn EditorContext, &[String]);

/// Custom state check: receives the document, the anchor element and the
/// action's toolbar item.
pub type StateCheck = fn(&dyn NodeTree, NodeRef, &mut ToolbarItem);

/// What running an action does.
#[derive(Clone, Copy)]
pub enum ActionCommand {
    /// Forward the named command to the editing surface.
    Declarative(&'static str),
    /// Run a handler with the editor, for multi-step actions such as ones
    /// that ask the user something first.
    Procedural(ActionHandler),
}

impl std::fmt::Debug for ActionCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionCommand::Declarative(command) => f.debug_tuple("Declarative").field(command).finish(),
            ActionCommand::Procedural(_) => f.write_str("Procedural(..)"),
        }
    }
}

/// How a toolbar item learns that it should render active.
#[derive(Clone, Copy)]
pub enum StateMatcher {
    /// Active when the anchor or an ancestor has one of `tags`; otherwise
    /// when a computed style in `css` contains the given value, looking no
    /// further up than the nearest block element.
    Match {
        tags: &'static [&'static str],
        css: &'static [(&'static str, &'static str)],
    },
    Custom(StateCheck),
}

impl std::fmt::Debug for StateMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateMatcher::Match { tags, css } => f
                .debug_struct("Match")
                .field("tags", tags)
                .field("css", css)
                .finish(),
            StateMatcher::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ActionDescriptor {
    pub name: &'static str,
    pub title: &'static str,
    /// Ctrl+key shortcut, lowercase.
    pub shortcut: Option<char>,
    pub states: Option<StateMatcher>,
    pub command: ActionCommand,
}

impl ActionDescriptor {
    /// A declarative action whose command is its own name.
    pub const fn new(name: &'static str, title: &'static str) -> Self {
        Self {
            name,
            title,
            shortcut: None,
            states: None,
            command: ActionCommand::Declarative(name),
        }
    }

    pub const fn shortcut(mut self, key: char) -> Self {
        self.shortcut = Some(key);
        self
    }

    pub const fn tags(mut self, tags: &'static [&'static str]) -> Self {
        self.states = Some(StateMatcher::Match { tags, css: &[] });
        self
    }

    pub const fn tags_and_css(
        mut self,
        tags: &'static [&'static str],
        css: &'static [(&'static str, &'static str)],
    ) -> Self {
        self.states = Some(StateMatcher::Match { tags, css });
        self
    }

    pub const fn states(mut self, matcher: StateMatcher) -> Self {
        self.states = Some(matcher);
        self
    }

    pub const fn procedural(mut self, handler: ActionHandler) -> Self {
        self.command = ActionCommand::Procedural(handler);
        self
    }
}

/// Immutable table of actions keyed by name. Built once, then shared.
#[derive(Clone, Debug, Default)]
pub struct ActionRegistry {
    actions: HashMap<&'static str, ActionDescriptor>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `action`, replacing any action of the same name.
    pub fn with(mut self, action: ActionDescriptor) -> Self {
        self.actions.insert(action.name, action);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ActionDescriptor> {
        self.actions.get(name)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionDescriptor> {
        self.actions.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let action = ActionDescriptor::new("bold", "Bold").shortcut('b').tags(&["b", "strong"]);
        assert_eq!(action.shortcut, Some('b'));
        assert!(matches!(action.command, ActionCommand::Declarative("bold")));
        match action.states {
            Some(StateMatcher::Match { tags, css }) => {
                assert_eq!(tags, ["b", "strong"]);
                assert!(css.is_empty());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn registry_lookup_and_replace() {
        let registry = ActionRegistry::new()
            .with(ActionDescriptor::new("undo", "Undo"))
            .with(ActionDescriptor::new("undo", "Undo again"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("undo").map(|a| a.title), Some("Undo again"));
        assert!(registry.get("redo").is_none());
    }
}
