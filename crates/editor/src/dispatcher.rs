//! Single-flight execution of surface commands.

use crate::surface::EditingSurface;
use markup::CleanupConfig;
use std::cell::Cell;

/// Whether the host should go on with the event's default action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    /// Handled; suppress the default action.
    Stop,
}

/// Runs one command at a time against an editing surface and copies the
/// normalized result into the backing field after each one.
///
/// A command issued while another is running (from a nested event handler,
/// say) is dropped, not queued.
#[derive(Debug, Default)]
pub struct CommandDispatcher {
    in_flight: Cell<bool>,
    cleanup: CleanupConfig,
}

/// Clears the in-flight flag when dropped.
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn enter(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl CommandDispatcher {
    pub fn new(cleanup: CleanupConfig) -> Self {
        Self {
            in_flight: Cell::new(false),
            cleanup,
        }
    }

    pub fn cleanup(&self) -> &CleanupConfig {
        &self.cleanup
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.get()
    }

    /// Run `command` on `surface`, then flush. No-op while another command
    /// is in flight. Always returns [`Propagation::Stop`].
    pub fn execute<S: EditingSurface + ?Sized>(
        &self,
        surface: &mut S,
        command: &str,
        arg: Option<&str>,
    ) -> Propagation {
        let Some(_guard) = InFlight::enter(&self.in_flight) else {
            log::debug!(target: "editor.command", "dropping re-entrant command {command:?}");
            return Propagation::Stop;
        };
        if let Err(err) = surface.exec_command(command, arg) {
            log::debug!(target: "editor.command", "{command:?} failed: {err}");
        }
        self.flush(surface);
        Propagation::Stop
    }

    /// Normalize the surface markup into the backing field.
    pub fn flush<S: EditingSurface + ?Sized>(&self, surface: &mut S) {
        let content = markup::normalize(&surface.markup(), &self.cleanup);
        surface.set_field_value(&content);
    }
}
