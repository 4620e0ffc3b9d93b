use crate::{BODY, ExecRecord, FakeSurface, NodeData};
use core_types::ViewMode;
use editor::{EditingSurface, FocusTarget};
use selection::HostError;
use std::time::Duration;

/// Inner markup of the `<body>` element of a full document, if present.
fn body_content(document: &str) -> Option<&str> {
    let lower = document.to_ascii_lowercase();
    let open = lower.find("<body")?;
    let start = open + lower[open..].find('>')? + 1;
    let end = lower.rfind("</body>")?;
    document.get(start..end)
}

impl EditingSurface for FakeSurface {
    fn markup(&self) -> String {
        self.inner_markup(BODY)
    }

    fn set_markup(&mut self, markup: &str) {
        for child in self.child_list(BODY).to_vec() {
            self.detach(child);
        }
        if !markup.is_empty() {
            self.append(BODY, NodeData::Raw(markup.to_string()));
        }
        self.ranges.clear();
    }

    fn exec_command(&mut self, command: &str, arg: Option<&str>) -> Result<(), HostError> {
        self.journal.push(ExecRecord {
            command: command.to_string(),
            arg: arg.map(str::to_string),
        });
        if let Some(mut hook) = self.exec_hook.take() {
            hook(self, command, arg);
            if self.exec_hook.is_none() {
                self.exec_hook = Some(hook);
            }
        }
        Ok(())
    }

    fn field_value(&self) -> String {
        self.field.clone()
    }

    fn set_field_value(&mut self, value: &str) {
        self.field_writes += 1;
        self.field = value.to_string();
    }

    fn load_document(&mut self, html: &str) {
        self.document = Some(html.to_string());
        let content = body_content(html).unwrap_or("").to_string();
        self.set_markup(&content);
    }

    fn show_view(&mut self, mode: ViewMode) {
        self.view = mode;
    }

    fn schedule_focus(&mut self, target: FocusTarget, delay: Duration) {
        self.focus_requests.push((target, delay));
    }

    fn focus(&mut self, target: FocusTarget) {
        self.focused = Some(target);
    }
}
