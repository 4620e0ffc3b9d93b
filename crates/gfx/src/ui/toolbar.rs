use editor::{DialogHost, EditingSurface, Editor, Toolbar, ToolbarEntry, ToolbarItem};
use egui::{Button, Context, TopBottomPanel, Ui};

/// What the user asked for this frame.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ToolbarIntent {
    /// Name of the clicked action.
    pub action: Option<&'static str>,
}

impl ToolbarIntent {
    /// Run the clicked action, if any, on `editor`.
    pub fn apply<S: EditingSurface + DialogHost>(self, editor: &mut Editor<S>) {
        if let Some(action) = self.action {
            log::debug!(target: "editor.toolbar", "toolbar click {action:?}");
            editor.action(action, &[]);
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ToolbarWidgetsConfig {
    pub height: f32,
}

impl Default for ToolbarWidgetsConfig {
    fn default() -> Self {
        Self { height: 28.0 }
    }
}

/// Short button caption for the stock actions; anything else shows its title.
fn caption(item: &ToolbarItem) -> &'static str {
    match item.name {
        "bold" => "B",
        "italic" => "I",
        "underline" => "U",
        "strikethrough" => "S",
        "insertunorderedlist" => "•",
        "insertorderedlist" => "1.",
        "indent" => "→",
        "outdent" => "←",
        "undo" => "↶",
        "redo" => "↷",
        "unlink" => "⊘",
        "createlink" => "🔗",
        "urlimage" => "🖼",
        "toggleview" => "</>",
        _ => item.title,
    }
}

pub fn toolbar_panel(ctx: &Context, toolbar: &Toolbar) -> ToolbarIntent {
    let mut intent = ToolbarIntent::default();
    TopBottomPanel::top("richedit_toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            intent = toolbar_widgets(ui, toolbar, ToolbarWidgetsConfig::default());
        });
    });
    intent
}

/// Show the toolbar of `editor` for this frame and run whatever was clicked.
pub fn editor_toolbar<S: EditingSurface + DialogHost>(ctx: &Context, editor: &mut Editor<S>) {
    let intent = toolbar_panel(ctx, editor.toolbar());
    intent.apply(editor);
}

/// One button per toolbar item, in toolbar order. Disabled items render
/// disabled, active items render selected.
pub fn toolbar_widgets(ui: &mut Ui, toolbar: &Toolbar, config: ToolbarWidgetsConfig) -> ToolbarIntent {
    let mut intent = ToolbarIntent::default();
    let h = config.height.max(1.0);

    for entry in toolbar.entries() {
        let item = match entry {
            ToolbarEntry::Item(item) => item,
            ToolbarEntry::Separator => {
                ui.separator();
                continue;
            }
        };
        let button = Button::new(caption(item))
            .selected(item.is_active())
            .min_size([h, h].into());
        if ui
            .add_enabled(item.state.enabled, button)
            .on_hover_text(item.tooltip())
            .clicked()
        {
            intent.action = Some(item.name);
        }
    }

    intent
}
