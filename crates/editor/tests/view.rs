use editor::{
    ActionRegistry, Editor, EditingSurface, EditorConfig, FieldEvent, FocusTarget, Lifecycle,
    ViewMode,
};
use markup::CleanupConfig;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use surface_test_support::FakeSurface;

const MESSY: &str = "<P>Intro<BR></P><b>x</b><span class=\"Apple-style-span\">y</span>";

fn editor_with_field(value: &str) -> Editor<FakeSurface> {
    let mut surface = FakeSurface::with_ranges();
    surface.set_field_value(value);
    Editor::new(
        surface,
        EditorConfig::default(),
        Arc::new(ActionRegistry::standard()),
    )
}

#[test]
fn attach_loads_normalized_field_into_the_document() {
    let mut editor = editor_with_field(MESSY);
    editor.render();

    let expected = markup::normalize(MESSY, &CleanupConfig::default());
    assert_eq!(editor.surface().markup(), expected);
    assert_eq!(editor.content(), expected);
    assert!(editor.is_attached());
    assert_eq!(editor.surface().shown_view(), ViewMode::Rich);

    let document = editor.surface().loaded_document().unwrap();
    assert!(document.starts_with("<html>"));
    assert!(document.contains(&expected));
}

#[test]
fn toggle_round_trip_matches_direct_normalization() {
    let mut editor = editor_with_field(MESSY);
    editor.render();
    let expected = markup::normalize(MESSY, &CleanupConfig::default());

    editor.action("toggleview", &[]);
    assert_eq!(editor.mode(), ViewMode::Plain);
    assert_eq!(editor.surface().shown_view(), ViewMode::Plain);
    assert_eq!(editor.surface().field_value(), expected);
    for item in editor.toolbar().items() {
        assert_eq!(item.state.enabled, item.name == "toggleview", "{}", item.name);
    }
    assert_eq!(
        editor.surface().focus_requests().last().map(|(t, _)| *t),
        Some(FocusTarget::Field)
    );

    editor.action("toggleview", &[]);
    assert_eq!(editor.mode(), ViewMode::Rich);
    assert_eq!(editor.content(), expected);
    assert!(editor.toolbar().items().all(|item| item.state.enabled));
}

#[test]
fn plain_edits_are_normalized_on_the_way_back() {
    let mut editor = editor_with_field("");
    editor.render();
    editor.action("toggleview", &[]);

    editor.surface_mut().set_field_value("<B>typed</B>");
    editor.action("toggleview", &[]);

    assert_eq!(editor.surface().markup(), "<strong>typed</strong>");
}

#[test]
fn lifecycle_hooks_fire_in_order() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut editor = editor_with_field("<p>a</p>");
    for event in [
        Lifecycle::Render,
        Lifecycle::Attach,
        Lifecycle::Focus,
        Lifecycle::BeforeToggleView,
        Lifecycle::ToggleView,
        Lifecycle::Detach,
    ] {
        let events = Rc::clone(&events);
        editor.on(event, move |editor| {
            events.borrow_mut().push((event, editor.mode()));
        });
    }

    editor.render();
    editor.run_deferred_focus(FocusTarget::Surface);
    editor.run_deferred_focus(FocusTarget::Dialog);
    editor.toggle_view();
    editor.toggle_view();
    editor.detach();
    editor.detach();

    use Lifecycle::*;
    use ViewMode::*;
    assert_eq!(
        *events.borrow(),
        [
            (Attach, Rich),
            (Render, Rich),
            (Focus, Rich),
            (BeforeToggleView, Rich),
            (ToggleView, Plain),
            (BeforeToggleView, Plain),
            (ToggleView, Rich),
            (Detach, Rich),
        ]
    );
    assert!(!editor.is_attached());
    assert_eq!(editor.surface().shown_view(), Plain);
}

#[test]
fn detach_saves_content() {
    let mut editor = editor_with_field("");
    editor.render();
    editor.set_content("<B>kept</B>");
    editor.detach();
    assert_eq!(editor.surface().field_value(), "<strong>kept</strong>");
}

#[test]
fn submit_saves_only_from_the_rich_view() {
    let mut editor = editor_with_field("");
    editor.render();
    editor.set_content("<i>a</i>");
    editor.handle_field_event(FieldEvent::Submit);
    assert_eq!(editor.surface().field_value(), "<em>a</em>");

    editor.toggle_view();
    let writes = editor.surface().field_writes();
    editor.surface_mut().set_field_value("plain text");
    editor.handle_field_event(FieldEvent::Submit);
    assert_eq!(editor.surface().field_value(), "plain text");
    assert_eq!(editor.surface().field_writes(), writes + 1);
}

#[test]
fn submit_handling_can_be_turned_off() {
    let mut surface = FakeSurface::with_ranges();
    surface.set_field_value("");
    let config = EditorConfig {
        handle_submit: false,
        ..EditorConfig::default()
    };
    let mut editor = Editor::new(surface, config, Arc::new(ActionRegistry::standard()));
    editor.render();
    editor.set_content("<i>a</i>");
    editor.handle_field_event(FieldEvent::Submit);
    assert_eq!(editor.surface().field_value(), "");
}
