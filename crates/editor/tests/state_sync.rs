use editor::{
    Activation, ActionRegistry, Editor, EditorConfig, SurfaceEvent, Toolbar,
};
use selection::{BoundaryRange, NodeTree};
use std::sync::Arc;
use surface_test_support::FakeSurface;

fn editor() -> Editor<FakeSurface> {
    let mut editor = Editor::new(
        FakeSurface::with_ranges(),
        EditorConfig::default(),
        Arc::new(ActionRegistry::standard()),
    );
    editor.render();
    editor
}

fn active(toolbar: &Toolbar, name: &str) -> Activation {
    toolbar.item(name).unwrap().state.active.clone()
}

#[test]
fn anchor_inside_strong_activates_bold_by_tag() {
    let mut editor = editor();
    let surface = editor.surface_mut();
    let body = surface.body();
    let p = surface.append_element(body, "p");
    let strong = surface.append_element(p, "strong");
    let text = surface.append_text(strong, "bold");
    surface.select_range(BoundaryRange::collapsed(text, 2));

    editor.handle_surface_event(SurfaceEvent::MouseUp);

    let toolbar = editor.toolbar();
    assert_eq!(active(toolbar, "bold"), Activation::Active(Some("strong".into())));
    assert_eq!(active(toolbar, "italic"), Activation::Inactive);
}

#[test]
fn inline_bold_style_activates_bold_without_bold_ancestor() {
    let mut editor = editor();
    let surface = editor.surface_mut();
    let body = surface.body();
    let p = surface.append_element(body, "p");
    let span = surface.append_element_with_attrs(p, "span", &[("style", "font-weight: bold")]);
    let text = surface.append_text(span, "heavy");
    surface.select_range(BoundaryRange::collapsed(text, 0));

    editor.handle_surface_event(SurfaceEvent::KeyUp);

    let toolbar = editor.toolbar();
    assert_eq!(active(toolbar, "bold"), Activation::Active(Some("bold".into())));
    assert_eq!(active(toolbar, "italic"), Activation::Inactive);
    assert_eq!(active(toolbar, "underline"), Activation::Inactive);
}

#[test]
fn list_and_link_states_follow_ancestors() {
    let mut editor = editor();
    let surface = editor.surface_mut();
    let body = surface.body();
    let ul = surface.append_element(body, "ul");
    let li = surface.append_element(ul, "li");
    let a = surface.append_element_with_attrs(li, "a", &[("href", "http://example.com")]);
    let text = surface.append_text(a, "link");
    surface.select_range(BoundaryRange::collapsed(text, 1));

    editor.check_states();

    let toolbar = editor.toolbar();
    assert_eq!(
        active(toolbar, "insertunorderedlist"),
        Activation::Active(Some("ul".into()))
    );
    assert_eq!(active(toolbar, "createlink"), Activation::Active(Some("a".into())));
    assert_eq!(active(toolbar, "insertorderedlist"), Activation::Inactive);
}

#[test]
fn moving_the_selection_clears_previous_states() {
    let mut editor = editor();
    let surface = editor.surface_mut();
    let body = surface.body();
    let em = surface.append_element(body, "em");
    let in_em = surface.append_text(em, "slanted");
    let p = surface.append_element(body, "p");
    let plain = surface.append_text(p, "plain");

    surface.select_range(BoundaryRange::collapsed(in_em, 1));
    editor.check_states();
    assert_eq!(active(editor.toolbar(), "italic"), Activation::Active(Some("em".into())));

    editor.surface_mut().select_range(BoundaryRange::collapsed(plain, 1));
    editor.check_states();
    assert_eq!(active(editor.toolbar(), "italic"), Activation::Inactive);
}

#[test]
fn selected_image_is_the_anchor() {
    let mut editor = editor();
    let surface = editor.surface_mut();
    let body = surface.body();
    let a = surface.append_element(body, "a");
    surface.append_text(a, "before");
    surface.append_element_with_attrs(a, "img", &[("src", "pic.png")]);
    surface.select_range(BoundaryRange {
        start_container: a,
        start_offset: 1,
        end_container: a,
        end_offset: 2,
    });

    editor.check_states();
    assert_eq!(active(editor.toolbar(), "createlink"), Activation::Active(Some("a".into())));
    let anchor = {
        let selection = *editor.selection();
        selection.nearest_element(editor.surface_mut())
    };
    assert_eq!(
        anchor.and_then(|n| editor.surface().tag_name(n).map(str::to_string)),
        Some("img".to_string())
    );
}

#[test]
fn toolbar_disabled_config_skips_state_sync() {
    let config = EditorConfig {
        toolbar: false,
        ..EditorConfig::default()
    };
    let mut editor = Editor::new(
        FakeSurface::with_ranges(),
        config,
        Arc::new(ActionRegistry::standard()),
    );
    editor.render();
    let surface = editor.surface_mut();
    let body = surface.body();
    let b = surface.append_element(body, "b");
    let text = surface.append_text(b, "x");
    surface.select_range(BoundaryRange::collapsed(text, 0));

    editor.handle_surface_event(SurfaceEvent::MouseUp);
    assert_eq!(active(editor.toolbar(), "bold"), Activation::Inactive);
}

#[test]
fn toggle_view_highlight_clears_after_returning_to_rich_view() {
    let mut editor = editor();
    editor.action("toggleview", &[]);
    assert!(editor.toolbar().item("toggleview").unwrap().is_active());

    editor.action("toggleview", &[]);
    editor.handle_surface_event(SurfaceEvent::KeyUp);

    let toggle = editor.toolbar().item("toggleview").unwrap();
    assert!(toggle.state.enabled);
    assert_eq!(toggle.state.active, Activation::Inactive);
}

#[test]
fn dialog_highlight_clears_on_the_next_mouse_up() {
    let mut editor = editor();
    editor.action("urlimage", &[]);

    editor.handle_surface_event(SurfaceEvent::MouseUp);

    let item = editor.toolbar().item("urlimage").unwrap();
    assert!(item.state.enabled);
    assert_eq!(item.state.active, Activation::Inactive);
}
