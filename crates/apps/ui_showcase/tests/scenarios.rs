//! End-to-end flows: render the page, deliver an event, fold the resulting
//! messages back through `update`, repeat.

use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use semantic_markup::{Element, EventKind, Node};
use semantic_ui::{DrawerState, ToggleEvent};
use semantic_ui_showcase::{
    render_page, update, view, DrawerId, Flavor, MenuAction, ShowcaseConfig, ShowcaseMsg,
    ShowcaseState, SortOrder, Topping,
};

struct Harness {
    state: ShowcaseState,
    config: ShowcaseConfig,
}

impl Harness {
    fn new() -> Self {
        Self::with_config(ShowcaseConfig::default())
    }

    fn with_config(config: ShowcaseConfig) -> Self {
        Self {
            state: ShowcaseState::default(),
            config,
        }
    }

    fn page(&self) -> Node<ShowcaseMsg> {
        view(&self.state, &self.config)
    }

    fn fire(
        &mut self,
        pred: impl Fn(&Element<ShowcaseMsg>) -> bool,
        event: EventKind,
    ) -> Vec<ShowcaseMsg> {
        let messages = self.page().trigger_where(pred, event);
        for msg in messages.iter().copied() {
            update(&mut self.state, msg);
        }
        messages
    }
}

fn id(value: &'static str) -> impl Fn(&Element<ShowcaseMsg>) -> bool {
    move |el| el.attribute("id") == Some(value)
}

// Option labels are unique across the page.
fn item(label: &'static str) -> impl Fn(&Element<ShowcaseMsg>) -> bool {
    move |el| el.has_class("item") && el.text_content() == label
}

#[test]
fn file_menu_open_pick_close() {
    let mut harness = Harness::new();

    assert_eq!(
        harness.fire(id("file-menu"), EventKind::Click),
        vec![ShowcaseMsg::Drawer(DrawerId::Menu, DrawerState::Opening)]
    );
    assert_eq!(
        harness.fire(id("file-menu-menu"), EventKind::AnimationEnd),
        vec![ShowcaseMsg::Drawer(DrawerId::Menu, DrawerState::Opened)]
    );

    let root = harness.page();
    let menu = root
        .find_path(id("file-menu"))
        .and_then(|path| root.element_at(&path).cloned())
        .expect("menu root");
    assert!(menu.has_class("active visible"));

    assert_eq!(
        harness.fire(item("Save"), EventKind::Click),
        vec![
            ShowcaseMsg::Menu(MenuAction::Save),
            ShowcaseMsg::Drawer(DrawerId::Menu, DrawerState::Closing),
        ]
    );
    harness.fire(id("file-menu-menu"), EventKind::AnimationEnd);
    assert_eq!(harness.state.menu, DrawerState::Closed);
    assert_eq!(harness.state.last_action, Some(MenuAction::Save));
    assert!(harness.page().text_content().contains("Last actionSave"));
}

#[test]
fn toggle_region_click_fires_once() {
    let mut harness = Harness::new();
    let messages = harness.fire(
        |el| el.attribute("aria-controls") == Some("file-menu-menu"),
        EventKind::Click,
    );
    assert_eq!(
        messages,
        vec![ShowcaseMsg::Drawer(DrawerId::Menu, DrawerState::Opening)]
    );
}

#[test]
fn redundant_click_while_opening_requests_close() {
    let mut harness = Harness::new();
    harness.fire(id("file-menu"), EventKind::Click);
    assert_eq!(
        harness.fire(id("file-menu"), EventKind::Click),
        vec![ShowcaseMsg::Drawer(DrawerId::Menu, DrawerState::Closing)]
    );
}

#[test]
fn inline_sort_select() {
    let mut harness = Harness::new();
    harness.fire(id("sort-order"), EventKind::Click);
    harness.fire(id("sort-order-menu"), EventKind::AnimationEnd);
    assert_eq!(
        harness.fire(item("most popular"), EventKind::Click),
        vec![
            ShowcaseMsg::Sort(SortOrder::Popular),
            ShowcaseMsg::Drawer(DrawerId::Sort, DrawerState::Closing),
        ]
    );
    let page = harness.page();
    let root = page
        .find_path(id("sort-order"))
        .and_then(|path| page.element_at(&path).cloned())
        .expect("sort root");
    assert!(root.has_class("ui inline dropdown"));
    assert!(root.text_content().starts_with("most popular"));
}

#[test]
fn flavor_selection_shows_choice() {
    let mut harness = Harness::new();
    assert!(harness.page().text_content().contains("Pick a flavor"));

    harness.fire(id("flavor"), EventKind::Click);
    harness.fire(id("flavor-menu"), EventKind::AnimationEnd);
    harness.fire(item("Chocolate"), EventKind::Click);
    harness.fire(id("flavor-menu"), EventKind::AnimationEnd);

    assert_eq!(harness.state.flavor, Some(Flavor::Chocolate));
    assert_eq!(harness.state.flavor_drawer, DrawerState::Closed);

    let page = harness.page();
    let chosen = page.find_all_paths(|el| el.has_class("active selected"));
    assert_eq!(chosen.len(), 1);
    assert_eq!(
        page.element_at(&chosen[0]).map(Element::text_content),
        Some("Chocolate".to_string())
    );
}

#[test]
fn toppings_labels_and_hidden_input() {
    let mut harness = Harness::new();
    for topping in ["Nuts", "Sprinkles"] {
        harness.fire(id("toppings"), EventKind::Click);
        harness.fire(id("toppings-menu"), EventKind::AnimationEnd);
        harness.fire(item(topping), EventKind::Click);
        harness.fire(id("toppings-menu"), EventKind::AnimationEnd);
    }
    assert_eq!(
        harness.state.toppings,
        BTreeSet::from([Topping::Sprinkles, Topping::Nuts])
    );

    let page = harness.page();
    let input = page
        .find_path(|el| el.attribute("name") == Some("toppings"))
        .and_then(|path| page.element_at(&path).cloned())
        .expect("hidden input");
    assert_eq!(input.attribute("value"), Some("sprinkles,nuts"));

    let messages = harness.fire(|el| el.has_class("delete icon"), EventKind::Click);
    assert_eq!(messages, vec![ShowcaseMsg::Topping(Topping::Sprinkles)]);
    assert_eq!(harness.state.toppings, BTreeSet::from([Topping::Nuts]));
    assert_eq!(harness.state.toppings_drawer, DrawerState::Closed);
}

#[test]
fn modal_confirm_flow() {
    let mut harness = Harness::new();
    assert_eq!(
        harness.fire(
            |el| el.tag() == "button" && el.text_content() == "Delete draft",
            EventKind::Click
        ),
        vec![ShowcaseMsg::OpenModal]
    );
    assert_eq!(harness.state.modal, DrawerState::Opening);
    harness.fire(|el| el.has_class("ui dimmer"), EventKind::AnimationEnd);
    assert_eq!(harness.state.modal, DrawerState::Opened);

    let content =
        |el: &Element<ShowcaseMsg>| el.has_class("content") && el.text_content().starts_with("The draft");
    assert!(harness.fire(content, EventKind::Click).is_empty());
    assert_eq!(harness.state.modal, DrawerState::Opened);

    assert_eq!(
        harness.fire(
            |el| el.tag() == "button" && el.text_content() == "Delete",
            EventKind::Click
        ),
        vec![ShowcaseMsg::Confirm]
    );
    assert_eq!(harness.state.modal, DrawerState::Closing);
    harness.fire(|el| el.has_class("ui dimmer"), EventKind::AnimationEnd);
    assert_eq!(harness.state.modal, DrawerState::Closed);
    assert!(harness.page().text_content().contains("1 dialog confirmed"));
}

#[test]
fn modal_dimmer_click_cancels() {
    let mut harness = Harness::new();
    harness.state.open(DrawerId::Modal);
    assert_eq!(
        harness.fire(|el| el.has_class("ui dimmer"), EventKind::Click),
        vec![ShowcaseMsg::Drawer(DrawerId::Modal, DrawerState::Closing)]
    );
    assert_eq!(harness.state.confirmations, 0);
}

#[test]
fn hover_config_rewires_every_dropdown() {
    let mut harness = Harness::with_config(ShowcaseConfig {
        toggle_event: ToggleEvent::OnHover,
        ..ShowcaseConfig::default()
    });
    assert!(harness.fire(id("flavor"), EventKind::Click).is_empty());
    assert_eq!(
        harness.fire(id("flavor"), EventKind::MouseEnter),
        vec![ShowcaseMsg::Drawer(DrawerId::Flavor, DrawerState::Opening)]
    );
    harness.fire(id("flavor-menu"), EventKind::AnimationEnd);
    assert_eq!(
        harness.fire(id("flavor"), EventKind::MouseLeave),
        vec![ShowcaseMsg::Drawer(DrawerId::Flavor, DrawerState::Closing)]
    );
}

#[test]
fn static_page_has_no_listener_markup() {
    let html = render_page(&ShowcaseState::default(), &ShowcaseConfig::default());
    assert!(html.starts_with(r#"<div class="ui container">"#));
    assert!(html.contains(r#"id="file-menu""#));
    assert!(!html.contains("onclick"));
}
