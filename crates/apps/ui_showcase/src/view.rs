use std::rc::Rc;

use semantic_markup::{render_html, Element, Handler, Node};
use semantic_ui::{
    dropdown, modal, select, selection, Alignment, Breadcrumb, Button, Card, Cards, Color, Column,
    Container, DrawerState, DropdownConfig, Emphasis, Grid, Header, HeaderLevel, Icon, Label,
    List, ListItem, ModalConfig, ModalContent, Pointing, Section, Segment, SelectConfig,
    SelectVariation, SelectionConfig, Size, Width,
};

use crate::{
    DrawerId, Flavor, MenuAction, ShowcaseConfig, ShowcaseMsg, ShowcaseState, SortOrder, Topping,
};

fn drawer_msg(drawer: DrawerId) -> impl Fn(DrawerState) -> ShowcaseMsg {
    move |next| ShowcaseMsg::Drawer(drawer, next)
}

/// Renders the whole showcase page for `state`.
pub fn view(state: &ShowcaseState, config: &ShowcaseConfig) -> Node<ShowcaseMsg> {
    Container::new()
        .render([
            Header::new()
                .level(HeaderLevel::H1)
                .icon(Icon::new("paint brush"))
                .subheader("Every widget is driven by one reducer")
                .render(config.title.clone())
                .into(),
            Breadcrumb::new()
                .icon_divider("right angle")
                .render([
                    Section::new("Home"),
                    Section::new("Widgets"),
                    Section::active("Showcase"),
                ])
                .into(),
            Grid::new()
                .columns(Width::new(2))
                .stackable(true)
                .render([
                    Column::new([menu_segment(state, config), sort_segment(state, config)]),
                    Column::new([flavor_segment(state, config), dialog_segment(state)]),
                ])
                .into(),
            element_cards(),
            confirmation_modal(state),
        ])
        .into()
}

/// Renders [`view`] as an HTML document body using the configured options.
pub fn render_page(state: &ShowcaseState, config: &ShowcaseConfig) -> String {
    render_html(&view(state, config), &config.html)
}

fn section_header(title: &str) -> Node<ShowcaseMsg> {
    Header::new()
        .level(HeaderLevel::H3)
        .dividing(true)
        .render(title)
        .into()
}

fn menu_segment(state: &ShowcaseState, config: &ShowcaseConfig) -> Node<ShowcaseMsg> {
    let menu = DropdownConfig::new("file-menu", state.menu, drawer_msg(DrawerId::Menu))
        .toggle_event(config.toggle_event)
        .transition(config.transition)
        .class("floating labeled icon button");
    let menu = dropdown(&menu, |parts| {
        vec![
            Icon::new("file").render().into(),
            parts
                .toggle(Element::new("span").class("text").text("File"))
                .into(),
            parts
                .drawer(MenuAction::ALL.into_iter().map(|action| {
                    let pick: Handler<ShowcaseMsg> = Rc::new(move || ShowcaseMsg::Menu(action));
                    parts.item_with(
                        Some(pick),
                        Element::new("div")
                            .attr("data-action", action.label().to_lowercase())
                            .child(Icon::new(action.icon()).render())
                            .text(action.label()),
                    )
                }))
                .into(),
        ]
    });

    let status = match state.last_action {
        Some(action) => Label::new()
            .color(Color::Teal)
            .pointing(Pointing::Left)
            .detail(action.label())
            .render(["Last action"]),
        None => Label::new().basic(true).render(["Nothing picked yet"]),
    };

    Segment::new()
        .render([section_header("Dropdown"), menu, status.into()])
        .into()
}

fn sort_segment(state: &ShowcaseState, config: &ShowcaseConfig) -> Node<ShowcaseMsg> {
    let sort = SelectConfig::new(
        "sort-order",
        state.sort_drawer,
        drawer_msg(DrawerId::Sort),
        ShowcaseMsg::Sort,
    )
    .variation(SelectVariation::Inline)
    .toggle_event(config.toggle_event)
    .transition(config.transition);
    let sort = select(&sort, |parts| {
        vec![
            parts.toggle(parts.text(state.sort.label())).into(),
            parts.icon().into(),
            parts
                .drawer(SortOrder::ALL.into_iter().map(|order| {
                    parts.option_with(
                        order,
                        Element::new("div")
                            .class_if(order == state.sort, "active")
                            .text(order.label()),
                    )
                }))
                .into(),
        ]
    });

    Segment::new()
        .render([
            section_header("Inline select"),
            Element::new("span").text("Show posts by ").child(sort).into(),
        ])
        .into()
}

fn flavor_segment(state: &ShowcaseState, config: &ShowcaseConfig) -> Node<ShowcaseMsg> {
    let flavor = SelectionConfig::new(
        "flavor",
        state.flavor_drawer,
        state.flavor,
        |flavor: &Flavor| flavor.label().to_string(),
        drawer_msg(DrawerId::Flavor),
        ShowcaseMsg::Flavor,
    )
    .options(Flavor::ALL)
    .placeholder("Pick a flavor")
    .toggle_event(config.toggle_event)
    .transition(config.transition);

    let toppings = SelectionConfig::new(
        "toppings",
        state.toppings_drawer,
        state.toppings.clone(),
        |topping: &Topping| topping.label().to_string(),
        drawer_msg(DrawerId::Toppings),
        ShowcaseMsg::Topping,
    )
    .options(Topping::ALL)
    .placeholder("Add toppings")
    .form_input("toppings", |topping: &Topping| topping.token().to_string())
    .fluid(true)
    .toggle_event(config.toggle_event)
    .transition(config.transition);

    Segment::new()
        .render([
            section_header("Selection"),
            selection(&flavor),
            Element::new("div").class("ui hidden divider").into(),
            selection(&toppings),
        ])
        .into()
}

fn dialog_segment(state: &ShowcaseState) -> Node<ShowcaseMsg> {
    let summary = match state.confirmations {
        0 => "No dialogs confirmed".to_string(),
        1 => "1 dialog confirmed".to_string(),
        count => format!("{count} dialogs confirmed"),
    };
    Segment::new()
        .render([
            section_header("Modal"),
            Button::new()
                .emphasis(Emphasis::Primary)
                .icon(Icon::new("trash"))
                .disabled(state.modal.is_visible())
                .on_click(|| ShowcaseMsg::OpenModal)
                .render(["Delete draft"])
                .into(),
            Element::new("p").text(summary).into(),
        ])
        .into()
}

fn element_cards() -> Node<ShowcaseMsg> {
    let buttons = Segment::new().basic(true).alignment(Alignment::Center);
    Cards::new()
        .per_row(Width::new(3))
        .stackable(true)
        .render([
            Card::new()
                .header("Buttons")
                .meta("Emphasis, color and size")
                .description(buttons.render([
                    Button::new().emphasis(Emphasis::Positive).render(["Save"]),
                    Button::new().color(Color::Orange).basic(true).render(["Share"]),
                    Button::new().size(Size::Mini).loading(true).render(["Sync"]),
                ])),
            Card::new()
                .header("Labels")
                .meta("Colors and details")
                .description(Label::new().color(Color::Red).detail("4").render(["Issues"]))
                .extra(
                    Label::new()
                        .icon(Icon::new("mail"))
                        .size(Size::Small)
                        .render(["Inbox"]),
                ),
            Card::new()
                .header("Lists")
                .meta("Bulleted and icon items")
                .description(List::new().divided(true).relaxed(true).render([
                    ListItem::with_icon(&Icon::new("check").color(Color::Green), ["Typed configs"]),
                    ListItem::with_icon(&Icon::new("check").color(Color::Green), ["Pure views"]),
                    ListItem::new(["HTML and Leptos hosts"]),
                ])),
        ])
        .into()
}

fn confirmation_modal(state: &ShowcaseState) -> Node<ShowcaseMsg> {
    let config = ModalConfig::new(state.modal, drawer_msg(DrawerId::Modal))
        .size(Size::Small)
        .id("confirm-delete");
    let cancel = state.modal.toggle(false);
    modal(
        &config,
        ModalContent::new()
            .header("Delete draft?")
            .content(Element::new("p").text("The draft and its history will be removed."))
            .action(
                Button::new()
                    .emphasis(Emphasis::Negative)
                    .basic(true)
                    .on_click(move || ShowcaseMsg::Drawer(DrawerId::Modal, cancel))
                    .render(["Cancel"]),
            )
            .action(
                Button::new()
                    .emphasis(Emphasis::Positive)
                    .icon(Icon::new("checkmark"))
                    .on_click(|| ShowcaseMsg::Confirm)
                    .render(["Delete"]),
            ),
    )
}
