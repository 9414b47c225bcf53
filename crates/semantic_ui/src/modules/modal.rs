//! Modal dialog on a page dimmer, sharing the drawer lifecycle.

use std::rc::Rc;

use semantic_markup::{ClassList, Element, EventKind, Node};

use crate::modules::drawer::{DrawerState, Transition};
use crate::{MessageFn, Size};

/// Immutable modal configuration.
pub struct ModalConfig<Msg> {
    state: DrawerState,
    on_toggle: MessageFn<DrawerState, Msg>,
    size: Size,
    basic: bool,
    closable: bool,
    id: Option<String>,
}

impl<Msg: 'static> ModalConfig<Msg> {
    /// Modal in `state`, reporting lifecycle changes through `on_toggle`.
    pub fn new(state: DrawerState, on_toggle: impl Fn(DrawerState) -> Msg + 'static) -> Self {
        Self {
            state,
            on_toggle: Rc::new(on_toggle),
            size: Size::default(),
            basic: false,
            closable: true,
            id: None,
        }
    }

    /// Modal width preset.
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Borderless modal on the dimmer.
    pub fn basic(mut self, basic: bool) -> Self {
        self.basic = basic;
        self
    }

    /// Whether a dimmer click or the close icon requests a close.
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Element id of the modal box.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    fn close_request(&self) -> impl Fn() -> Msg + 'static {
        let on_toggle = Rc::clone(&self.on_toggle);
        let next = self.state.toggle(false);
        move || on_toggle(next)
    }
}

/// Regions of a modal.
pub struct ModalContent<Msg> {
    header: Option<Node<Msg>>,
    content: Vec<Node<Msg>>,
    actions: Vec<Node<Msg>>,
}

impl<Msg> Default for ModalContent<Msg> {
    fn default() -> Self {
        Self {
            header: None,
            content: Vec::new(),
            actions: Vec::new(),
        }
    }
}

impl<Msg> ModalContent<Msg> {
    /// Empty modal content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Header region.
    pub fn header(mut self, header: impl Into<Node<Msg>>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Appends to the content region.
    pub fn content(mut self, node: impl Into<Node<Msg>>) -> Self {
        self.content.push(node.into());
        self
    }

    /// Appends to the actions region.
    pub fn action(mut self, node: impl Into<Node<Msg>>) -> Self {
        self.actions.push(node.into());
        self
    }
}

/// Renders the dimmer and modal box.
///
/// The dimmer only reacts to clicks that land on the dimmer itself, so
/// clicks inside the modal never request a close. While transitioning, the
/// dimmer reports the finished animation.
pub fn modal<Msg: 'static>(config: &ModalConfig<Msg>, content: ModalContent<Msg>) -> Node<Msg> {
    let state = config.state;

    let mut dimmer = Element::new("div")
        .class("ui dimmer modals page")
        .classes(&state.transition_classes(Transition::Fade))
        .class_if(state.is_toggled(), "active");
    if config.closable {
        dimmer = dimmer.on_target(EventKind::Click, config.close_request());
    }
    if state.is_transitioning() {
        let on_toggle = Rc::clone(&config.on_toggle);
        let next = state.complete_transition();
        dimmer = dimmer.on_target(EventKind::AnimationEnd, move || on_toggle(next));
    }

    let classes = ClassList::from("ui")
        .add_opt(config.size.class())
        .add_if(config.basic, "basic")
        .add("modal")
        .extend(&state.transition_classes(Transition::Scale))
        .add_if(state.is_toggled(), "active");
    let mut dialog = Element::new("div")
        .classes(&classes)
        .attr_opt("id", config.id.clone())
        .attr("role", "dialog")
        .attr("aria-modal", "true");

    if config.closable {
        dialog = dialog.child(
            Element::new("i")
                .class("close icon")
                .on_stop(EventKind::Click, config.close_request()),
        );
    }
    if let Some(header) = content.header {
        dialog = dialog.child(Element::new("div").class("header").child(header));
    }
    dialog = dialog.child(Element::new("div").class("content").children(content.content));
    if !content.actions.is_empty() {
        dialog = dialog.child(Element::new("div").class("actions").children(content.actions));
    }

    dimmer.child(dialog).into()
}
