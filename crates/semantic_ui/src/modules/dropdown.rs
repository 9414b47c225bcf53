//! Dropdown controller: root, toggle and drawer regions wired to a
//! [`DrawerState`].
//!
//! The controller never stores state. Every interaction is reported through
//! the caller's `on_toggle` constructor with the next state, and the caller
//! renders again with whatever state it decides to keep.

use std::rc::Rc;

use leptos::logging;
use semantic_markup::{ClassList, Element, EventKind, Handler, Node};

use crate::modules::drawer::{DrawerState, ToggleEvent, Transition};
use crate::MessageFn;

/// Immutable dropdown configuration for a single render pass.
pub struct DropdownConfig<Msg> {
    id: String,
    state: DrawerState,
    on_toggle: MessageFn<DrawerState, Msg>,
    toggle_event: ToggleEvent,
    transition: Transition,
    disabled: bool,
    classes: ClassList,
    attributes: Vec<(String, String)>,
}

impl<Msg: 'static> DropdownConfig<Msg> {
    /// Configuration for the dropdown `id` currently in `state`.
    pub fn new(
        id: impl Into<String>,
        state: DrawerState,
        on_toggle: impl Fn(DrawerState) -> Msg + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            state,
            on_toggle: Rc::new(on_toggle),
            toggle_event: ToggleEvent::default(),
            transition: Transition::default(),
            disabled: false,
            classes: ClassList::new(),
            attributes: Vec::new(),
        }
    }

    /// Interaction that opens and closes the drawer.
    pub fn toggle_event(mut self, toggle_event: ToggleEvent) -> Self {
        self.toggle_event = toggle_event;
        self
    }

    /// Drawer animation.
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Disables every interaction.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Extra root class words, placed between `ui` and `dropdown`.
    pub fn class(mut self, classes: &str) -> Self {
        self.classes.push(classes);
        self
    }

    /// Extra root attribute.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Drawer state this configuration renders.
    pub fn state(&self) -> DrawerState {
        self.state
    }

    /// Whether interactions are disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Region helpers handed to layout functions.
    pub fn parts(&self) -> DropdownParts<Msg> {
        DropdownParts {
            id: self.id.clone(),
            state: self.state,
            on_toggle: Rc::clone(&self.on_toggle),
            toggle_event: self.toggle_event,
            transition: self.transition,
            disabled: self.disabled,
        }
    }

    pub(crate) fn root(&self) -> Element<Msg> {
        self.root_with(None)
    }

    /// Whether the identifier is blank, leaving regions uncorrelated.
    pub fn is_anonymous(&self) -> bool {
        self.id.trim().is_empty()
    }

    /// Root element with optional preset words ahead of the extra classes.
    ///
    /// A disabled root never carries the open-state classes.
    pub(crate) fn root_with(&self, preset: Option<&str>) -> Element<Msg> {
        if self.is_anonymous() {
            logging::warn!("dropdown rendered without an identifier; regions cannot be correlated");
        }
        let classes = ClassList::from("ui")
            .add_opt(preset)
            .extend(&self.classes)
            .add("dropdown");
        let classes = if self.disabled {
            classes.add("disabled")
        } else {
            classes.extend(&self.state.root_classes())
        };
        let root = Element::new("div")
            .classes(&classes)
            .attr("id", self.id.clone())
            .attrs(self.attributes.iter().cloned());
        if self.disabled {
            root.attr("aria-disabled", "true")
        } else {
            self.parts().wire(root, false)
        }
    }
}

/// Region helpers for a dropdown layout function.
pub struct DropdownParts<Msg> {
    id: String,
    state: DrawerState,
    on_toggle: MessageFn<DrawerState, Msg>,
    toggle_event: ToggleEvent,
    transition: Transition,
    disabled: bool,
}

impl<Msg: 'static> DropdownParts<Msg> {
    /// Drawer state being rendered.
    pub fn state(&self) -> DrawerState {
        self.state
    }

    /// Whether interactions are disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Id of the drawer region.
    pub fn drawer_id(&self) -> String {
        format!("{}-menu", self.id)
    }

    /// Wires `element` as a toggle region. Usable any number of times inside
    /// the root; the event stops at the toggle so it is reported once.
    ///
    /// Under the hover policy only the root reacts to `mouseleave`, so moving
    /// from the toggle into the drawer keeps the dropdown open.
    pub fn toggle(&self, element: Element<Msg>) -> Element<Msg> {
        let expanded = !self.disabled && self.state.is_toggled();
        let element = element
            .attr("data-dropdown", self.id.clone())
            .attr("aria-controls", self.drawer_id())
            .attr("aria-expanded", if expanded { "true" } else { "false" });
        if self.disabled {
            element
        } else {
            self.wire(element, true)
        }
    }

    /// Drawer region (`div.menu`) holding `children`.
    pub fn drawer<I>(&self, children: I) -> Element<Msg>
    where
        I: IntoIterator,
        I::Item: Into<Node<Msg>>,
    {
        self.drawer_with(Element::new("div").children(children))
    }

    /// Turns `element` into the drawer region.
    ///
    /// A disabled dropdown keeps the plain `menu` class with no transition
    /// styling and no animation subscription.
    pub fn drawer_with(&self, element: Element<Msg>) -> Element<Msg> {
        let element = element
            .class("menu")
            .attr("id", self.drawer_id())
            .attr("data-dropdown", self.id.clone())
            .attr("role", "listbox");
        if self.disabled {
            return element.attr("aria-hidden", "true");
        }

        let element = element
            .classes(&self.state.transition_classes(self.transition))
            .attr(
                "aria-hidden",
                if self.state.is_visible() { "false" } else { "true" },
            );
        if self.state.is_transitioning() {
            let on_toggle = Rc::clone(&self.on_toggle);
            let next = self.state.complete_transition();
            element.on_target(EventKind::AnimationEnd, move || on_toggle(next))
        } else {
            element
        }
    }

    /// Plain drawer item (`div.item`) that only requests a close.
    pub fn item<I>(&self, children: I) -> Element<Msg>
    where
        I: IntoIterator,
        I::Item: Into<Node<Msg>>,
    {
        self.item_with(None, Element::new("div").children(children))
    }

    /// Turns `element` into a drawer item.
    ///
    /// A click fires `on_click` first (when given), then the close request,
    /// and does not reach the root.
    pub fn item_with(
        &self,
        on_click: Option<Handler<Msg>>,
        element: Element<Msg>,
    ) -> Element<Msg> {
        let element = element.class("item").attr("role", "option");
        if self.disabled {
            return element;
        }
        let element = match on_click {
            Some(on_click) => element.on(EventKind::Click, move || on_click()),
            None => element,
        };
        let on_toggle = Rc::clone(&self.on_toggle);
        let next = self.state.toggle(false);
        element.on_stop(EventKind::Click, move || on_toggle(next))
    }

    fn request(&self, requested_open: bool) -> impl Fn() -> Msg + 'static {
        let on_toggle = Rc::clone(&self.on_toggle);
        let next = self.state.toggle(requested_open);
        move || on_toggle(next)
    }

    fn wire(&self, element: Element<Msg>, stop: bool) -> Element<Msg> {
        let on = |element: Element<Msg>, event: EventKind, requested_open: bool| {
            let handler = self.request(requested_open);
            if stop {
                element.on_stop(event, handler)
            } else {
                element.on(event, handler)
            }
        };
        match self.toggle_event {
            ToggleEvent::OnClick => on(element, EventKind::Click, !self.state.is_toggled()),
            ToggleEvent::OnHover => {
                let element = on(element, EventKind::MouseEnter, true);
                if stop {
                    element
                } else {
                    on(element, EventKind::MouseLeave, false)
                }
            }
            ToggleEvent::OnFocus => {
                let element = if stop {
                    element
                } else {
                    element.attr("tabindex", "0")
                };
                let element = on(element, EventKind::FocusIn, true);
                on(element, EventKind::FocusOut, false)
            }
        }
    }
}

/// Renders a dropdown. `layout` receives the region helpers and returns the
/// root's children.
pub fn dropdown<Msg: 'static>(
    config: &DropdownConfig<Msg>,
    layout: impl FnOnce(&DropdownParts<Msg>) -> Vec<Node<Msg>>,
) -> Node<Msg> {
    let parts = config.parts();
    config.root().children(layout(&parts)).into()
}
