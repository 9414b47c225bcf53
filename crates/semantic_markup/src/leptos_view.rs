//! Leptos host adapter.

use leptos::html::{self, Custom, HtmlElement};
use leptos::ev::{self, Event as WebEvent};
use leptos::{Callable, Callback, IntoView, View};

use crate::{Element, EventKind, Handler, Node};

/// Converts a markup tree into a Leptos view.
///
/// Every listener becomes a DOM listener that dispatches its message through
/// `dispatch`, calling `stop_propagation()` first when the listener asks for
/// it. Target-only listeners ignore events bubbling up from descendants.
pub fn into_view<Msg: 'static>(node: Node<Msg>, dispatch: Callback<Msg>) -> View {
    match node {
        Node::Text(text) => text.into_view(),
        Node::Element(element) => element_view(element, dispatch),
    }
}

fn element_view<Msg: 'static>(element: Element<Msg>, dispatch: Callback<Msg>) -> View {
    let (tag, classes, attributes, listeners, children) = element.into_parts();

    let mut el = html::custom(Custom::new(tag));
    if !classes.is_empty() {
        el = el.attr("class", classes.to_string());
    }
    for (name, value) in attributes {
        el = el.attr(name, value);
    }
    for listener in listeners {
        let (event, handler, stop, target_only) = listener.into_parts();
        el = attach(el, event, Wiring { handler, stop, target_only }, dispatch);
    }
    for child in children {
        el = el.child(into_view(child, dispatch));
    }
    el.into_view()
}

struct Wiring<Msg> {
    handler: Handler<Msg>,
    stop: bool,
    target_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delivery {
    Ignore,
    Dispatch,
    StopAndDispatch,
}

impl<Msg> Wiring<Msg> {
    fn delivery(&self, at_target: bool) -> Delivery {
        if self.target_only && !at_target {
            Delivery::Ignore
        } else if self.stop {
            Delivery::StopAndDispatch
        } else {
            Delivery::Dispatch
        }
    }

    fn deliver(&self, event: &WebEvent, dispatch: Callback<Msg>) {
        match self.delivery(event.target() == event.current_target()) {
            Delivery::Ignore => return,
            Delivery::StopAndDispatch => event.stop_propagation(),
            Delivery::Dispatch => {}
        }
        dispatch.call((self.handler)());
    }
}

fn attach<Msg: 'static>(
    el: HtmlElement<Custom>,
    event: EventKind,
    wiring: Wiring<Msg>,
    dispatch: Callback<Msg>,
) -> HtmlElement<Custom> {
    match event {
        EventKind::Click => el.on(ev::click, move |event| wiring.deliver(&event, dispatch)),
        EventKind::MouseEnter => {
            el.on(ev::mouseenter, move |event| wiring.deliver(&event, dispatch))
        }
        EventKind::MouseLeave => {
            el.on(ev::mouseleave, move |event| wiring.deliver(&event, dispatch))
        }
        EventKind::FocusIn => el.on(ev::focusin, move |event| wiring.deliver(&event, dispatch)),
        EventKind::FocusOut => el.on(ev::focusout, move |event| wiring.deliver(&event, dispatch)),
        EventKind::AnimationEnd => {
            el.on(ev::animationend, move |event| wiring.deliver(&event, dispatch))
        }
    }
}
