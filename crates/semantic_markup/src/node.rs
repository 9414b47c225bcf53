use std::fmt;
use std::rc::Rc;

use leptos::logging;

use crate::ClassList;

/// Message-producing event handler.
///
/// Handlers are only invoked when a host delivers the matching event.
pub type Handler<Msg> = Rc<dyn Fn() -> Msg>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// DOM events the widget crates subscribe to.
pub enum EventKind {
    /// Primary pointer click.
    Click,
    /// Pointer entered the element.
    MouseEnter,
    /// Pointer left the element.
    MouseLeave,
    /// Element or a descendant received focus.
    FocusIn,
    /// Element or a descendant lost focus.
    FocusOut,
    /// A CSS animation finished on the element or a descendant.
    AnimationEnd,
}

impl EventKind {
    /// DOM event name.
    pub fn dom_name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
            Self::FocusIn => "focusin",
            Self::FocusOut => "focusout",
            Self::AnimationEnd => "animationend",
        }
    }

    /// Whether the event propagates to ancestors after the target.
    pub fn bubbles(self) -> bool {
        !matches!(self, Self::MouseEnter | Self::MouseLeave)
    }
}

/// Event subscription attached to an [`Element`].
pub struct Listener<Msg> {
    event: EventKind,
    handler: Handler<Msg>,
    stop_propagation: bool,
    target_only: bool,
}

impl<Msg> Listener<Msg> {
    /// Listener that lets the event continue to ancestors.
    pub fn new(event: EventKind, handler: Handler<Msg>) -> Self {
        Self {
            event,
            handler,
            stop_propagation: false,
            target_only: false,
        }
    }

    /// Marks the listener as stopping propagation once it has fired.
    pub fn stopping_propagation(mut self) -> Self {
        self.stop_propagation = true;
        self
    }

    /// Restricts the listener to events whose target is the owning element,
    /// ignoring events bubbling up from descendants.
    pub fn target_only(mut self) -> Self {
        self.target_only = true;
        self
    }

    /// Whether bubbled events are ignored.
    pub fn is_target_only(&self) -> bool {
        self.target_only
    }

    /// Subscribed event.
    pub fn event(&self) -> EventKind {
        self.event
    }

    /// Whether propagation stops at the owning element.
    pub fn stops_propagation(&self) -> bool {
        self.stop_propagation
    }

    /// Produces the listener's message.
    pub fn fire(&self) -> Msg {
        (self.handler)()
    }

    pub(crate) fn into_parts(self) -> (EventKind, Handler<Msg>, bool, bool) {
        (
            self.event,
            self.handler,
            self.stop_propagation,
            self.target_only,
        )
    }

    fn map_rc<B: 'static>(self, f: &Rc<dyn Fn(Msg) -> B>) -> Listener<B>
    where
        Msg: 'static,
    {
        let handler = self.handler;
        let f = Rc::clone(f);
        Listener {
            event: self.event,
            handler: Rc::new(move || f(handler())),
            stop_propagation: self.stop_propagation,
            target_only: self.target_only,
        }
    }
}

impl<Msg> Clone for Listener<Msg> {
    fn clone(&self) -> Self {
        Self {
            event: self.event,
            handler: Rc::clone(&self.handler),
            stop_propagation: self.stop_propagation,
            target_only: self.target_only,
        }
    }
}

impl<Msg> fmt::Debug for Listener<Msg> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("event", &self.event)
            .field("stop_propagation", &self.stop_propagation)
            .field("target_only", &self.target_only)
            .finish_non_exhaustive()
    }
}

/// Markup element: tag, classes, attributes, listeners and children.
pub struct Element<Msg> {
    tag: String,
    classes: ClassList,
    attributes: Vec<(String, String)>,
    listeners: Vec<Listener<Msg>>,
    children: Vec<Node<Msg>>,
}

impl<Msg> Element<Msg> {
    /// Empty element with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: ClassList::new(),
            attributes: Vec::new(),
            listeners: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds class words.
    pub fn class(mut self, classes: &str) -> Self {
        self.classes.push(classes);
        self
    }

    /// Adds class words when `condition` holds.
    pub fn class_if(self, condition: bool, classes: &str) -> Self {
        if condition {
            self.class(classes)
        } else {
            self
        }
    }

    /// Appends a prepared class list.
    pub fn classes(mut self, classes: &ClassList) -> Self {
        self.classes = self.classes.extend(classes);
        self
    }

    /// Sets an attribute, replacing an earlier value with the same name.
    ///
    /// `class` is routed into the class list instead. Names that cannot be
    /// written as HTML attribute names are dropped with a warning.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if !is_attribute_name(&name) {
            logging::warn!("dropping attribute with invalid name {name:?} on <{}>", self.tag);
            return self;
        }
        if name == "class" {
            self.classes.push(&value);
            return self;
        }
        match self.attributes.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Sets an attribute when a value is present.
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Sets every attribute of `attributes` in order.
    pub fn attrs<I, K, V>(self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        attributes
            .into_iter()
            .fold(self, |element, (name, value)| element.attr(name, value))
    }

    /// Subscribes to `event`, letting it propagate further.
    pub fn on(self, event: EventKind, handler: impl Fn() -> Msg + 'static) -> Self {
        self.listener(Listener::new(event, Rc::new(handler)))
    }

    /// Subscribes to `event` and stops propagation at this element.
    pub fn on_stop(self, event: EventKind, handler: impl Fn() -> Msg + 'static) -> Self {
        self.listener(Listener::new(event, Rc::new(handler)).stopping_propagation())
    }

    /// Subscribes to `event` only when this element is the event target.
    pub fn on_target(self, event: EventKind, handler: impl Fn() -> Msg + 'static) -> Self {
        self.listener(Listener::new(event, Rc::new(handler)).target_only())
    }

    /// Attaches a prepared listener.
    pub fn listener(mut self, listener: Listener<Msg>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Appends a child node.
    pub fn child(mut self, child: impl Into<Node<Msg>>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends every child node in order.
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node<Msg>>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Appends a text child.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::Text(content.into()))
    }

    /// Tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Class list.
    pub fn class_list(&self) -> &ClassList {
        &self.classes
    }

    /// Whether every word of `classes` is applied.
    pub fn has_class(&self, classes: &str) -> bool {
        self.classes.contains_all(classes)
    }

    /// Attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Listeners in registration order.
    pub fn listeners(&self) -> &[Listener<Msg>] {
        &self.listeners
    }

    /// Whether any listener is subscribed to `event`.
    pub fn listens_to(&self, event: EventKind) -> bool {
        self.listeners.iter().any(|listener| listener.event == event)
    }

    /// Child nodes.
    pub fn child_nodes(&self) -> &[Node<Msg>] {
        &self.children
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        String,
        ClassList,
        Vec<(String, String)>,
        Vec<Listener<Msg>>,
        Vec<Node<Msg>>,
    ) {
        (
            self.tag,
            self.classes,
            self.attributes,
            self.listeners,
            self.children,
        )
    }

    fn map_rc<B: 'static>(self, f: &Rc<dyn Fn(Msg) -> B>) -> Element<B>
    where
        Msg: 'static,
    {
        Element {
            tag: self.tag,
            classes: self.classes,
            attributes: self.attributes,
            listeners: self
                .listeners
                .into_iter()
                .map(|listener| listener.map_rc(f))
                .collect(),
            children: self
                .children
                .into_iter()
                .map(|child| child.map_rc(f))
                .collect(),
        }
    }
}

impl<Msg> Clone for Element<Msg> {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            classes: self.classes.clone(),
            attributes: self.attributes.clone(),
            listeners: self.listeners.clone(),
            children: self.children.clone(),
        }
    }
}

impl<Msg> fmt::Debug for Element<Msg> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("classes", &self.classes.to_string())
            .field("attributes", &self.attributes)
            .field("listeners", &self.listeners)
            .field("children", &self.children)
            .finish()
    }
}

/// Node of a markup tree.
pub enum Node<Msg> {
    /// Element node.
    Element(Element<Msg>),
    /// Text node.
    Text(String),
}

impl<Msg> Node<Msg> {
    /// Element payload, if this is an element node.
    pub fn as_element(&self) -> Option<&Element<Msg>> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Converts every listener's message with `f`.
    pub fn map<B: 'static>(self, f: impl Fn(Msg) -> B + 'static) -> Node<B>
    where
        Msg: 'static,
    {
        let f: Rc<dyn Fn(Msg) -> B> = Rc::new(f);
        self.map_rc(&f)
    }

    fn map_rc<B: 'static>(self, f: &Rc<dyn Fn(Msg) -> B>) -> Node<B>
    where
        Msg: 'static,
    {
        match self {
            Self::Element(element) => Node::Element(element.map_rc(f)),
            Self::Text(text) => Node::Text(text),
        }
    }
}

impl<Msg> Clone for Node<Msg> {
    fn clone(&self) -> Self {
        match self {
            Self::Element(element) => Self::Element(element.clone()),
            Self::Text(text) => Self::Text(text.clone()),
        }
    }
}

impl<Msg> fmt::Debug for Node<Msg> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => element.fmt(f),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
        }
    }
}

impl<Msg> From<Element<Msg>> for Node<Msg> {
    fn from(element: Element<Msg>) -> Self {
        Self::Element(element)
    }
}

impl<Msg> From<String> for Node<Msg> {
    fn from(content: String) -> Self {
        Self::Text(content)
    }
}

impl<Msg> From<&str> for Node<Msg> {
    fn from(content: &str) -> Self {
        Self::Text(content.to_string())
    }
}

/// Text node.
pub fn text<Msg>(content: impl Into<String>) -> Node<Msg> {
    Node::Text(content.into())
}

/// HTML attribute name: non-empty, free of whitespace, control characters,
/// quotes and the `>`, `/` and `=` delimiters.
fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|ch| {
            !ch.is_whitespace()
                && !ch.is_control()
                && !matches!(ch, '"' | '\'' | '>' | '/' | '=' | '<')
        })
}
