//! Dropdown whose drawer items carry option values.

use std::rc::Rc;
use std::str::FromStr;

use semantic_markup::{Element, Handler, Node};

use crate::modules::drawer::{DrawerState, ToggleEvent, Transition};
use crate::modules::dropdown::{DropdownConfig, DropdownParts};
use crate::{MessageFn, TokenParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Presentation presets for a select. Only the root wrapper changes.
pub enum SelectVariation {
    /// `ui dropdown`
    #[default]
    Ordinary,
    /// `ui button dropdown`
    Button,
    /// `ui inline dropdown`, flowing with surrounding text.
    Inline,
}

impl SelectVariation {
    /// Root class words placed between `ui` and `dropdown`.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Ordinary => None,
            Self::Button => Some("button"),
            Self::Inline => Some("inline"),
        }
    }

    /// Stable token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Ordinary => "ordinary",
            Self::Button => "button",
            Self::Inline => "inline",
        }
    }
}

impl FromStr for SelectVariation {
    type Err = TokenParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim() {
            "ordinary" => Ok(Self::Ordinary),
            "button" => Ok(Self::Button),
            "inline" => Ok(Self::Inline),
            _ => Err(TokenParseError::unknown("select variation", input)),
        }
    }
}

/// Immutable select configuration.
pub struct SelectConfig<O, Msg> {
    dropdown: DropdownConfig<Msg>,
    on_select: MessageFn<O, Msg>,
    variation: SelectVariation,
}

impl<O: Clone + 'static, Msg: 'static> SelectConfig<O, Msg> {
    /// Select `id` in `state`, reporting toggles and chosen options.
    pub fn new(
        id: impl Into<String>,
        state: DrawerState,
        on_toggle: impl Fn(DrawerState) -> Msg + 'static,
        on_select: impl Fn(O) -> Msg + 'static,
    ) -> Self {
        Self {
            dropdown: DropdownConfig::new(id, state, on_toggle),
            on_select: Rc::new(on_select),
            variation: SelectVariation::default(),
        }
    }

    /// Presentation preset.
    pub fn variation(mut self, variation: SelectVariation) -> Self {
        self.variation = variation;
        self
    }

    /// Interaction that opens and closes the drawer.
    pub fn toggle_event(mut self, toggle_event: ToggleEvent) -> Self {
        self.dropdown = self.dropdown.toggle_event(toggle_event);
        self
    }

    /// Drawer animation.
    pub fn transition(mut self, transition: Transition) -> Self {
        self.dropdown = self.dropdown.transition(transition);
        self
    }

    /// Disables every interaction.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.dropdown = self.dropdown.disabled(disabled);
        self
    }

    /// Extra root class words.
    pub fn class(mut self, classes: &str) -> Self {
        self.dropdown = self.dropdown.class(classes);
        self
    }

    /// Extra root attribute.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.dropdown = self.dropdown.attribute(name, value);
        self
    }

    /// Underlying dropdown configuration.
    pub fn dropdown_config(&self) -> &DropdownConfig<Msg> {
        &self.dropdown
    }

    /// Region helpers handed to layout functions.
    pub fn parts(&self) -> SelectParts<O, Msg> {
        SelectParts {
            dropdown: self.dropdown.parts(),
            on_select: Rc::clone(&self.on_select),
        }
    }

    pub(crate) fn root(&self) -> Element<Msg> {
        self.dropdown.root_with(self.variation.class())
    }
}

/// Region helpers for a select layout function.
pub struct SelectParts<O, Msg> {
    dropdown: DropdownParts<Msg>,
    on_select: MessageFn<O, Msg>,
}

impl<O: Clone + 'static, Msg: 'static> SelectParts<O, Msg> {
    /// Dropdown-level helpers.
    pub fn dropdown(&self) -> &DropdownParts<Msg> {
        &self.dropdown
    }

    /// Wires `element` as a toggle region.
    pub fn toggle(&self, element: Element<Msg>) -> Element<Msg> {
        self.dropdown.toggle(element)
    }

    /// Drawer region holding `children`.
    pub fn drawer<I>(&self, children: I) -> Element<Msg>
    where
        I: IntoIterator,
        I::Item: Into<Node<Msg>>,
    {
        self.dropdown.drawer(children)
    }

    /// Current-label text region (`div.text`).
    pub fn text(&self, label: impl Into<String>) -> Element<Msg> {
        Element::new("div").class("text").text(label)
    }

    /// `dropdown icon` marker.
    pub fn icon(&self) -> Element<Msg> {
        Element::new("i").class("dropdown icon")
    }

    /// Drawer item reporting `option` when clicked.
    pub fn option<I>(&self, option: O, children: I) -> Element<Msg>
    where
        I: IntoIterator,
        I::Item: Into<Node<Msg>>,
    {
        self.option_with(option, Element::new("div").children(children))
    }

    /// Turns `element` into a drawer item reporting `option`.
    ///
    /// The selection message precedes the close request.
    pub fn option_with(&self, option: O, element: Element<Msg>) -> Element<Msg> {
        self.dropdown
            .item_with(Some(self.select_handler(option)), element)
    }

    /// Handler reporting `option` without touching the drawer.
    pub fn select_handler(&self, option: O) -> Handler<Msg> {
        let on_select = Rc::clone(&self.on_select);
        Rc::new(move || on_select(option.clone()))
    }
}

/// Renders a select. `layout` receives the region helpers and returns the
/// root's children.
pub fn select<O: Clone + 'static, Msg: 'static>(
    config: &SelectConfig<O, Msg>,
    layout: impl FnOnce(&SelectParts<O, Msg>) -> Vec<Node<Msg>>,
) -> Node<Msg> {
    let parts = config.parts();
    config.root().children(layout(&parts)).into()
}
