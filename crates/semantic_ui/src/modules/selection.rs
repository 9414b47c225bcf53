//! Select that displays its current value.
//!
//! The value type decides the cardinality: a bare option for a mandatory
//! choice, `Option<O>` for an optional one, `Vec<O>` or `BTreeSet<O>` for
//! multiple choices.

use std::collections::BTreeSet;
use std::rc::Rc;

use leptos::logging;
use semantic_markup::{Element, EventKind, Listener, Node};

use crate::modules::drawer::{DrawerState, ToggleEvent, Transition};
use crate::modules::select::{SelectConfig, SelectParts};
use crate::Formatter;

/// Current value of a selection over options of type `O`.
pub trait SelectionValue<O> {
    /// Whether `option` is part of the value.
    fn is_selected(&self, option: &O) -> bool;

    /// Chosen options, in value order.
    fn selected(&self) -> Vec<&O>;

    /// Whether several options can be chosen at once.
    fn is_multiple(&self) -> bool {
        false
    }

    /// Value after the user picks `option`.
    fn with_selected(self, option: O) -> Self
    where
        Self: Sized;
}

impl<O: PartialEq> SelectionValue<O> for O {
    fn is_selected(&self, option: &O) -> bool {
        self == option
    }

    fn selected(&self) -> Vec<&O> {
        vec![self]
    }

    fn with_selected(self, option: O) -> Self {
        option
    }
}

impl<O: PartialEq> SelectionValue<O> for Option<O> {
    fn is_selected(&self, option: &O) -> bool {
        self.as_ref() == Some(option)
    }

    fn selected(&self) -> Vec<&O> {
        self.iter().collect()
    }

    fn with_selected(self, option: O) -> Self {
        Some(option)
    }
}

impl<O: PartialEq> SelectionValue<O> for Vec<O> {
    fn is_selected(&self, option: &O) -> bool {
        self.contains(option)
    }

    fn selected(&self) -> Vec<&O> {
        self.iter().collect()
    }

    fn is_multiple(&self) -> bool {
        true
    }

    /// Picking a chosen option removes it; anything else is appended.
    fn with_selected(mut self, option: O) -> Self {
        match self.iter().position(|existing| *existing == option) {
            Some(index) => {
                self.remove(index);
            }
            None => self.push(option),
        }
        self
    }
}

impl<O: Ord> SelectionValue<O> for BTreeSet<O> {
    fn is_selected(&self, option: &O) -> bool {
        self.contains(option)
    }

    fn selected(&self) -> Vec<&O> {
        self.iter().collect()
    }

    fn is_multiple(&self) -> bool {
        true
    }

    fn with_selected(mut self, option: O) -> Self {
        if !self.remove(&option) {
            self.insert(option);
        }
        self
    }
}

struct FormBinding<O> {
    name: String,
    value: Formatter<O>,
}

/// Immutable selection configuration.
pub struct SelectionConfig<O, V, Msg> {
    select: SelectConfig<O, Msg>,
    value: V,
    options: Vec<O>,
    label: Formatter<O>,
    placeholder: String,
    form: Option<FormBinding<O>>,
    fluid: bool,
}

impl<O, V, Msg> SelectionConfig<O, V, Msg>
where
    O: Clone + PartialEq + 'static,
    V: SelectionValue<O>,
    Msg: 'static,
{
    /// Selection `id` showing `value`, labelling options with `label`.
    pub fn new(
        id: impl Into<String>,
        state: DrawerState,
        value: V,
        label: impl Fn(&O) -> String + 'static,
        on_toggle: impl Fn(DrawerState) -> Msg + 'static,
        on_select: impl Fn(O) -> Msg + 'static,
    ) -> Self {
        Self {
            select: SelectConfig::new(id, state, on_toggle, on_select),
            value,
            options: Vec::new(),
            label: Rc::new(label),
            placeholder: String::new(),
            form: None,
            fluid: false,
        }
    }

    /// Options listed in the drawer, in order.
    pub fn options(mut self, options: impl IntoIterator<Item = O>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    /// Label shown while nothing is selected.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Mirrors the value into a hidden form input named `name`.
    pub fn form_input(
        mut self,
        name: impl Into<String>,
        value: impl Fn(&O) -> String + 'static,
    ) -> Self {
        self.form = Some(FormBinding {
            name: name.into(),
            value: Rc::new(value),
        });
        self
    }

    /// Stretches the selection to its container width.
    pub fn fluid(mut self, fluid: bool) -> Self {
        self.fluid = fluid;
        self
    }

    /// Interaction that opens and closes the drawer.
    pub fn toggle_event(mut self, toggle_event: ToggleEvent) -> Self {
        self.select = self.select.toggle_event(toggle_event);
        self
    }

    /// Drawer animation.
    pub fn transition(mut self, transition: Transition) -> Self {
        self.select = self.select.transition(transition);
        self
    }

    /// Disables every interaction.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.select = self.select.disabled(disabled);
        self
    }

    /// Extra root class words.
    pub fn class(mut self, classes: &str) -> Self {
        self.select = self.select.class(classes);
        self
    }

    /// Extra root attribute.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.select = self.select.attribute(name, value);
        self
    }

    /// Whether the identifier is blank.
    pub fn is_anonymous(&self) -> bool {
        self.select.dropdown_config().is_anonymous()
    }

    /// Current value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Whether nothing meaningful is selected.
    pub fn shows_placeholder(&self) -> bool {
        self.value.selected().is_empty()
    }

    /// Text shown in the toggle region: the placeholder, or the labels of
    /// the chosen options joined with `", "`.
    pub fn display_label(&self) -> String {
        if self.shows_placeholder() {
            return self.placeholder.clone();
        }
        self.value
            .selected()
            .into_iter()
            .map(|option| (self.label)(option))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Form value mirrored into the hidden input, if bound.
    pub fn form_value(&self) -> Option<String> {
        self.form.as_ref().map(|form| {
            self.value
                .selected()
                .into_iter()
                .map(|option| (form.value)(option))
                .collect::<Vec<_>>()
                .join(",")
        })
    }

    fn root(&self) -> Element<Msg> {
        let mut preset = Vec::new();
        if self.fluid {
            preset.push("fluid");
        }
        if self.value.is_multiple() {
            preset.push("multiple");
        }
        preset.push("selection");
        self.select.dropdown_config().root_with(Some(&preset.join(" ")))
    }

    fn chosen_label(&self, parts: &SelectParts<O, Msg>, option: &O) -> Element<Msg> {
        let label = Element::new("a")
            .class("ui label")
            .attr_opt("data-value", self.form.as_ref().map(|form| (form.value)(option)))
            .text((self.label)(option));
        let delete = Element::new("i").class("delete icon");
        let delete = if parts.dropdown().is_disabled() {
            delete
        } else {
            delete.listener(
                Listener::new(EventKind::Click, parts.select_handler(option.clone()))
                    .stopping_propagation(),
            )
        };
        label.child(delete)
    }

    fn option_item(&self, parts: &SelectParts<O, Msg>, option: &O) -> Element<Msg> {
        let item = Element::new("div")
            .class_if(self.value.is_selected(option), "active selected")
            .attr_opt("data-value", self.form.as_ref().map(|form| (form.value)(option)))
            .text((self.label)(option));
        parts.option_with(option.clone(), item)
    }
}

/// Renders a selection: optional hidden input, chosen labels (multiple
/// values), dropdown icon, current-value text and the option drawer.
pub fn selection<O, V, Msg>(config: &SelectionConfig<O, V, Msg>) -> Node<Msg>
where
    O: Clone + PartialEq + 'static,
    V: SelectionValue<O>,
    Msg: 'static,
{
    let chosen = config.value.selected();
    if chosen
        .iter()
        .any(|option| !config.options.contains(option))
    {
        logging::warn!("selection value includes an option missing from the option list");
    }

    let parts = config.select.parts();
    let mut children: Vec<Node<Msg>> = Vec::new();

    if let (Some(form), Some(value)) = (config.form.as_ref(), config.form_value()) {
        children.push(
            Element::new("input")
                .attr("type", "hidden")
                .attr("name", form.name.clone())
                .attr("value", value)
                .into(),
        );
    }

    if config.value.is_multiple() {
        children.extend(
            chosen
                .iter()
                .map(|option| config.chosen_label(&parts, option).into()),
        );
    }

    children.push(parts.icon().into());

    let text = if chosen.is_empty() {
        Element::new("div")
            .class("default text")
            .text(config.placeholder.clone())
    } else if config.value.is_multiple() {
        Element::new("div").class("text")
    } else {
        parts.text(config.display_label())
    };
    children.push(parts.toggle(text).into());

    children.push(
        parts
            .drawer(
                config
                    .options
                    .iter()
                    .map(|option| config.option_item(&parts, option)),
            )
            .into(),
    );

    config.root().children(children).into()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Planet {
        Mercury,
        Venus,
        Earth,
    }

    impl Planet {
        const ALL: [Planet; 3] = [Planet::Mercury, Planet::Venus, Planet::Earth];

        fn name(&self) -> String {
            format!("{self:?}")
        }

        fn slug(&self) -> String {
            self.name().to_lowercase()
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Msg {
        Toggled(DrawerState),
        Picked(Planet),
    }

    fn optional(state: DrawerState, value: Option<Planet>) -> Node<Msg> {
        selection(
            &SelectionConfig::new("planet", state, value, Planet::name, Msg::Toggled, Msg::Picked)
                .options(Planet::ALL)
                .placeholder("Choose a planet")
                .form_input("planet", Planet::slug),
        )
    }

    fn text_region(node: &Node<Msg>) -> &Element<Msg> {
        let path = node.find_path(|el| el.has_class("text")).expect("text");
        node.element_at(&path).expect("text element")
    }

    #[test]
    fn nothing_selected_shows_placeholder() {
        let node = optional(DrawerState::Closed, None);
        let text = text_region(&node);
        assert!(text.has_class("default text"));
        assert_eq!(text.text_content(), "Choose a planet");

        let input = node
            .element_at(&[0])
            .expect("hidden input");
        assert_eq!(input.attribute("type"), Some("hidden"));
        assert_eq!(input.attribute("value"), Some(""));
    }

    #[test]
    fn selected_value_shows_formatted_label_and_highlight() {
        let node = optional(DrawerState::Opened, Some(Planet::Venus));
        let text = text_region(&node);
        assert!(!text.has_class("default"));
        assert_eq!(text.text_content(), "Venus");

        let active = node.find_all_paths(|el| el.has_class("active selected item"));
        assert_eq!(active.len(), 1);
        let item = node.element_at(&active[0]).expect("active item");
        assert_eq!(item.text_content(), "Venus");
        assert_eq!(item.attribute("data-value"), Some("venus"));
        assert_eq!(
            node.element_at(&[0]).and_then(|input| input.attribute("value")),
            Some("venus")
        );
    }

    #[test]
    fn root_classes_and_option_click() {
        let node = optional(DrawerState::Opened, None);
        assert_eq!(
            node.element_at(&[]).expect("root").class_list().to_string(),
            "ui selection dropdown active visible"
        );
        let items = node.find_all_paths(|el| el.has_class("item"));
        assert_eq!(
            node.trigger(&items[2], EventKind::Click),
            vec![Msg::Picked(Planet::Earth), Msg::Toggled(DrawerState::Closing)]
        );
    }

    #[test]
    fn mandatory_value_never_shows_placeholder() {
        let config = SelectionConfig::new(
            "home",
            DrawerState::Closed,
            Planet::Earth,
            Planet::name,
            Msg::Toggled,
            Msg::Picked,
        )
        .options(Planet::ALL)
        .placeholder("unused");
        assert!(!config.shows_placeholder());
        assert_eq!(config.display_label(), "Earth");
        assert_eq!(config.form_value(), None);
    }

    #[test]
    fn multiple_values_render_labels_with_delete_icons() {
        let value = vec![Planet::Mercury, Planet::Earth];
        let config = SelectionConfig::new(
            "tour",
            DrawerState::Closed,
            value,
            Planet::name,
            Msg::Toggled,
            Msg::Picked,
        )
        .options(Planet::ALL)
        .fluid(true)
        .form_input("tour", Planet::slug);
        let node = selection(&config);

        assert_eq!(
            node.element_at(&[]).expect("root").class_list().to_string(),
            "ui fluid multiple selection dropdown"
        );
        let labels = node.find_all_paths(|el| el.has_class("ui label"));
        assert_eq!(labels.len(), 2);
        assert_eq!(
            node.element_at(&labels[1]).expect("label").text_content(),
            "Earth"
        );
        assert_eq!(
            node.trigger_where(|el| el.has_class("delete icon"), EventKind::Click),
            vec![Msg::Picked(Planet::Mercury)]
        );
        assert_eq!(config.form_value().as_deref(), Some("mercury,earth"));
        assert_eq!(config.display_label(), "Mercury, Earth");
    }

    #[test]
    fn with_selected_follows_cardinality() {
        assert_eq!(Planet::Venus.with_selected(Planet::Earth), Planet::Earth);
        assert_eq!(None::<Planet>.with_selected(Planet::Earth), Some(Planet::Earth));
        assert_eq!(
            vec![Planet::Venus].with_selected(Planet::Earth),
            vec![Planet::Venus, Planet::Earth]
        );
        assert_eq!(
            vec![Planet::Venus, Planet::Earth].with_selected(Planet::Venus),
            vec![Planet::Earth]
        );
        let set: BTreeSet<Planet> = [Planet::Mercury].into_iter().collect();
        let set = set.with_selected(Planet::Mercury);
        assert!(set.is_empty());
    }

    #[test]
    fn disabled_selection_ignores_delete_and_items() {
        let config = SelectionConfig::new(
            "locked",
            DrawerState::Closed,
            vec![Planet::Venus],
            Planet::name,
            Msg::Toggled,
            Msg::Picked,
        )
        .options(Planet::ALL)
        .disabled(true);
        let node = selection(&config);
        assert!(node
            .trigger_where(|el| el.has_class("delete icon"), EventKind::Click)
            .is_empty());
        assert!(node.trigger(&[], EventKind::Click).is_empty());
        let root = node.element_at(&[]).expect("root");
        assert_eq!(
            root.class_list().to_string(),
            "ui multiple selection dropdown disabled"
        );
    }

    #[test]
    fn extra_attributes_reach_the_selection_root() {
        let config = SelectionConfig::new(
            "planet",
            DrawerState::Closed,
            None::<Planet>,
            Planet::name,
            Msg::Toggled,
            Msg::Picked,
        )
        .options(Planet::ALL)
        .attribute("data-testid", "planet-picker");
        assert!(!config.is_anonymous());
        let node = selection(&config);
        assert_eq!(
            node.element_at(&[]).and_then(|root| root.attribute("data-testid")),
            Some("planet-picker")
        );
    }

    #[test]
    fn blank_identifier_is_anonymous() {
        let config = SelectionConfig::new(
            "",
            DrawerState::Closed,
            None::<Planet>,
            Planet::name,
            Msg::Toggled,
            Msg::Picked,
        );
        assert!(config.is_anonymous());
    }
}
