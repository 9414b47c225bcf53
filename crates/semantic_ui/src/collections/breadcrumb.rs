use super::*;

/// One step of a [`Breadcrumb`].
pub struct Section<Msg>(Element<Msg>);

impl<Msg: 'static> Section<Msg> {
    /// Plain `div.section`.
    pub fn new(label: impl Into<String>) -> Self {
        Self(Element::new("div").class("section").text(label))
    }

    /// Clickable `a.section` reporting `on_click`.
    pub fn link(label: impl Into<String>, on_click: impl Fn() -> Msg + 'static) -> Self {
        Self(
            Element::new("a")
                .class("section")
                .text(label)
                .on(EventKind::Click, on_click),
        )
    }

    /// Current location (`active section`).
    pub fn active(label: impl Into<String>) -> Self {
        Self(
            Element::new("div")
                .class("active section")
                .attr("aria-current", "page")
                .text(label),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Divider {
    Text(String),
    Icon(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `ui breadcrumb` trail.
pub struct Breadcrumb {
    size: Size,
    divider: Divider,
}

impl Default for Breadcrumb {
    fn default() -> Self {
        Self {
            size: Size::default(),
            divider: Divider::Text("/".to_string()),
        }
    }
}

impl Breadcrumb {
    /// Trail separated by `/`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Size variation.
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Text divider.
    pub fn divider(mut self, divider: impl Into<String>) -> Self {
        self.divider = Divider::Text(divider.into());
        self
    }

    /// Icon divider (`"right angle"`).
    pub fn icon_divider(mut self, name: impl Into<String>) -> Self {
        self.divider = Divider::Icon(name.into());
        self
    }

    /// Full class list.
    pub fn classes(&self) -> ClassList {
        ClassList::from("ui")
            .add_opt(self.size.class())
            .add("breadcrumb")
    }

    /// Renders `sections` with a divider between each pair.
    pub fn render<Msg>(&self, sections: impl IntoIterator<Item = Section<Msg>>) -> Element<Msg> {
        let mut trail = Element::new("div")
            .classes(&self.classes())
            .attr("aria-label", "breadcrumb");
        for (index, Section(section)) in sections.into_iter().enumerate() {
            if index > 0 {
                trail = trail.child(self.divider_element());
            }
            trail = trail.child(section);
        }
        trail
    }

    fn divider_element<Msg>(&self) -> Element<Msg> {
        match &self.divider {
            Divider::Text(text) => Element::new("div").class("divider").text(text.clone()),
            Divider::Icon(name) => Element::new("i")
                .classes(&ClassList::from(name.as_str()).add("icon divider")),
        }
    }
}
