use super::*;

/// One entry of a [`List`].
pub struct ListItem<Msg>(Element<Msg>);

impl<Msg> ListItem<Msg> {
    /// `div.item` holding `children`.
    pub fn new<I>(children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node<Msg>>,
    {
        Self(Element::new("div").class("item").children(children))
    }

    /// Item with a leading icon and a `content` block.
    pub fn with_icon<I>(icon: &Icon, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node<Msg>>,
    {
        Self(
            Element::new("div")
                .class("item")
                .child(icon.render())
                .child(Element::new("div").class("content").children(children)),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// `ui list` element.
pub struct List {
    bulleted: bool,
    ordered: bool,
    divided: bool,
    relaxed: bool,
}

impl List {
    /// Plain list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bullet markers.
    pub fn bulleted(mut self, bulleted: bool) -> Self {
        self.bulleted = bulleted;
        self
    }

    /// Numbered markers.
    pub fn ordered(mut self, ordered: bool) -> Self {
        self.ordered = ordered;
        self
    }

    /// Rules between items.
    pub fn divided(mut self, divided: bool) -> Self {
        self.divided = divided;
        self
    }

    /// Extra spacing between items.
    pub fn relaxed(mut self, relaxed: bool) -> Self {
        self.relaxed = relaxed;
        self
    }

    /// Full class list.
    pub fn classes(&self) -> ClassList {
        ClassList::from("ui")
            .add_if(self.bulleted, "bulleted")
            .add_if(self.ordered, "ordered")
            .add_if(self.divided, "divided")
            .add_if(self.relaxed, "relaxed")
            .add("list")
    }

    /// Renders a `div` holding `items`.
    pub fn render<Msg>(&self, items: impl IntoIterator<Item = ListItem<Msg>>) -> Element<Msg> {
        Element::new("div")
            .classes(&self.classes())
            .attr("role", "list")
            .children(items.into_iter().map(|ListItem(item)| item))
    }
}
