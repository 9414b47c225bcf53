use std::rc::Rc;

use semantic_markup::{ClassList, Element, EventKind, Handler, Listener, Node};

use crate::{Color, Width};

/// `ui card` content block.
pub struct Card<Msg> {
    image: Option<(String, String)>,
    header: Option<String>,
    meta: Option<String>,
    description: Vec<Node<Msg>>,
    extra: Vec<Node<Msg>>,
    color: Option<Color>,
    fluid: bool,
    on_click: Option<Handler<Msg>>,
}

impl<Msg> Default for Card<Msg> {
    fn default() -> Self {
        Self {
            image: None,
            header: None,
            meta: None,
            description: Vec::new(),
            extra: Vec::new(),
            color: None,
            fluid: false,
            on_click: None,
        }
    }
}

impl<Msg: 'static> Card<Msg> {
    /// Empty card.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leading image with its alt text.
    pub fn image(mut self, src: impl Into<String>, alt: impl Into<String>) -> Self {
        self.image = Some((src.into(), alt.into()));
        self
    }

    /// Title line.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Muted line under the header.
    pub fn meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    /// Appends to the description block.
    pub fn description(mut self, node: impl Into<Node<Msg>>) -> Self {
        self.description.push(node.into());
        self
    }

    /// Appends to the `extra content` footer.
    pub fn extra(mut self, node: impl Into<Node<Msg>>) -> Self {
        self.extra.push(node.into());
        self
    }

    /// Colored top border.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Takes the container's full width.
    pub fn fluid(mut self, fluid: bool) -> Self {
        self.fluid = fluid;
        self
    }

    /// Renders the card as an `a.link` reporting `on_click`.
    pub fn on_click(mut self, on_click: impl Fn() -> Msg + 'static) -> Self {
        self.on_click = Some(Rc::new(on_click));
        self
    }

    /// Full class list.
    pub fn classes(&self) -> ClassList {
        ClassList::from("ui")
            .add_opt(self.color.map(Color::class))
            .add_if(self.fluid, "fluid")
            .add_if(self.on_click.is_some(), "link")
            .add("card")
    }

    /// Renders the card.
    pub fn render(self) -> Element<Msg> {
        let classes = self.classes();
        let mut card = match self.on_click {
            Some(handler) => Element::new("a")
                .classes(&classes)
                .listener(Listener::new(EventKind::Click, handler)),
            None => Element::new("div").classes(&classes),
        };

        if let Some((src, alt)) = self.image {
            card = card.child(
                Element::new("div")
                    .class("image")
                    .child(Element::new("img").attr("src", src).attr("alt", alt)),
            );
        }

        if self.header.is_some() || self.meta.is_some() || !self.description.is_empty() {
            let mut content = Element::new("div").class("content");
            if let Some(header) = self.header {
                content = content.child(Element::new("div").class("header").text(header));
            }
            if let Some(meta) = self.meta {
                content = content.child(Element::new("div").class("meta").text(meta));
            }
            if !self.description.is_empty() {
                content = content.child(
                    Element::new("div")
                        .class("description")
                        .children(self.description),
                );
            }
            card = card.child(content);
        }

        if !self.extra.is_empty() {
            card = card.child(Element::new("div").class("extra content").children(self.extra));
        }
        card
    }
}

/// `ui cards` group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cards {
    per_row: Option<Width>,
    stackable: bool,
}

impl Cards {
    /// Group flowing as many cards per row as fit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed count per row (`three cards`).
    pub fn per_row(mut self, per_row: Width) -> Self {
        self.per_row = Some(per_row);
        self
    }

    /// Cards stack on narrow screens.
    pub fn stackable(mut self, stackable: bool) -> Self {
        self.stackable = stackable;
        self
    }

    /// Full class list.
    pub fn classes(&self) -> ClassList {
        ClassList::from("ui")
            .add_opt(self.per_row.map(Width::word))
            .add_if(self.stackable, "stackable")
            .add("cards")
    }

    /// Renders `cards` in a group.
    pub fn render<Msg: 'static>(&self, cards: impl IntoIterator<Item = Card<Msg>>) -> Element<Msg> {
        Element::new("div")
            .classes(&self.classes())
            .children(cards.into_iter().map(Card::render))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Msg {
        Open(u8),
    }

    #[test]
    fn card_regions_in_order() {
        let node: Node<Msg> = Card::new()
            .image("/kristy.png", "Kristy")
            .header("Kristy")
            .meta("Joined in 2013")
            .description("Kristy is an art director.")
            .extra("22 friends")
            .render()
            .into();
        assert_eq!(
            node.to_html(),
            concat!(
                r#"<div class="ui card">"#,
                r#"<div class="image"><img src="/kristy.png" alt="Kristy"></div>"#,
                r#"<div class="content"><div class="header">Kristy</div>"#,
                r#"<div class="meta">Joined in 2013</div>"#,
                r#"<div class="description">Kristy is an art director.</div></div>"#,
                r#"<div class="extra content">22 friends</div></div>"#
            )
        );
    }

    #[test]
    fn link_cards_report_clicks() {
        let node: Node<Msg> = Cards::new()
            .per_row(Width::new(3))
            .render([
                Card::new().header("One").on_click(|| Msg::Open(1)),
                Card::new().header("Two"),
            ])
            .into();
        assert_eq!(
            node.element_at(&[]).map(|el| el.class_list().to_string()),
            Some("ui three cards".to_string())
        );
        let header = node.find_path(|el| el.has_class("header")).expect("header");
        assert_eq!(node.trigger(&header, EventKind::Click), vec![Msg::Open(1)]);
        assert_eq!(
            node.element_at(&[0]).map(|el| el.tag().to_string()),
            Some("a".to_string())
        );
        assert!(node.trigger(&[1], EventKind::Click).is_empty());
    }
}
