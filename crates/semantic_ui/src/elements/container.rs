use super::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// `ui container` page-width wrapper.
pub struct Container {
    text: bool,
    fluid: bool,
    alignment: Option<Alignment>,
}

impl Container {
    /// Fixed-width container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Narrow reading-width container.
    pub fn text(mut self, text: bool) -> Self {
        self.text = text;
        self
    }

    /// Full-width container.
    pub fn fluid(mut self, fluid: bool) -> Self {
        self.fluid = fluid;
        self
    }

    /// Content alignment.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Full class list.
    pub fn classes(&self) -> ClassList {
        ClassList::from("ui")
            .add_if(self.text, "text")
            .add_if(self.fluid, "fluid")
            .add_opt(self.alignment.map(Alignment::class))
            .add("container")
    }

    /// Renders a `div` holding `children`.
    pub fn render<Msg, I>(&self, children: I) -> Element<Msg>
    where
        I: IntoIterator,
        I::Item: Into<Node<Msg>>,
    {
        Element::new("div").classes(&self.classes()).children(children)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn text_container_html() {
        let node: Node<()> = Container::new().text(true).render(["Hello"]).into();
        assert_eq!(node.to_html(), r#"<div class="ui text container">Hello</div>"#);
    }
}
