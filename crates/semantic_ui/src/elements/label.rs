use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side a pointing label points to.
pub enum Pointing {
    /// `pointing`
    Up,
    /// `pointing below`
    Below,
    /// `left pointing`
    Left,
    /// `right pointing`
    Right,
}

impl Pointing {
    /// Class words.
    pub fn class(self) -> &'static str {
        match self {
            Self::Up => "pointing",
            Self::Below => "pointing below",
            Self::Left => "left pointing",
            Self::Right => "right pointing",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// `ui label` element.
pub struct Label {
    color: Option<Color>,
    size: Size,
    basic: bool,
    pointing: Option<Pointing>,
    icon: Option<Icon>,
    detail: Option<String>,
}

impl Label {
    /// Plain label.
    pub fn new() -> Self {
        Self::default()
    }

    /// Color variation.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Size variation.
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Outlined label.
    pub fn basic(mut self, basic: bool) -> Self {
        self.basic = basic;
        self
    }

    /// Speech-bubble pointer.
    pub fn pointing(mut self, pointing: Pointing) -> Self {
        self.pointing = Some(pointing);
        self
    }

    /// Leading icon.
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Trailing `detail` text.
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Full class list.
    pub fn classes(&self) -> ClassList {
        ClassList::from("ui")
            .add_opt(self.color.map(Color::class))
            .add_opt(self.size.class())
            .add_if(self.basic, "basic")
            .add_opt(self.pointing.map(Pointing::class))
            .add("label")
    }

    /// Renders the icon, `children` and detail inside a `div`.
    pub fn render<Msg, I>(&self, children: I) -> Element<Msg>
    where
        I: IntoIterator,
        I::Item: Into<Node<Msg>>,
    {
        let mut label = Element::new("div").classes(&self.classes());
        if let Some(icon) = &self.icon {
            label = label.child(icon.render());
        }
        label = label.children(children);
        if let Some(detail) = &self.detail {
            label = label.child(Element::new("div").class("detail").text(detail.clone()));
        }
        label
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn label_renders_icon_text_and_detail() {
        let label = Label::new()
            .color(Color::Blue)
            .pointing(Pointing::Below)
            .icon(Icon::new("mail"))
            .detail("23");
        let node: Node<()> = label.render(["Inbox"]).into();
        assert_eq!(
            node.to_html(),
            concat!(
                r#"<div class="ui blue pointing below label">"#,
                r#"<i class="mail icon" aria-hidden="true"></i>Inbox"#,
                r#"<div class="detail">23</div></div>"#
            )
        );
    }
}
