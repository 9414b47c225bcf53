use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Tag used for a header.
pub enum HeaderLevel {
    /// `<h1>`
    H1,
    /// `<h2>`
    #[default]
    H2,
    /// `<h3>`
    H3,
    /// `<h4>`
    H4,
    /// `<div>`, sized through classes only.
    Content,
}

impl HeaderLevel {
    /// HTML tag name.
    pub fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::Content => "div",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// `ui header` element.
pub struct Header {
    level: HeaderLevel,
    size: Size,
    alignment: Option<Alignment>,
    color: Option<Color>,
    dividing: bool,
    icon: Option<Icon>,
    subheader: Option<String>,
}

impl Header {
    /// `h2` header.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag level.
    pub fn level(mut self, level: HeaderLevel) -> Self {
        self.level = level;
        self
    }

    /// Size variation, independent of the tag.
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Text alignment.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Color variation.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Rule under the header.
    pub fn dividing(mut self, dividing: bool) -> Self {
        self.dividing = dividing;
        self
    }

    /// Leading icon.
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// `sub header` line under the main text.
    pub fn subheader(mut self, subheader: impl Into<String>) -> Self {
        self.subheader = Some(subheader.into());
        self
    }

    /// Full class list.
    pub fn classes(&self) -> ClassList {
        ClassList::from("ui")
            .add_opt(self.size.class())
            .add_opt(self.color.map(Color::class))
            .add_opt(self.alignment.map(Alignment::class))
            .add_if(self.dividing, "dividing")
            .add("header")
    }

    /// Renders the header. With an icon or sub header, the text is wrapped
    /// in a `content` block.
    pub fn render<Msg>(&self, title: impl Into<String>) -> Element<Msg> {
        let header = Element::new(self.level.tag()).classes(&self.classes());
        if self.icon.is_none() && self.subheader.is_none() {
            return header.text(title);
        }
        let mut content = Element::new("div").class("content").text(title);
        if let Some(subheader) = &self.subheader {
            content = content.child(Element::new("div").class("sub header").text(subheader.clone()));
        }
        match &self.icon {
            Some(icon) => header.child(icon.render()).child(content),
            None => header.child(content),
        }
    }
}
