use super::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// `ui segment` grouping block.
pub struct Segment {
    raised: bool,
    stacked: bool,
    basic: bool,
    inverted: bool,
    padded: bool,
    color: Option<Color>,
    alignment: Option<Alignment>,
}

impl Segment {
    /// Plain segment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop shadow.
    pub fn raised(mut self, raised: bool) -> Self {
        self.raised = raised;
        self
    }

    /// Paper-stack edge.
    pub fn stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    /// Borderless segment.
    pub fn basic(mut self, basic: bool) -> Self {
        self.basic = basic;
        self
    }

    /// Dark background.
    pub fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Extra inner padding.
    pub fn padded(mut self, padded: bool) -> Self {
        self.padded = padded;
        self
    }

    /// Colored top border.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
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
            .add_opt(self.color.map(Color::class))
            .add_if(self.inverted, "inverted")
            .add_if(self.raised, "raised")
            .add_if(self.stacked, "stacked")
            .add_if(self.basic, "basic")
            .add_if(self.padded, "padded")
            .add_opt(self.alignment.map(Alignment::class))
            .add("segment")
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
