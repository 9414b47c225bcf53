use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
/// `<i class="{name} icon">` marker.
pub struct Icon {
    name: String,
    size: Size,
    color: Option<Color>,
    disabled: bool,
    loading: bool,
}

impl Icon {
    /// Icon named by its framework class words (`"search"`, `"angle right"`).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: Size::default(),
            color: None,
            disabled: false,
            loading: false,
        }
    }

    /// Size variation.
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Color variation.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Dimmed icon.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Spinning icon.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Icon name words.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full class list, ending in `icon`.
    pub fn classes(&self) -> ClassList {
        ClassList::from(self.name.as_str())
            .add_opt(self.size.class())
            .add_opt(self.color.map(Color::class))
            .add_if(self.disabled, "disabled")
            .add_if(self.loading, "loading")
            .add("icon")
    }

    /// Renders the `<i>` marker.
    pub fn render<Msg>(&self) -> Element<Msg> {
        Element::new("i")
            .classes(&self.classes())
            .attr("aria-hidden", "true")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn icon_classes_end_with_icon() {
        let icon = Icon::new("angle right")
            .size(Size::Large)
            .color(Color::Teal)
            .loading(true);
        assert_eq!(icon.classes().to_string(), "angle right large teal loading icon");
        assert_eq!(
            Node::<()>::from(icon.render()).to_html(),
            r#"<i class="angle right large teal loading icon" aria-hidden="true"></i>"#
        );
    }

    #[test]
    fn default_size_adds_no_class() {
        assert_eq!(Icon::new("search").classes().to_string(), "search icon");
    }
}
