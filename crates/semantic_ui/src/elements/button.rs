use std::rc::Rc;

use super::*;

/// `ui button` element.
pub struct Button<Msg> {
    emphasis: Emphasis,
    color: Option<Color>,
    size: Size,
    basic: bool,
    fluid: bool,
    loading: bool,
    disabled: bool,
    active: bool,
    icon: Option<Icon>,
    on_click: Option<Handler<Msg>>,
}

impl<Msg> Default for Button<Msg> {
    fn default() -> Self {
        Self {
            emphasis: Emphasis::default(),
            color: None,
            size: Size::default(),
            basic: false,
            fluid: false,
            loading: false,
            disabled: false,
            active: false,
            icon: None,
            on_click: None,
        }
    }
}

impl<Msg: 'static> Button<Msg> {
    /// Unstyled button.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emphasis level (`primary`, `negative`, ...).
    pub fn emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
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

    /// Outlined button.
    pub fn basic(mut self, basic: bool) -> Self {
        self.basic = basic;
        self
    }

    /// Takes the container's full width.
    pub fn fluid(mut self, fluid: bool) -> Self {
        self.fluid = fluid;
        self
    }

    /// Busy button; clicks are not reported.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Disabled button; clicks are not reported.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Pressed-looking button.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Leading icon.
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Message reported on click.
    pub fn on_click(mut self, on_click: impl Fn() -> Msg + 'static) -> Self {
        self.on_click = Some(Rc::new(on_click));
        self
    }

    /// Full class list.
    pub fn classes(&self) -> ClassList {
        ClassList::from("ui")
            .add_opt(self.emphasis.class())
            .add_opt(self.color.map(Color::class))
            .add_opt(self.size.class())
            .add_if(self.basic, "basic")
            .add_if(self.fluid, "fluid")
            .add_if(self.active, "active")
            .add_if(self.disabled, "disabled")
            .add_if(self.loading, "loading")
            .add("button")
    }

    /// Renders a `<button>` holding the icon followed by `children`.
    pub fn render<I>(&self, children: I) -> Element<Msg>
    where
        I: IntoIterator,
        I::Item: Into<Node<Msg>>,
    {
        let mut button = Element::new("button")
            .classes(&self.classes())
            .attr("type", "button");
        if self.disabled {
            button = button.attr("disabled", "").attr("aria-disabled", "true");
        }
        if let Some(icon) = &self.icon {
            button = button.child(icon.render());
        }
        if let Some(handler) = &self.on_click {
            if !self.disabled && !self.loading {
                button = button.listener(Listener::new(EventKind::Click, Rc::clone(handler)));
            }
        }
        button.children(children)
    }
}
