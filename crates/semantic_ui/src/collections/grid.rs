use super::*;

/// Grid cell.
pub struct Column<Msg>(Element<Msg>);

impl<Msg> Column<Msg> {
    /// Column sized by the enclosing grid or row.
    pub fn new<I>(children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node<Msg>>,
    {
        Self(Element::new("div").class("column").children(children))
    }

    /// Column spanning `width` of the sixteen grid units (`four wide column`).
    pub fn wide<I>(width: Width, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node<Msg>>,
    {
        Self(
            Element::new("div")
                .classes(&ClassList::from(width.word()).add("wide column"))
                .children(children),
        )
    }
}

impl<Msg> From<Column<Msg>> for Node<Msg> {
    fn from(Column(element): Column<Msg>) -> Self {
        element.into()
    }
}

/// Grid row.
pub struct Row<Msg>(Element<Msg>);

impl<Msg> Row<Msg> {
    /// Row of `columns`.
    pub fn new(columns: impl IntoIterator<Item = Column<Msg>>) -> Self {
        Self(Element::new("div").class("row").children(columns))
    }

    /// Row splitting its width evenly into `count` columns.
    pub fn evenly(count: Width, columns: impl IntoIterator<Item = Column<Msg>>) -> Self {
        Self(
            Element::new("div")
                .classes(&ClassList::from(count.word()).add("column row"))
                .children(columns),
        )
    }
}

impl<Msg> From<Row<Msg>> for Node<Msg> {
    fn from(Row(element): Row<Msg>) -> Self {
        element.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// `ui grid` layout.
pub struct Grid {
    columns: Option<Width>,
    stackable: bool,
    divided: bool,
    centered: bool,
    padded: bool,
}

impl Grid {
    /// Grid without a column count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Even column count for direct children (`three column grid`).
    pub fn columns(mut self, columns: Width) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Columns stack on narrow screens.
    pub fn stackable(mut self, stackable: bool) -> Self {
        self.stackable = stackable;
        self
    }

    /// Rules between columns.
    pub fn divided(mut self, divided: bool) -> Self {
        self.divided = divided;
        self
    }

    /// Centers columns that do not fill a row.
    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    /// Keeps the outer gutter.
    pub fn padded(mut self, padded: bool) -> Self {
        self.padded = padded;
        self
    }

    /// Full class list.
    pub fn classes(&self) -> ClassList {
        let classes = ClassList::from("ui");
        let classes = match self.columns {
            Some(columns) => classes.add(columns.word()).add("column"),
            None => classes,
        };
        classes
            .add_if(self.stackable, "stackable")
            .add_if(self.divided, "divided")
            .add_if(self.centered, "centered")
            .add_if(self.padded, "padded")
            .add("grid")
    }

    /// Renders a `div` holding rows or columns.
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
    fn grid_column_words() {
        let grid = Grid::new().columns(Width::new(3)).stackable(true);
        assert_eq!(grid.classes().to_string(), "ui three column stackable grid");
        assert_eq!(Grid::new().divided(true).classes().to_string(), "ui divided grid");
    }

    #[test]
    fn rows_and_wide_columns() {
        let node: Node<()> = Grid::new()
            .render([Row::evenly(
                Width::new(2),
                [
                    Column::wide(Width::new(12), ["Main"]),
                    Column::new(["Side"]),
                ],
            )])
            .into();
        assert_eq!(
            node.to_html(),
            concat!(
                r#"<div class="ui grid"><div class="two column row">"#,
                r#"<div class="twelve wide column">Main</div>"#,
                r#"<div class="column">Side</div></div></div>"#
            )
        );
    }
}
