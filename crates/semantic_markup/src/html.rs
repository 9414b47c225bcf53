//! HTML string rendering for server output and snapshot-style assertions.

use serde::{Deserialize, Serialize};

use crate::{Element, Node};

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Output options for [`render_html`].
pub struct HtmlOptions {
    /// Emit one element per line with indentation.
    pub pretty: bool,
    /// Spaces per nesting level when `pretty` is set.
    pub indent: usize,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
        }
    }
}

/// Renders `node` as HTML. Listeners are host wiring and never appear in
/// the output.
pub fn render_html<Msg>(node: &Node<Msg>, options: &HtmlOptions) -> String {
    let mut out = String::new();
    write_node(node, options, 0, &mut out);
    if options.pretty && out.ends_with('\n') {
        out.pop();
    }
    out
}

impl<Msg> Node<Msg> {
    /// Compact HTML rendering.
    pub fn to_html(&self) -> String {
        render_html(self, &HtmlOptions::default())
    }
}

fn write_node<Msg>(node: &Node<Msg>, options: &HtmlOptions, depth: usize, out: &mut String) {
    match node {
        Node::Text(text) => {
            pad(options, depth, out);
            escape_into(text, out);
            newline(options, out);
        }
        Node::Element(element) => write_element(element, options, depth, out),
    }
}

fn write_element<Msg>(element: &Element<Msg>, options: &HtmlOptions, depth: usize, out: &mut String) {
    pad(options, depth, out);
    out.push('<');
    out.push_str(element.tag());
    if !element.class_list().is_empty() {
        out.push_str(" class=\"");
        escape_into(&element.class_list().to_string(), out);
        out.push('"');
    }
    for (name, value) in element.attributes() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_into(value, out);
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag()) {
        newline(options, out);
        return;
    }

    let children = element.child_nodes();
    let inline = children.iter().all(|child| matches!(child, Node::Text(_)));
    if options.pretty && inline {
        for child in children {
            if let Node::Text(text) = child {
                escape_into(text, out);
            }
        }
    } else {
        newline(options, out);
        for child in children {
            write_node(child, options, depth + 1, out);
        }
        pad(options, depth, out);
    }
    out.push_str("</");
    out.push_str(element.tag());
    out.push('>');
    newline(options, out);
}

fn pad(options: &HtmlOptions, depth: usize, out: &mut String) {
    if options.pretty {
        out.extend(std::iter::repeat(' ').take(depth * options.indent));
    }
}

fn newline(options: &HtmlOptions, out: &mut String) {
    if options.pretty {
        out.push('\n');
    }
}

fn escape_into(raw: &str, out: &mut String) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::EventKind;

    fn sample() -> Node<()> {
        Element::new("div")
            .class("ui segment")
            .attr("id", "main")
            .on(EventKind::Click, || ())
            .child(Element::new("p").text("Fish & <chips>"))
            .child(Element::new("input").attr("type", "hidden").attr("value", "\"a\"'b'"))
            .into()
    }

    #[test]
    fn compact_output_escapes_and_skips_listeners() {
        assert_eq!(
            sample().to_html(),
            "<div class=\"ui segment\" id=\"main\"><p>Fish &amp; &lt;chips&gt;</p>\
             <input type=\"hidden\" value=\"&quot;a&quot;&#39;b&#39;\"></div>"
        );
    }

    #[test]
    fn pretty_output_indents_nested_elements() {
        let options = HtmlOptions {
            pretty: true,
            indent: 2,
        };
        assert_eq!(
            render_html(&sample(), &options),
            "<div class=\"ui segment\" id=\"main\">\n  <p>Fish &amp; &lt;chips&gt;</p>\n  \
             <input type=\"hidden\" value=\"&quot;a&quot;&#39;b&#39;\">\n</div>"
        );
    }

    #[test]
    fn text_root_and_empty_element() {
        let root: Node<()> = Node::Text("a < b".to_string());
        assert_eq!(root.to_html(), "a &lt; b");
        let empty: Node<()> = Element::new("div").class("divider").into();
        assert_eq!(empty.to_html(), "<div class=\"divider\"></div>");
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: HtmlOptions = serde_json::from_str(r#"{"pretty":true}"#).expect("options");
        assert_eq!(
            options,
            HtmlOptions {
                pretty: true,
                indent: 2
            }
        );
    }
}
