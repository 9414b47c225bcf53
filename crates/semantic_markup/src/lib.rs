//! Host-agnostic markup tree used by the Semantic UI widget crates.
//!
//! Widgets render into [`Node`] values: element tags, ordered class lists and
//! attributes, and [`Listener`]s that turn delivered events into caller
//! messages. The tree can be rendered to an HTML string, mounted through the
//! Leptos adapter, or driven directly with [`Node::trigger`] to simulate user
//! interaction without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class_list;
mod dispatch;
mod html;
mod leptos_view;
mod node;

pub use class_list::ClassList;
pub use html::{render_html, HtmlOptions};
pub use leptos_view::into_view;
pub use node::{text, Element, EventKind, Handler, Listener, Node};

/// Convenience imports for widget crates building markup.
pub mod prelude {
    pub use crate::{text, ClassList, Element, EventKind, Handler, Listener, Node};
}
