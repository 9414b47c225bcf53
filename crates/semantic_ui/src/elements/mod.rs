//! Stateless framework elements.

mod button;
mod container;
mod header;
mod icon;
mod label;
mod list;
mod segment;

use semantic_markup::{ClassList, Element, EventKind, Handler, Listener, Node};

use crate::{Alignment, Color, Emphasis, Size};

pub use button::Button;
pub use container::Container;
pub use header::{Header, HeaderLevel};
pub use icon::Icon;
pub use label::{Label, Pointing};
pub use list::{List, ListItem};
pub use segment::Segment;
