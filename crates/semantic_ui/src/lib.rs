//! Typed Semantic UI widgets rendering into [`semantic_markup`] trees.
//!
//! Stateful modules (dropdown, select, selection, modal) share the four-state
//! [`DrawerState`] lifecycle. The caller owns that state: widgets only report
//! requested transitions through caller-supplied message constructors and
//! render whatever state they are handed. Stateless elements, collections and
//! views are plain class-list builders.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod collections;
mod elements;
mod modules;
mod tokens;
mod views;

pub use collections::{Breadcrumb, Column, Grid, Row, Section};
pub use elements::{
    Button, Container, Header, HeaderLevel, Icon, Label, List, ListItem, Pointing, Segment,
};
pub use modules::drawer::{complete_transition, toggle, DrawerState, ToggleEvent, Transition};
pub use modules::dropdown::{dropdown, DropdownConfig, DropdownParts};
pub use modules::modal::{modal, ModalConfig, ModalContent};
pub use modules::select::{select, SelectConfig, SelectParts, SelectVariation};
pub use modules::selection::{selection, SelectionConfig, SelectionValue};
pub use tokens::{
    Alignment, Color, Emphasis, Formatter, MessageFn, Size, TokenParseError, Width,
};
pub use views::{Card, Cards};

/// Convenience imports for applications composing widgets.
pub mod prelude {
    pub use crate::{
        dropdown, modal, select, selection, Alignment, Breadcrumb, Button, Card, Cards, Color,
        Column, Container, DrawerState, DropdownConfig, Emphasis, Grid, Header, HeaderLevel, Icon,
        Label, List, ListItem, ModalConfig, ModalContent, Row, Section, Segment, SelectConfig,
        SelectVariation, SelectionConfig, Size, ToggleEvent, Transition, Width,
    };
    pub use semantic_markup::prelude::*;
}
