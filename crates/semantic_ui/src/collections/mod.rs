//! Framework collections: grids and breadcrumbs.

mod breadcrumb;
mod grid;

use semantic_markup::{ClassList, Element, EventKind, Node};

use crate::{Size, Width};

pub use breadcrumb::{Breadcrumb, Section};
pub use grid::{Column, Grid, Row};
