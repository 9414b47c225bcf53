//! Stateful modules driven by the drawer lifecycle.

pub mod drawer;
pub mod dropdown;
pub mod modal;
pub mod select;
pub mod selection;
