//! Framework views.

mod card;

pub use card::{Card, Cards};
