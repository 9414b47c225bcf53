//! Interactive gallery for the `semantic_ui` widgets.
//!
//! The page is a pure function of [`ShowcaseState`]; every widget reports
//! messages that [`update`] folds back into the state. The same tree renders
//! to static HTML for the command line or mounts as the [`ShowcaseApp`]
//! Leptos component.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod app;
mod cli;
mod config;
mod error;
mod state;
mod view;

pub use app::{restore_state, ShowcaseApp, ShowcaseAppProps};
pub use cli::{Invocation, USAGE};
pub use config::{ShowcaseConfig, DEFAULT_CONFIG_FILE};
pub use error::ShowcaseError;
pub use state::{
    update, DrawerId, Flavor, MenuAction, ShowcaseMsg, ShowcaseState, SortOrder, Topping,
};
pub use view::{render_page, view};
