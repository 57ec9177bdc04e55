//! Rendering of poem records.
//!
//! # Responsibility
//! - Shape records into view models (`view`).
//! - Turn view models into host markup through a [`Presenter`].
//!
//! # Invariants
//! - Every render replaces the whole content region; nothing is diffed.

pub mod html;
pub mod labels;
pub mod text;
pub mod view;

use crate::service::theme_service::Theme;

pub use html::HtmlPresenter;
pub use text::TextPresenter;
pub use view::{render_list, render_single, ListView, PoemCard, PoemDetailView};

/// Host-specific markup for the page's content region.
pub trait Presenter {
    fn list(&self, view: &ListView) -> String;
    fn detail(&self, view: &PoemDetailView) -> String;
    /// Standalone message replacing the content region (load failure).
    fn notice(&self, message: &str) -> String;
    /// Wraps rendered content in the page chrome for `theme`
    /// (body class and toggle face).
    fn page(&self, theme: Theme, content: &str) -> String;
}
