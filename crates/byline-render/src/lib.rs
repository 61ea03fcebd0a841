//! Post view helpers for Byline: in-content ad injection and the
//! share-widget snippet.
//!
//! Pure synchronous string/markup transformations; no HTTP or database
//! dependencies.
//!
//! # Quick start
//!
//! ```no_run
//! use byline_core::post::Post;
//! use byline_render::{AdSource, format_with_injected_ad, render_share_widget};
//!
//! struct NoAds;
//!
//! impl AdSource for NoAds {
//!   fn select_ad(&self, _placement: &str, _logged_in: bool) -> String {
//!     String::new()
//!   }
//! }
//!
//! # fn demo(post: &Post) -> byline_render::Result<()> {
//! let html = format_with_injected_ad(&NoAds, post, true)?;
//! let widget = render_share_widget(post);
//! # Ok(())
//! # }
//! ```

mod ad;
mod share;
mod text;

pub mod error;

pub use ad::{
  AdSource, JUMP_ANCHOR, POST_CONTENT_PLACEMENT, format_with_injected_ad,
  inject_ad,
};
pub use error::{Error, Result};
pub use share::render_share_widget;
pub use text::{escape_js, truncate_words};
