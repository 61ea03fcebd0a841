//! The share-widget snippet.
//!
//! Emits a fixed script invocation handing the widget an escaped title and a
//! word-capped excerpt of the body.

use byline_core::post::Post;

use crate::text::{escape_js, truncate_words};

/// Body excerpt cap, in words.
const EXCERPT_WORDS: usize = 75;

/// Render the share-widget script fragment for `post`.
///
/// Title and excerpt are escaped for a script-string-literal context, so
/// post content can never terminate the string literal or close the tag.
pub fn render_share_widget(post: &Post) -> String {
  let title = escape_js(&post.title);
  let content = escape_js(&truncate_words(&post.body, EXCERPT_WORDS, "..."));

  format!(
    "<script type=\"text/javascript\">ShareBar.addEntry({{title:'{title}', \
     content:'{content}'}}, {{button:true}});</script>"
  )
}

// ─── Tests ───────────────────────────────────────────────────────────────────
