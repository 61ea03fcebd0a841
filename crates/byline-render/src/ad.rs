//! In-content ad injection for rendered post bodies.
//!
//! The post body is parsed into an HTML fragment tree; when it holds more
//! than four paragraphs, the ad markup is grafted in front of the third one
//! and that paragraph is tagged with an anchor id for in-page navigation.
//! Shorter bodies pass through untouched.

use byline_core::post::Post;
use scraper::{Html, Node, Selector};

use crate::{Error, Result};

/// Placement identifier handed to the ad service for in-content ads.
pub const POST_CONTENT_PLACEMENT: &str = "post_content";

/// Anchor id set on the paragraph that follows the injected ad.
pub const JUMP_ANCHOR: &str = "jump";

/// Bodies with fewer paragraphs than this are left untouched.
const MIN_PARAGRAPHS: usize = 5;

/// 0-based index of the paragraph the ad is inserted in front of.
const AD_PARAGRAPH_INDEX: usize = 2;

// ─── Ad service ──────────────────────────────────────────────────────────────

/// The external ad-selection service.
///
/// Returns embeddable markup for a placement; everything else about it is
/// opaque to this crate.
pub trait AdSource {
  fn select_ad(&self, placement: &str, logged_in: bool) -> String;
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Render `post.body` with an ad for the `post_content` placement injected
/// in front of the third paragraph.
pub fn format_with_injected_ad<A: AdSource>(
  ads: &A,
  post: &Post,
  logged_in: bool,
) -> Result<String> {
  let ad_markup = ads.select_ad(POST_CONTENT_PLACEMENT, logged_in);
  inject_ad(&post.body, &ad_markup)
}

/// Inject `ad_markup` into `body` per the paragraph rules. Exposed for
/// callers that already hold the ad fragment.
///
/// The parser recovers from malformed markup rather than failing; any parse
/// error it records for the body is treated as fatal here, so the helper
/// never silently serializes a repaired tree.
pub fn inject_ad(body: &str, ad_markup: &str) -> Result<String> {
  let mut doc = Html::parse_fragment(body);
  if !doc.errors.is_empty() {
    return Err(Error::Parse(doc.errors.join("; ")));
  }

  let paragraph = Selector::parse("p").expect("static selector");
  let paragraphs: Vec<_> =
    doc.select(&paragraph).map(|el| el.id()).collect();

  if paragraphs.len() >= MIN_PARAGRAPHS {
    let target = paragraphs[AD_PARAGRAPH_INDEX];
    let ad = Html::parse_fragment(ad_markup);

    // Graft the ad's top-level nodes in front of the target paragraph,
    // then deep-copy each subtree below them. The two trees are separate
    // allocations, so nodes are cloned rather than moved.
    let mut pending = Vec::new();
    for child in ad.root_element().children() {
      let grafted = doc
        .tree
        .get_mut(target)
        .expect("paragraph id belongs to this tree")
        .insert_before(child.value().clone())
        .id();
      pending.push((grafted, child));
    }
    while let Some((dst, src)) = pending.pop() {
      for child in src.children() {
        let copied = doc
          .tree
          .get_mut(dst)
          .expect("grafted id belongs to this tree")
          .append(child.value().clone())
          .id();
        pending.push((copied, child));
      }
    }

    // The anchor attribute is minted by the parser itself, so its name and
    // value carry exactly the representation the tree expects.
    let probe = Html::parse_fragment(&format!("<p id=\"{JUMP_ANCHOR}\"></p>"));
    if let Some(attrs) = probe
      .select(&paragraph)
      .next()
      .map(|el| el.value().attrs.clone())
    {
      if let Some(mut node) = doc.tree.get_mut(target) {
        if let Node::Element(el) = node.value() {
          el.attrs.extend(attrs);
        }
      }
    }
  }

  Ok(doc.root_element().inner_html())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
