//! Escaping and truncation utilities for embedding post text in markup.

/// Escape `input` for a JavaScript string-literal context inside a script
/// tag.
///
/// Covers backslashes, both quote kinds, CR/LF (CRLF collapses to one
/// escaped newline), the `</` sequence so content can never close the tag,
/// and the U+2028/U+2029 line separators, which are line terminators in
/// JavaScript source.
pub fn escape_js(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  let mut chars = input.chars().peekable();

  while let Some(c) = chars.next() {
    match c {
      '\\' => out.push_str("\\\\"),
      '\'' => out.push_str("\\'"),
      '"' => out.push_str("\\\""),
      '\n' => out.push_str("\\n"),
      '\r' => {
        if chars.peek() == Some(&'\n') {
          chars.next();
        }
        out.push_str("\\n");
      }
      '<' if chars.peek() == Some(&'/') => {
        chars.next();
        out.push_str("<\\/");
      }
      '\u{2028}' => out.push_str("\\u2028"),
      '\u{2029}' => out.push_str("\\u2029"),
      _ => out.push(c),
    }
  }

  out
}

/// Truncate `input` to at most `limit` whitespace-delimited words, appending
/// `ellipsis` only when something was cut. Input within the limit is
/// returned unchanged.
pub fn truncate_words(input: &str, limit: usize, ellipsis: &str) -> String {
  let words: Vec<&str> = input.split_whitespace().collect();
  if words.len() <= limit {
    return input.to_owned();
  }

  let mut out = words[..limit].join(" ");
  out.push_str(ellipsis);
  out
}

// ─── Tests ───────────────────────────────────────────────────────────────────
