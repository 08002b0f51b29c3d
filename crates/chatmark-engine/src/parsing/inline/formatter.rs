use regex::Captures;

use super::kinds::{CodeSpan, EMPHASIS_PASSES, Emphasis, Link};
use crate::escape::escape;

/// Applies the inline passes to one line of raw text.
///
/// Input is raw, unescaped text; output is markup in which every literal
/// character has been escaped exactly once.
#[derive(Debug, Clone)]
pub struct InlineFormatter {
    open_links_in_new_tab: bool,
}

impl Default for InlineFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl InlineFormatter {
    pub fn new(open_links_in_new_tab: bool) -> Self {
        Self {
            open_links_in_new_tab,
        }
    }

    pub fn format(&self, raw: &str) -> String {
        let (mut text, code_spans) = protect_code_spans(raw);

        for (pass, re) in EMPHASIS_PASSES.iter().zip(Emphasis::pass_regexes()) {
            text = pass.apply(re, &text);
        }

        let text = self.link_markdown(&text);
        let text = self.autolink(&text);

        restore_code_spans(&text, &code_spans)
    }

    fn link_markdown(&self, text: &str) -> String {
        Link::markdown_regex()
            .replace_all(text, |caps: &Captures<'_>| {
                Link::anchor(&caps[2], &caps[1], self.open_links_in_new_tab)
            })
            .into_owned()
    }

    /// Wraps bare URLs, skipping anchors emitted by `link_markdown`.
    fn autolink(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for anchor in Link::anchor_regex().find_iter(text) {
            out.push_str(&self.autolink_gap(&text[last..anchor.start()]));
            out.push_str(anchor.as_str());
            last = anchor.end();
        }
        out.push_str(&self.autolink_gap(&text[last..]));
        out
    }

    fn autolink_gap(&self, gap: &str) -> String {
        Link::bare_url_regex()
            .replace_all(gap, |caps: &Captures<'_>| {
                let url = &caps[2];
                format!(
                    "{}{}",
                    &caps[1],
                    Link::anchor(url, url, self.open_links_in_new_tab)
                )
            })
            .into_owned()
    }
}

/// Escapes `raw`, swapping each code span for a marker.
///
/// Returns the escaped text and the escaped span bodies in marker order.
fn protect_code_spans(raw: &str) -> (String, Vec<String>) {
    let mut text = String::with_capacity(raw.len());
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in CodeSpan::regex().captures_iter(raw) {
        let (Some(whole), Some(body)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        text.push_str(&escape(&raw[last..whole.start()]));
        text.push_str(&CodeSpan::marker(spans.len()));
        spans.push(escape(body.as_str()).into_owned());
        last = whole.end();
    }
    text.push_str(&escape(&raw[last..]));

    (text, spans)
}

fn restore_code_spans(text: &str, spans: &[String]) -> String {
    if spans.is_empty() {
        return text.to_string();
    }
    CodeSpan::marker_regex()
        .replace_all(text, |caps: &Captures<'_>| {
            match caps[1].parse::<usize>().ok().and_then(|i| spans.get(i)) {
                Some(body) => format!("<code>{body}</code>"),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
