//! # Run extraction
//!
//! Fenced code regions are lifted out of the input before any line is
//! classified. The result is an ordered sequence of typed runs, so code bodies
//! never reach the block parser or the inline formatter and nothing has to be
//! spliced back into the rendered markup afterwards.

use std::sync::OnceLock;

use regex::Regex;

use super::blocks::{CodeBlock, kinds::CodeFence};
use crate::escape::escape;

/// One segment of the input, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run<'a> {
    /// Text subject to block and inline parsing.
    Markdown(&'a str),
    /// An extracted fenced region, body already escaped.
    Code(CodeBlock),
}

fn fence_regex() -> &'static Regex {
    static FENCE_REGEX: OnceLock<Regex> = OnceLock::new();
    FENCE_REGEX.get_or_init(|| {
        let marker = regex::escape(CodeFence::MARKER);
        Regex::new(&format!(
            r"(?m)^{marker}[ \t]*([\w-]*)[ \t]*\n((?s:.*?)){marker}"
        ))
        .expect("Invalid fence regex")
    })
}

fn opener_regex() -> &'static Regex {
    static OPENER_REGEX: OnceLock<Regex> = OnceLock::new();
    OPENER_REGEX.get_or_init(|| {
        let marker = regex::escape(CodeFence::MARKER);
        Regex::new(&format!(r"(?m)^{marker}[ \t]*[\w-]*[ \t]*$")).expect("Invalid opener regex")
    })
}

/// Splits `text` into markdown and code runs.
///
/// A fence opens on a line holding only the marker and an optional language
/// tag, possibly space-separated, and closes at the next occurrence of the
/// marker. Regions are matched non-greedily, left to right. An opener without
/// a closer is left in place as ordinary text.
pub fn extract_runs(text: &str) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    let mut last = 0;

    for caps in fence_regex().captures_iter(text) {
        let (Some(whole), Some(lang), Some(body)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        push_markdown(&mut runs, &text[last..whole.start()]);
        runs.push(Run::Code(CodeBlock {
            language: Some(lang.as_str())
                .filter(|l| !l.is_empty())
                .map(str::to_string),
            body: escape(trim_blank_lines(body.as_str())).into_owned(),
        }));
        last = whole.end();
    }
    push_markdown(&mut runs, &text[last..]);

    runs
}

fn push_markdown<'a>(runs: &mut Vec<Run<'a>>, md: &'a str) {
    if md.is_empty() {
        return;
    }
    if opener_regex().is_match(md) {
        log::debug!("unterminated code fence left as text");
    }
    runs.push(Run::Markdown(md));
}

/// Drops blank lines before the first and after the last non-blank line.
fn trim_blank_lines(body: &str) -> &str {
    let mut start = 0;
    for line in body.split_inclusive('\n') {
        if !line.trim().is_empty() {
            break;
        }
        start += line.len();
    }
    body[start..].trim_end()
}
