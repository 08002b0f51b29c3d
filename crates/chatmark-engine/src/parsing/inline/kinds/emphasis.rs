use std::sync::OnceLock;

use regex::Regex;

/// A delimiter-pair substitution: `{delimiter}x{delimiter}` becomes `{open}x{close}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emphasis {
    pub delimiter: &'static str,
    pub open: &'static str,
    pub close: &'static str,
}

/// Emphasis passes in application order. Order is significant: `***` must run
/// before `**`, and `**` before `*`.
pub const EMPHASIS_PASSES: [Emphasis; 6] = [
    Emphasis {
        delimiter: "***",
        open: "<strong><em>",
        close: "</em></strong>",
    },
    Emphasis {
        delimiter: "__",
        open: "<strong>",
        close: "</strong>",
    },
    Emphasis {
        delimiter: "**",
        open: "<strong>",
        close: "</strong>",
    },
    Emphasis {
        delimiter: "*",
        open: "<em>",
        close: "</em>",
    },
    Emphasis {
        delimiter: "_",
        open: "<em>",
        close: "</em>",
    },
    Emphasis {
        delimiter: "~~",
        open: "<s>",
        close: "</s>",
    },
];

impl Emphasis {
    /// Compiled patterns for [`EMPHASIS_PASSES`], index-aligned.
    pub fn pass_regexes() -> &'static [Regex] {
        static PASS_REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();
        PASS_REGEXES.get_or_init(|| {
            EMPHASIS_PASSES
                .iter()
                .map(|pass| {
                    let d = regex::escape(pass.delimiter);
                    Regex::new(&format!("{d}(.+?){d}")).expect("Invalid emphasis regex")
                })
                .collect()
        })
    }

    /// Applies this pass to `text`, matching non-greedily.
    pub fn apply(&self, re: &Regex, text: &str) -> String {
        re.replace_all(text, |caps: &regex::Captures<'_>| {
            format!("{}{}{}", self.open, &caps[1], self.close)
        })
        .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_regex_per_pass() {
        assert_eq!(Emphasis::pass_regexes().len(), EMPHASIS_PASSES.len());
    }

    #[test]
    fn strike_pass() {
        let pass = EMPHASIS_PASSES[5];
        let out = pass.apply(&Emphasis::pass_regexes()[5], "~~old~~ new");
        assert_eq!(out, "<s>old</s> new");
    }

    #[test]
    fn matches_are_non_greedy() {
        let pass = EMPHASIS_PASSES[2];
        let out = pass.apply(&Emphasis::pass_regexes()[2], "**a** and **b**");
        assert_eq!(out, "<strong>a</strong> and <strong>b</strong>");
    }

    #[test]
    fn lone_delimiter_is_left_alone() {
        let pass = EMPHASIS_PASSES[3];
        assert_eq!(pass.apply(&Emphasis::pass_regexes()[3], "2 * 3"), "2 * 3");
    }
}
