//! # Category Module - Command Classification
//!
//! Sorts free-form command identifiers into a small, fixed set of semantic
//! categories.
//!
//! Every category owns an ordered list of rules. A command belongs to a category
//! if it equals one of the rules exactly, or if one of the rules, read as a regular
//! expression, matches somewhere inside the command. Categories are tried in
//! declaration order and the first hit wins; commands that match nothing are
//! [`Category::Others`].
//!
//! ```rust
//! use cmdstat::Category;
//!
//! assert_eq!(Category::classify("kill-emacs"), Category::Quit);
//! assert_eq!(Category::classify("org-kill-line"), Category::Editing);
//! assert_eq!(Category::classify("find-file"), Category::Others);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// A semantic grouping of commands
///
/// The declaration order is the order in which rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    /// Commands that end an editor session
    Quit,
    /// Commands that change buffer contents
    Editing,
    /// Commands that move point or scroll
    Navigate,
    /// Everything not covered by another category
    Others,
}

impl Category {
    /// The ordered match rules of this category
    pub const fn rules(self) -> &'static [&'static str] {
        match self {
            Self::Quit => &["save-buffers-kill-emacs", "kill-emacs"],
            Self::Editing => &[
                "self-insert-command",
                "org-self-insert-command",
                "delete-forward-char",
                "delete-backward-char",
                "newline",
                "kill-line",
                "c-electric-backspace",
                "yank",
            ],
            Self::Navigate => &[
                "next-line",
                "previous-line",
                "mwheel-scroll",
                "right-char",
                "left-char",
                "forward-paragraph",
                "backward-paragraph",
                "ivy-next-line",
                "mouse-drag-region",
                "mouse-set-point",
                "move-end-of-line",
            ],
            Self::Others => &[],
        }
    }

    /// Classify a command.
    ///
    /// Total and deterministic: every input maps to exactly one category.
    pub fn classify(command: &str) -> Self {
        Self::iter()
            .find(|category| category.matches(command))
            .unwrap_or(Self::Others)
    }

    /// Whether `command` is covered by this category's rules.
    ///
    /// Exact matches are checked before any pattern, so regex metacharacters in a
    /// command name can never prevent an exact hit.
    pub fn matches(self, command: &str) -> bool {
        self.rules().contains(&command)
            || PATTERNS[self as usize]
                .iter()
                .any(|pattern| pattern.is_match(command))
    }
}

/// Compiled rule patterns, indexed by category discriminant
static PATTERNS: LazyLock<Vec<Vec<Regex>>> = LazyLock::new(|| {
    Category::iter()
        .map(|category| {
            category
                .rules()
                .iter()
                // The rules are compile-time constants, covered by `test_rules_compile`
                .map(|rule| Regex::new(rule).expect("built-in rule is a valid pattern"))
                .collect()
        })
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rules_compile() {
        for category in Category::iter() {
            for rule in category.rules() {
                assert!(Regex::new(rule).is_ok(), "invalid rule {rule:?}");
            }
        }
        assert_eq!(PATTERNS.len(), Category::iter().count());
    }

    #[test]
    fn test_exact_matches() {
        assert_eq!(Category::classify("save-buffers-kill-emacs"), Category::Quit);
        assert_eq!(Category::classify("kill-emacs"), Category::Quit);
        assert_eq!(Category::classify("self-insert-command"), Category::Editing);
        assert_eq!(Category::classify("yank"), Category::Editing);
        assert_eq!(Category::classify("next-line"), Category::Navigate);
        assert_eq!(Category::classify("move-end-of-line"), Category::Navigate);
    }

    #[test]
    fn test_pattern_matches() {
        // Rules match anywhere inside the command
        assert_eq!(Category::classify("yank-pop"), Category::Editing);
        assert_eq!(Category::classify("newline-and-indent"), Category::Editing);
        assert_eq!(Category::classify("org-kill-line"), Category::Editing);
        assert_eq!(Category::classify("delete-forward-char-untabify"), Category::Editing);
        assert_eq!(Category::classify("dired-next-line"), Category::Navigate);
        assert_eq!(Category::classify("my-kill-emacs-now"), Category::Quit);
    }

    #[test]
    fn test_first_category_wins() {
        // Both a quit and an editing rule match inside this name
        assert_eq!(Category::classify("kill-emacs-yank"), Category::Quit);
        // Editing is declared before navigation
        assert_eq!(Category::classify("yank-next-line"), Category::Editing);
    }

    #[test]
    fn test_unmatched_is_others() {
        assert_eq!(Category::classify("find-file"), Category::Others);
        assert_eq!(Category::classify(""), Category::Others);
        assert_eq!(Category::classify("."), Category::Others);
        assert_eq!(Category::classify("Next-Line"), Category::Others);
    }

    #[test]
    fn test_others_has_no_rules() {
        assert!(Category::Others.rules().is_empty());
        assert!(!Category::Others.matches("anything"));
    }

    #[test]
    fn test_labels() {
        let labels: Vec<String> = Category::iter().map(|c| c.to_string()).collect();
        assert_eq!(labels, ["quit", "editing", "navigate", "others"]);

        let label: &'static str = Category::Navigate.into();
        assert_eq!(label, "navigate");
    }

    proptest! {
        #[test]
        fn classify_is_total_and_deterministic(command in ".*") {
            let first = Category::classify(&command);
            prop_assert_eq!(first, Category::classify(&command));

            // The result is the first category (in declaration order) whose rules match
            let expected = Category::iter()
                .find(|category| category.matches(&command))
                .unwrap_or(Category::Others);
            prop_assert_eq!(first, expected);
        }

        #[test]
        fn exact_rule_names_classify_to_their_category(
            category in prop::sample::select(vec![Category::Quit, Category::Editing, Category::Navigate]),
            index in any::<prop::sample::Index>(),
        ) {
            let rule = index.get(category.rules());
            let classified = Category::classify(rule);
            // An earlier category may claim it through a pattern, but never a later one
            prop_assert!(classified as usize <= category as usize);
        }
    }
}
