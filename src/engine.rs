use std::borrow::Cow;
use tracing::debug;

use crate::rules::RuleSet;

/// Result of running a [`RuleSet`] over one block of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    /// Number of distinct rules whose substitution changed the text at the
    /// point they were applied. Not a match count: a rule that replaces
    /// five occurrences in one pass fires once.
    pub rules_fired: usize,
}

impl Rewrite {
    pub fn changed(&self) -> bool {
        self.rules_fired > 0
    }
}

/// Apply every rule in order against the current text.
///
/// Each rule performs a global, left-to-right, non-overlapping
/// substitution over the output of the rules before it, so a later rule
/// may legitimately match text an earlier rule introduced (cascading), or
/// never match because an earlier rule consumed its target. An empty
/// RuleSet is a no-op.
///
/// Idempotence over already-rewritten text is an obligation on the
/// RuleSet author (replacement text must be disjoint from every pattern's
/// matching universe); the engine does not check it.
pub fn apply(text: &str, rules: &RuleSet) -> Rewrite {
    let mut current = Cow::Borrowed(text);
    let mut rules_fired = 0;

    for (index, rule) in rules.iter().enumerate() {
        match rule.apply(&current) {
            Cow::Borrowed(_) => {}
            Cow::Owned(next) => {
                // replace_all returns Owned whenever a match occurred, even
                // if the replacement reproduced the matched text verbatim.
                // Only a real difference counts as a firing.
                if next != current.as_ref() {
                    debug!(rule = index, "rule fired");
                    rules_fired += 1;
                    current = Cow::Owned(next);
                }
            }
        }
    }

    Rewrite {
        text: current.into_owned(),
        rules_fired,
    }
}
