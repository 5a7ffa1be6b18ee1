// src/transform/mod.rs
// Deterministic rewrite pipeline for the spelling persona. Total: rules
// that match nothing are no-ops, and the pass never fails.

pub mod rules;

pub use rules::{MISSPELLING_RULES, Rule};

use tracing::debug;

/// Rewrites a finished response according to the misspelling table.
pub fn misspell(text: &str) -> String {
    let rewritten = apply_rules(text, MISSPELLING_RULES);
    if rewritten != text {
        debug!(
            original_chars = text.chars().count(),
            rewritten_chars = rewritten.chars().count(),
            "applied misspelling rewrite"
        );
    }
    rewritten
}

/// Interprets an ordered rule list over `text`. Each rule operates on the
/// output of the previous one.
pub fn apply_rules(text: &str, rules: &[Rule]) -> String {
    let mut out = text.to_string();
    for (index, rule) in rules.iter().enumerate() {
        out = match rule {
            Rule::OneWay(from, to) => out.replace(from, to),
            Rule::Swap(a, b) => {
                // Exchange a and b atomically: route a through a placeholder
                // so the b -> a replacement cannot re-match rewritten text.
                let placeholder = swap_placeholder(index);
                out.replace(a, &placeholder)
                    .replace(b, a)
                    .replace(&placeholder, b)
            }
        };
    }
    out
}

/// Placeholder for one swap rule: a private-use code point offset by the
/// rule's position in the table. Never a Hangul character, and distinct for
/// every rule, so concurrent swaps cannot contaminate each other.
fn swap_placeholder(index: usize) -> String {
    let code = 0xE000 + index as u32;
    char::from_u32(code)
        .unwrap_or('\u{E000}')
        .to_string()
}
