//! Expandable-section post-pass.
//!
//! Runs over the already-converted HTML fragment and rewrites `<h2>`/`<h3>`
//! headings whose text starts with "Expand:" into collapsible-section
//! openers. Only the opener is emitted; no matching `</details>` is ever
//! produced, so the resulting markup is deliberately unbalanced. Downstream
//! styling relies on the open-ended nesting, so closing the container here
//! would change rendered layout (see DESIGN.md).

use std::sync::LazyLock;

use regex::{Captures, Regex};

static RE_EXPAND_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<h[23]>Expand:\s*(.*?)</h[23]>").unwrap());

/// Rewrite "Expand:" headings into `<details>` openers.
pub fn expand_sections(html: &str) -> String {
    RE_EXPAND_HEADING
        .replace_all(html, |caps: &Captures| {
            let title = caps[1].trim().to_string();
            format!(
                "<details class=\"expandable\"><summary>{title}</summary><div class=\"expandable-content\">"
            )
        })
        .into_owned()
}
