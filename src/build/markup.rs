//! Markup-to-HTML conversion.
//!
//! The converter is a fixed sequence of rewrite stages over an immutable
//! string, not a tokenizing parser. Order matters: comments are stripped
//! first, then fenced code is pulled out into placeholders so no later
//! stage can reinterpret characters inside a code body. Unrecognized or
//! unmatched markup passes through as literal text; the function is total.
//!
//! Code bodies are emitted verbatim, without HTML-escaping `<` or `>`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static RE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w+)?\n(.*?)```").unwrap());
static RE_H4: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#### (.*)$").unwrap());
static RE_H3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.*)$").unwrap());
static RE_H2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());
static RE_H1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());
static RE_BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static RE_ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static RE_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());
static RE_INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
static RE_LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^- (.*)$").unwrap());

/// Convert marked-up source text to an HTML fragment.
///
/// Recognized constructs: `#`..`####` headings, `**bold**`, `*italic*`,
/// `[label](url)` links, `` `inline code` ``, fenced code blocks with an
/// optional language tag, `- ` list items, and blank-line-delimited
/// paragraphs. `<!-- -->` comment spans are removed entirely.
pub fn convert(source: &str) -> String {
    // Annotation comments go first, before any other rule can see them
    let text = RE_COMMENT.replace_all(source, "");

    // Pull fenced code blocks out into placeholders so heading, emphasis
    // and list rules never run over their contents. Placeholders start
    // with '<' so the paragraph stage leaves them unwrapped.
    let mut code_blocks: Vec<String> = Vec::new();
    let text = RE_FENCE.replace_all(&text, |caps: &Captures| {
        let lang = caps.get(1).map_or("", |m| m.as_str());
        let body = &caps[2];
        code_blocks.push(format!(
            "<pre><code class=\"language-{lang}\">{body}</code></pre>"
        ));
        format!("<!code:{}>", code_blocks.len() - 1)
    });

    // Headings, longest prefix first so "#### x" is not caught by "# "
    let text = RE_H4.replace_all(&text, "<h4>$1</h4>");
    let text = RE_H3.replace_all(&text, "<h3>$1</h3>");
    let text = RE_H2.replace_all(&text, "<h2>$1</h2>");
    let text = RE_H1.replace_all(&text, "<h1>$1</h1>");

    // Bold before italic so "**x**" is not half-consumed by the single-star rule
    let text = RE_BOLD.replace_all(&text, "<strong>$1</strong>");
    let text = RE_ITALIC.replace_all(&text, "<em>$1</em>");

    let text = RE_LINK.replace_all(&text, "<a href=\"$2\">$1</a>");
    let text = RE_INLINE_CODE.replace_all(&text, "<code>$1</code>");

    let text = RE_LIST_ITEM.replace_all(&text, "<li>$1</li>");
    let text = wrap_list_runs(&text);

    let text = wrap_paragraphs(&text);

    restore_code_blocks(text, &code_blocks)
}

/// Wrap each run of consecutive `<li>` lines in a single `<ul>`.
///
/// Runs merge: three adjacent items produce one list, not three.
fn wrap_list_runs(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut run: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.starts_with("<li>") {
            run.push(line);
        } else {
            if !run.is_empty() {
                out.push(format!("<ul>{}</ul>", run.join("\n")));
                run.clear();
            }
            out.push(line.to_string());
        }
    }
    if !run.is_empty() {
        out.push(format!("<ul>{}</ul>", run.join("\n")));
    }

    out.join("\n")
}

/// Split on blank lines and wrap prose blocks in `<p>`.
///
/// A block starting with `<` was already produced by an earlier stage and
/// is left alone. Empty blocks are dropped.
fn wrap_paragraphs(text: &str) -> String {
    text.split("\n\n")
        .filter_map(|block| {
            let block = block.trim();
            if block.is_empty() {
                None
            } else if block.starts_with('<') {
                Some(block.to_string())
            } else {
                Some(format!("<p>{block}</p>"))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Substitute extracted code blocks back in place of their placeholders.
fn restore_code_blocks(text: String, code_blocks: &[String]) -> String {
    let mut text = text;
    for (i, block) in code_blocks.iter().enumerate() {
        text = text.replace(&format!("<!code:{i}>"), block);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_prose_becomes_paragraph() {
        assert_eq!(convert("just some text"), "<p>just some text</p>");
    }

    #[test]
    fn test_headings_longest_prefix_first() {
        assert_eq!(convert("# Title"), "<h1>Title</h1>");
        assert_eq!(convert("## Title"), "<h2>Title</h2>");
        assert_eq!(convert("### Title"), "<h3>Title</h3>");
        assert_eq!(convert("#### Title"), "<h4>Title</h4>");
    }

    #[test]
    fn test_bold_before_italic() {
        assert_eq!(
            convert("**bold** and *italic*"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn test_link() {
        assert_eq!(
            convert("see [the docs](/projects/)"),
            "<p>see <a href=\"/projects/\">the docs</a></p>"
        );
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(convert("run `cargo build`"), "<p>run <code>cargo build</code></p>");
    }

    #[test]
    fn test_code_block_with_language() {
        assert_eq!(
            convert("```python\ncode\n```"),
            "<pre><code class=\"language-python\">code\n</code></pre>"
        );
    }

    #[test]
    fn test_code_block_without_language() {
        assert_eq!(
            convert("```\ncode\n```"),
            "<pre><code class=\"language-\">code\n</code></pre>"
        );
    }

    #[test]
    fn test_code_block_contents_not_reinterpreted() {
        let out = convert("```rust\n# not a heading\n*not italic*\n- not a list\n```");
        assert_eq!(
            out,
            "<pre><code class=\"language-rust\"># not a heading\n*not italic*\n- not a list\n</code></pre>"
        );
    }

    #[test]
    fn test_list_runs_merge_into_one_ul() {
        let out = convert("- a\n- b\n- c");
        assert_eq!(out, "<ul><li>a</li>\n<li>b</li>\n<li>c</li></ul>");
        assert_eq!(out.matches("<ul>").count(), 1);
    }

    #[test]
    fn test_separate_list_runs_get_separate_uls() {
        let out = convert("- a\n\nbetween\n\n- b");
        assert_eq!(out.matches("<ul>").count(), 2);
        assert!(out.contains("<p>between</p>"));
    }

    #[test]
    fn test_multiline_comment_stripped() {
        assert_eq!(
            convert("before <!-- note\nspanning\nlines --> after"),
            "<p>before  after</p>"
        );
    }

    #[test]
    fn test_comment_only_document() {
        assert_eq!(convert("<!--\nall of this\nis annotation\n-->"), "");
    }

    #[test]
    fn test_unmatched_markup_passes_through() {
        assert_eq!(convert("*unclosed"), "<p>*unclosed</p>");
        assert_eq!(convert("[label](incomplete"), "<p>[label](incomplete</p>");
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        assert_eq!(convert("one\n\ntwo"), "<p>one</p>\n<p>two</p>");
    }

    #[test]
    fn test_mixed_document() {
        let out = convert("# Intro\n\nSome **prose** here.\n\n- first\n- second\n\ndone");
        assert_eq!(
            out,
            "<h1>Intro</h1>\n<p>Some <strong>prose</strong> here.</p>\n\
             <ul><li>first</li>\n<li>second</li></ul>\n<p>done</p>"
        );
    }
}
