//! Tech-tag extraction and rendering.
//!
//! Tags live in a dedicated "## Tech Stack Tags" section of the *source*
//! text (not the converted fragment): every inline-code token between that
//! heading and the next level-2 heading, in order of appearance. Duplicates
//! are kept as written; the section being absent just means no tags.

use std::sync::LazyLock;

use regex::Regex;

const TAGS_HEADING: &str = "## Tech Stack Tags";

static RE_CODE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Extract the ordered tag list from source text.
pub fn extract_tags(source: &str) -> Vec<String> {
    let Some(start) = source.find(TAGS_HEADING) else {
        return Vec::new();
    };

    // Capture everything up to the next level-2 heading, or end of input
    let rest = &source[start + TAGS_HEADING.len()..];
    let section = match rest.find("\n##") {
        Some(end) => &rest[..end],
        None => rest,
    };

    RE_CODE_TOKEN
        .captures_iter(section)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Render a tag list as a block of anchor links into the tech page.
///
/// Each tag links to `/tech/#{tag}` with the raw tag text as both label and
/// fragment; no escaping is applied. An empty list renders as an empty
/// string, the container is omitted entirely.
pub fn render_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let mut html = String::from("<div class=\"tech-tags\">\n");
    for tag in tags {
        html.push_str(&format!("  <a href=\"/tech/#{tag}\" class=\"tag\">{tag}</a>\n"));
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_tags_in_order() {
        let source = "## Tech Stack Tags\n`go` `rust`\n## Next";
        assert_eq!(extract_tags(source), vec!["go", "rust"]);
    }

    #[test]
    fn test_extract_stops_at_next_section() {
        let source = "# Page\n\n## Tech Stack Tags\n\n`python` and `sql`\n\n## Notes\n\n`not-a-tag`";
        assert_eq!(extract_tags(source), vec!["python", "sql"]);
    }

    #[test]
    fn test_extract_runs_to_end_of_document() {
        let source = "intro\n\n## Tech Stack Tags\n`docker` `nginx`";
        assert_eq!(extract_tags(source), vec!["docker", "nginx"]);
    }

    #[test]
    fn test_missing_section_yields_no_tags() {
        assert!(extract_tags("# Just a page\n\nno tags here").is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let source = "## Tech Stack Tags\n`go` `go` `rust`";
        assert_eq!(extract_tags(source), vec!["go", "go", "rust"]);
    }

    #[test]
    fn test_render_tags() {
        let tags = vec!["go".to_string(), "rust".to_string()];
        assert_eq!(
            render_tags(&tags),
            "<div class=\"tech-tags\">\n\
             \x20 <a href=\"/tech/#go\" class=\"tag\">go</a>\n\
             \x20 <a href=\"/tech/#rust\" class=\"tag\">rust</a>\n\
             </div>"
        );
    }

    #[test]
    fn test_render_empty_tag_list_is_empty_string() {
        assert_eq!(render_tags(&[]), "");
    }
}
