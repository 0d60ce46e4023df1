//! Full-page assembly.
//!
//! Composes the final HTML document: a fixed skeleton with slots for the
//! page title, meta description, static header and footer chrome, the
//! breadcrumb trail, the converted content fragment, and a depth indicator
//! shown on every page except the landing page. The build date is injected
//! by the driver rather than read from the clock here, so assembly stays a
//! pure function — two calls with the same inputs produce the same bytes.

use chrono::NaiveDate;

use super::breadcrumbs::breadcrumbs;

/// Metadata for the page being assembled. Supplied by the driver, not
/// derived from content.
#[derive(Debug, Clone)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    /// Site-relative output path, e.g. "/projects/my-app.html"
    pub output_path: String,
}

const HEADER: &str = r#"<header class="site-header">
    <nav class="site-nav">
      <a href="/" class="logo">mordechai.dev</a>
      <div class="nav-links">
        <a href="/projects/">Projects</a>
        <a href="/thinking/">Thinking</a>
        <a href="/tech/">Tech</a>
        <a href="https://github.com/YOUR_GITHUB" target="_blank" rel="noopener">GitHub ↗</a>
        <a href="https://linkedin.com/in/YOUR_LINKEDIN" target="_blank" rel="noopener">LinkedIn ↗</a>
      </div>
    </nav>
  </header>"#;

const DEPTH_METER: &str = r#"<div class="depth-meter" aria-label="Content depth indicator">
    <span class="depth-label">Depth:</span>
    <span class="depth-dots" role="img" aria-label="Depth level indicator">
      <span class="dot">●</span>
      <span class="dot">○</span>
      <span class="dot">○</span>
      <span class="dot">○</span>
    </span>
  </div>"#;

/// Render the footer chrome with the injected build date.
fn footer(build_date: NaiveDate) -> String {
    format!(
        r#"<footer class="site-footer">
    <div class="footer-links">
      <a href="https://github.com/YOUR_GITHUB" target="_blank" rel="noopener">GitHub</a>
      <a href="https://linkedin.com/in/YOUR_LINKEDIN" target="_blank" rel="noopener">LinkedIn</a>
      <a href="mailto:YOUR_EMAIL">Email</a>
    </div>
    <div class="footer-meta">
      <a href="/about/full-story.html">Complete Story</a> |
      Last updated: {date}
    </div>
  </footer>"#,
        date = build_date.format("%Y-%m-%d")
    )
}

/// Assemble a complete HTML document around a converted content fragment.
///
/// An empty description falls back to the title. The breadcrumb trail and
/// the depth indicator are both omitted on the landing page and present
/// everywhere else.
pub fn assemble_page(fragment: &str, meta: &PageMetadata, build_date: NaiveDate) -> String {
    let description = if meta.description.is_empty() {
        &meta.title
    } else {
        &meta.description
    };

    let depth_meter = if meta.output_path == "/index.html" {
        ""
    } else {
        DEPTH_METER
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title} | Mordechai</title>
  <meta name="description" content="{description}">
  <link rel="stylesheet" href="/styles.css">
</head>
<body>
  <a href="#main-content" class="skip-link">Skip to main content</a>

  {header}

  {breadcrumbs}

  <main class="container" id="main-content">
    {content}
  </main>

  {footer}

  {depth_meter}

  <script src="/script.js"></script>
</body>
</html>
"##,
        title = meta.title,
        description = description,
        header = HEADER,
        breadcrumbs = breadcrumbs(&meta.output_path),
        content = fragment,
        footer = footer(build_date),
        depth_meter = depth_meter,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 5).unwrap()
    }

    fn meta(title: &str, description: &str, output_path: &str) -> PageMetadata {
        PageMetadata {
            title: title.to_string(),
            description: description.to_string(),
            output_path: output_path.to_string(),
        }
    }

    #[test]
    fn test_title_and_description_slots() {
        let page = assemble_page(
            "<p>hi</p>",
            &meta("My App", "A little tool", "/projects/my-app.html"),
            date(),
        );
        assert!(page.contains("<title>My App | Mordechai</title>"));
        assert!(page.contains("<meta name=\"description\" content=\"A little tool\">"));
        assert!(page.contains("<main class=\"container\" id=\"main-content\">\n    <p>hi</p>\n  </main>"));
    }

    #[test]
    fn test_empty_description_falls_back_to_title() {
        let page = assemble_page("<p>x</p>", &meta("Stack", "", "/tech/index.html"), date());
        assert!(page.contains("<meta name=\"description\" content=\"Stack\">"));
    }

    #[test]
    fn test_footer_carries_build_date() {
        let page = assemble_page("<p>x</p>", &meta("T", "", "/about.html"), date());
        assert!(page.contains("Last updated: 2025-10-05"));
    }

    #[test]
    fn test_depth_meter_omitted_on_landing_page() {
        let page = assemble_page("<p>x</p>", &meta("Home", "", "/index.html"), date());
        assert!(!page.contains("depth-meter"));
        assert!(!page.contains("breadcrumbs"));
    }

    #[test]
    fn test_depth_meter_present_elsewhere() {
        let page = assemble_page("<p>x</p>", &meta("T", "", "/projects/my-app.html"), date());
        assert!(page.contains("class=\"depth-meter\""));
        assert!(page.contains("class=\"breadcrumbs\""));
    }

    #[test]
    fn test_fixed_skeleton() {
        let page = assemble_page("<p>x</p>", &meta("T", "", "/about.html"), date());
        assert!(page.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(page.contains("<a href=\"#main-content\" class=\"skip-link\">Skip to main content</a>"));
        assert!(page.contains("<link rel=\"stylesheet\" href=\"/styles.css\">"));
        assert!(page.contains("<script src=\"/script.js\"></script>"));
        assert!(page.ends_with("</html>\n"));
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let m = meta("T", "d", "/projects/a.html");
        assert_eq!(
            assemble_page("<p>x</p>", &m, date()),
            assemble_page("<p>x</p>", &m, date())
        );
    }
}
