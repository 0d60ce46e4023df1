//! Breadcrumb trail generation.
//!
//! Derived purely from the site-relative output path. The landing page
//! gets no trail at all; every other page gets Home, a link per ancestor
//! directory, and a non-linked span for the page itself.

use crate::util::{capitalize, title_case};

/// Build the breadcrumb nav fragment for an output path like
/// `/projects/my-app.html`.
///
/// Returns the empty string for the landing page (`/` or `/index.html`).
pub fn breadcrumbs(output_path: &str) -> String {
    let trimmed = output_path.trim_matches('/');
    if trimmed.is_empty() || trimmed == "index.html" {
        return String::new();
    }

    let parts: Vec<&str> = trimmed.split('/').collect();

    let mut html = String::from("<nav class=\"breadcrumbs\" aria-label=\"Breadcrumb\">\n");
    html.push_str("  <a href=\"/\">Home</a> >\n");

    // All but the last segment become links with cumulative hrefs
    let mut current_path = String::new();
    for part in &parts[..parts.len() - 1] {
        current_path.push('/');
        current_path.push_str(part);
        html.push_str(&format!(
            "  <a href=\"{current_path}/\">{}</a> >\n",
            capitalize(part)
        ));
    }

    // The current page is a plain span, no link
    let last = parts[parts.len() - 1].trim_end_matches(".html");
    html.push_str(&format!(
        "  <span aria-current=\"page\">{}</span>\n",
        title_case(last)
    ));
    html.push_str("</nav>");

    html
}
