//! Breadcrumb extraction and trail rendering
//!
//! Breadcrumbs are declared as self-closing meta tags in head content:
//! `<meta name="bread0" content="Home" href="/"/>`. The key's numeric
//! suffix gives the trail position; the `$breadcrumb` token in the
//! composed page is replaced by the rendered trail.

use crate::config::consts::{crumbs, tags};
use crate::layout::error::LayoutError;

/// One breadcrumb-trail entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Crumb {
    /// Stable key, expected form `bread{index}`
    pub name: String,
    /// Display text
    pub description: String,
    /// Link target
    pub href: String,
}

impl Crumb {
    fn render(&self, with_link: bool) -> String {
        if with_link {
            format!("<a href=\"{}\">{}</a>", self.href, self.description)
        } else {
            format!("<span class=\"last\">{}</span>", self.description)
        }
    }
}

/// Extract all breadcrumb meta tags from `content`.
///
/// Returns the content with every matched span removed. A key already
/// present in `out` is left untouched (first occurrence wins).
pub(crate) fn read_all(
    template: &str,
    mut content: String,
    out: &mut Vec<Crumb>,
) -> Result<String, LayoutError> {
    while let Some(start) = content.find(tags::META_BREAD) {
        // the terminator must close the tag on its own line
        let line_end = content[start..]
            .find('\n')
            .map_or(content.len(), |p| p + start);
        let end = content[start..line_end]
            .find("/>")
            .map(|p| p + start)
            .ok_or_else(|| LayoutError::MalformedTemplate {
                template: template.to_string(),
                pos: start,
                message: "'/>' not found for breadcrumb meta tag".to_string(),
            })?;

        let span = &content[start..end];
        let name = attribute(template, span, start, "name")?;
        let description = attribute(template, span, start, "content")?;
        let href = attribute(template, span, start, "href")?;

        if !out.iter().any(|c| c.name == name) {
            out.push(Crumb {
                name,
                description,
                href,
            });
        }
        content.replace_range(start..end + 2, "");
    }
    Ok(content)
}

/// Render the trail: entries in ascending key-index order, all but the
/// last linked, joined by the fixed separator. Index gaps are skipped.
pub(crate) fn render_trail(entries: &[Crumb]) -> String {
    let mut indexed: Vec<(usize, &Crumb)> = entries
        .iter()
        .filter_map(|c| {
            let index: usize = c.name.strip_prefix(crumbs::KEY_PREFIX)?.parse().ok()?;
            Some((index, c))
        })
        .collect();
    indexed.sort_by_key(|(index, _)| *index);

    let mut trail = String::new();
    for (i, (_, crumb)) in indexed.iter().enumerate() {
        if i > 0 {
            trail.push_str(crumbs::SEPARATOR);
        }
        trail.push_str(&crumb.render(i < indexed.len() - 1));
    }
    trail
}

/// The quoted value following `attr="` within a breadcrumb span.
fn attribute(
    template: &str,
    span: &str,
    span_pos: usize,
    attr: &str,
) -> Result<String, LayoutError> {
    let marker = format!("{}=\"", attr);
    let missing = || LayoutError::MalformedTemplate {
        template: template.to_string(),
        pos: span_pos,
        message: format!("no '{}=' attribute in breadcrumb meta tag", attr),
    };
    let start = span.find(&marker).ok_or_else(|| missing())? + marker.len();
    let end = span[start..]
        .find('"')
        .map(|p| p + start)
        .ok_or_else(|| missing())?;
    Ok(span[start..end].to_string())
}
