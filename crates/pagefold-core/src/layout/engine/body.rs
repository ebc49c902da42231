//! Body section parsing, merging, and rendering

use crate::config::consts::tags;
use crate::layout::replace::replace;
use crate::layout::error::LayoutError;

/// Parsed `<body>` section of one document.
///
/// A document without a `<body>` tag is a bodyless snippet: its entire
/// text becomes the inner content and renders without body tags.
#[derive(Debug, Clone)]
pub(crate) struct BodySection {
    with_body: bool,
    /// Raw attribute text between `<body` and `>`
    tag_attributes: Option<String>,
    inner: String,
}

impl BodySection {
    /// Parse the body section, scanning for `<body` from `search_from`
    /// (just past `</head>`, or the document start when there is no head).
    /// The closing `</body>` is matched as the last occurrence in the
    /// whole document, so body content containing markup that merely looks
    /// like a closing tag does not end the section early.
    pub(crate) fn parse(
        template: &str,
        original: &str,
        search_from: usize,
    ) -> Result<BodySection, LayoutError> {
        let Some(tag_start) = original[search_from..]
            .find(tags::BODY)
            .map(|p| p + search_from)
        else {
            return Ok(BodySection {
                with_body: false,
                tag_attributes: None,
                inner: original.to_string(),
            });
        };

        let attrs_from = tag_start + tags::BODY.len();
        let tag_end = original[attrs_from..]
            .find('>')
            .map(|p| p + attrs_from)
            .ok_or_else(|| LayoutError::MalformedTemplate {
                template: template.to_string(),
                pos: attrs_from,
                message: format!("'>' character not found after '{}'", tags::BODY),
            })?;
        let body_end = original
            .rfind(tags::BODY_END)
            .filter(|&end| end > tag_end)
            .ok_or_else(|| LayoutError::MalformedTemplate {
                template: template.to_string(),
                pos: tag_end,
                message: format!("'{}' tag not found", tags::BODY_END),
            })?;

        Ok(BodySection {
            with_body: true,
            tag_attributes: Some(original[attrs_from..tag_end].to_string()),
            inner: original[tag_end + 1..body_end].to_string(),
        })
    }

    /// Fold a child's body into this one: the layout-body placeholder is
    /// replaced by the child's inner content, and non-empty child body-tag
    /// attributes take over.
    pub(crate) fn merge_with(&mut self, child: BodySection) {
        if child
            .tag_attributes
            .as_deref()
            .is_some_and(|attrs| !attrs.trim().is_empty())
        {
            self.tag_attributes = child.tag_attributes;
        }
        self.inner = replace(&self.inner, tags::LAYOUT_BODY_PLACEHOLDER, &child.inner);
    }

    pub(crate) fn render(&self, out: &mut String) {
        if self.with_body {
            out.push_str("<body");
            if let Some(attrs) = &self.tag_attributes {
                out.push_str(attrs);
            }
            out.push_str(">\n");
        }
        out.push_str(&self.inner);
        if self.with_body {
            out.push_str("\n</body>\n</html>\n");
        }
    }

    #[cfg(test)]
    pub(crate) fn inner(&self) -> &str {
        &self.inner
    }

    #[cfg(test)]
    pub(crate) fn tag_attributes(&self) -> Option<&str> {
        self.tag_attributes.as_deref()
    }
}
