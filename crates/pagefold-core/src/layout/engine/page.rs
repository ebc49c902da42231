//! One parsed template document

use crate::config::consts::tokens;
use crate::layout::engine::body::BodySection;
use crate::layout::engine::head::HeadSection;
use crate::layout::replace::replace;
use crate::layout::error::LayoutError;

/// A single template document: original text plus its parsed head and
/// body sections. Immutable after parsing except for [`merge_child`],
/// which folds a more specific document into this one.
///
/// [`merge_child`]: PageDocument::merge_child
#[derive(Debug, Clone)]
pub(crate) struct PageDocument {
    template_name: String,
    original: String,
    head: Option<HeadSection>,
    body: BodySection,
}

impl PageDocument {
    pub(crate) fn parse(template_name: &str, original: &str) -> Result<PageDocument, LayoutError> {
        let parsed_head = HeadSection::parse(template_name, original)?;
        let body_from = parsed_head.as_ref().map_or(0, |(_, head_end)| *head_end);
        let body = BodySection::parse(template_name, original, body_from)?;

        Ok(PageDocument {
            template_name: template_name.to_string(),
            original: original.to_string(),
            head: parsed_head.map(|(section, _)| section),
            body,
        })
    }

    pub(crate) fn template_name(&self) -> &str {
        &self.template_name
    }

    /// Name of the declared parent layout, if this document inherits one.
    pub(crate) fn parent_layout(&self) -> Option<&str> {
        self.head.as_ref().and_then(|head| head.parent_layout())
    }

    /// Fold `child` into this document. A child head only merges when this
    /// document has a head of its own to receive it.
    pub(crate) fn merge_child(&mut self, child: PageDocument) {
        if let (Some(head), Some(child_head)) = (self.head.as_mut(), child.head) {
            head.merge_with(child_head);
        }
        self.body.merge_with(child.body);
    }

    /// Emit the composed page and resolve its substitution tokens.
    pub(crate) fn render_content(&self) -> String {
        let page = self.base_render();
        match &self.head {
            Some(head) => head.replace_breadcrumbs(head.replace_variables(page)),
            None => replace(&page, tokens::BREADCRUMB, ""),
        }
    }

    fn base_render(&self) -> String {
        let mut out = String::with_capacity(self.original.len() + 512);
        if let Some(head) = &self.head {
            out.push_str(self.original[..head.start()].trim());
            head.render(&mut out);
        }
        self.body.render(&mut out);
        out
    }
}
