//! Layout engine implementation

mod body;
mod breadcrumbs;
mod head;
mod page;
mod variables;

use crate::config::consts::limits;
use crate::filter::ContentFilter;
use crate::layout::error::LayoutError;
use crate::source::TemplateSource;

use page::PageDocument;

/// Composes templates through layout inheritance.
///
/// The engine owns a [`TemplateSource`] it fetches raw text from and an
/// optional [`ContentFilter`] applied to the composed result. Each
/// [`render`] call parses fresh documents and shares no state with other
/// calls, so one engine may serve concurrent callers as long as its
/// source supports concurrent reads.
///
/// [`render`]: LayoutEngine::render
pub struct LayoutEngine {
    source: Box<dyn TemplateSource>,
    filter: Option<Box<dyn ContentFilter>>,
    max_depth: usize,
}

impl LayoutEngine {
    pub fn new(source: Box<dyn TemplateSource>) -> Self {
        Self {
            source,
            filter: None,
            max_depth: limits::DEFAULT_MAX_DEPTH,
        }
    }

    /// Apply `filter` to composed output.
    pub fn with_filter(mut self, filter: Box<dyn ContentFilter>) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Cap the parent-chain length at `max_depth` levels.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Compose `template_name` into one document.
    ///
    /// The requested document is parsed; while it declares a parent
    /// layout, the parent is fetched and parsed and the child folded into
    /// it, the merged result standing in for the fetched document. A
    /// cyclic or over-deep chain fails rather than recursing forever.
    pub fn render(&self, template_name: &str) -> Result<String, LayoutError> {
        tracing::debug!("composing template '{}'", template_name);
        let mut doc = self.fetch(template_name)?;
        let mut chain = vec![template_name.to_string()];

        while let Some(parent_name) = doc.parent_layout().map(str::to_string) {
            if chain.iter().any(|seen| *seen == parent_name) {
                chain.push(parent_name);
                return Err(LayoutError::InheritanceCycle {
                    template: template_name.to_string(),
                    chain,
                });
            }
            if chain.len() >= self.max_depth {
                return Err(LayoutError::DepthExceeded {
                    template: template_name.to_string(),
                    max: self.max_depth,
                });
            }

            tracing::debug!(
                "folding '{}' into parent layout '{}'",
                doc.template_name(),
                parent_name
            );
            let mut parent = self.fetch(&parent_name)?;
            parent.merge_child(doc);
            doc = parent;
            chain.push(parent_name);
        }

        let page = doc.render_content();
        Ok(match &self.filter {
            Some(filter) => filter.filter(page),
            None => page,
        })
    }

    /// Parse each level of `template_name`'s inheritance chain without
    /// composing, returning the chain leaf first. Applies the same cycle
    /// and depth guards as [`render`].
    ///
    /// [`render`]: LayoutEngine::render
    pub fn inheritance_chain(&self, template_name: &str) -> Result<Vec<String>, LayoutError> {
        let mut doc = self.fetch(template_name)?;
        let mut chain = vec![template_name.to_string()];

        while let Some(parent_name) = doc.parent_layout().map(str::to_string) {
            if chain.iter().any(|seen| *seen == parent_name) {
                chain.push(parent_name);
                return Err(LayoutError::InheritanceCycle {
                    template: template_name.to_string(),
                    chain,
                });
            }
            if chain.len() >= self.max_depth {
                return Err(LayoutError::DepthExceeded {
                    template: template_name.to_string(),
                    max: self.max_depth,
                });
            }
            doc = self.fetch(&parent_name)?;
            chain.push(parent_name);
        }
        Ok(chain)
    }

    fn fetch(&self, template_name: &str) -> Result<PageDocument, LayoutError> {
        let raw = self.source.source(template_name)?;
        PageDocument::parse(template_name, &raw)
    }
}

#[cfg(test)]
mod tests;
