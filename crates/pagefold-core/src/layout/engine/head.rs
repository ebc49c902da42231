//! Head section parsing, merging, and rendering

use crate::config::consts::{tags, tokens};
use crate::layout::engine::breadcrumbs::{self, Crumb};
use crate::layout::engine::variables;
use crate::layout::replace::{remove_chars, replace};
use crate::layout::error::LayoutError;

/// Parsed metadata of one document's `<head>` section.
///
/// Variable and breadcrumb definition blocks are cut out of the content
/// before the line pass; title, parent-layout, and insertion-marker lines
/// are consumed during it. Whatever survives is kept, in order, as the
/// remaining head lines.
#[derive(Debug, Clone)]
pub(crate) struct HeadSection {
    /// Byte offset of `<head>` in the original document
    head_start: usize,
    title: Option<String>,
    parent_layout: Option<String>,
    /// name → value, document order, first definition wins
    variables: Vec<(String, String)>,
    /// key order as defined, first definition wins
    crumbs: Vec<Crumb>,
    lines: Vec<String>,
    /// Line index where a child's head lines are spliced
    insert_at: Option<usize>,
}

impl HeadSection {
    /// Locate and parse the head section of `original`.
    ///
    /// Returns `None` when the document has no `<head>`; a `<head>`
    /// without `</head>` is malformed. On success the second element is
    /// the byte offset just past `</head>`, where body scanning starts.
    pub(crate) fn parse(
        template: &str,
        original: &str,
    ) -> Result<Option<(HeadSection, usize)>, LayoutError> {
        let Some(head_start) = original.find(tags::HEAD) else {
            return Ok(None);
        };
        let search_from = head_start + tags::HEAD.len();
        let head_end = original[search_from..]
            .find(tags::HEAD_END)
            .map(|p| p + search_from)
            .ok_or_else(|| LayoutError::MalformedTemplate {
                template: template.to_string(),
                pos: head_start,
                message: format!("'{}' tag not found", tags::HEAD_END),
            })?;

        let content = &original[search_from..head_end];
        let section = HeadSection::from_content(template, content, head_start)?;
        Ok(Some((section, head_end + tags::HEAD_END.len())))
    }

    fn from_content(
        template: &str,
        content: &str,
        head_start: usize,
    ) -> Result<HeadSection, LayoutError> {
        let mut variables = Vec::new();
        let content = variables::read_all(template, content.to_string(), &mut variables)?;
        let mut crumbs = Vec::new();
        let content = breadcrumbs::read_all(template, content, &mut crumbs)?;

        let mut section = HeadSection {
            head_start,
            title: None,
            parent_layout: None,
            variables,
            crumbs,
            lines: Vec::new(),
            insert_at: None,
        };
        for line in content.lines() {
            section.add_line(template, line)?;
        }
        Ok(section)
    }

    pub(crate) fn start(&self) -> usize {
        self.head_start
    }

    pub(crate) fn parent_layout(&self) -> Option<&str> {
        self.parent_layout.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn add_line(&mut self, template: &str, line: &str) -> Result<(), LayoutError> {
        let consumed = self.read_title(template, line)?
            || self.read_parent_layout(template, line)?
            || self.read_marker(line);

        if !consumed {
            self.lines.push(line.to_string());
        }
        Ok(())
    }

    fn read_title(&mut self, template: &str, line: &str) -> Result<bool, LayoutError> {
        if self.title.is_some() {
            return Ok(false);
        }
        let Some(pos) = line.find(tags::TITLE) else {
            return Ok(false);
        };
        let end = line
            .rfind(tags::TITLE_END)
            .filter(|&end| end >= pos + tags::TITLE.len())
            .ok_or_else(|| LayoutError::MalformedTemplate {
                template: template.to_string(),
                pos,
                message: format!("'{}' not found in title line", tags::TITLE_END),
            })?;
        self.title = Some(line[pos + tags::TITLE.len()..end].to_string());
        Ok(true)
    }

    fn read_parent_layout(&mut self, template: &str, line: &str) -> Result<bool, LayoutError> {
        if self.parent_layout.is_some() {
            return Ok(false);
        }
        let Some(pos) = line.find(tags::META_LAYOUT) else {
            return Ok(false);
        };
        let content_at = line[pos..]
            .find("content=")
            .map(|p| p + pos)
            .ok_or_else(|| LayoutError::MalformedTemplate {
                template: template.to_string(),
                pos,
                message: format!("no 'content=' attribute in {} element", tags::META_LAYOUT),
            })?;
        let value_from = content_at + "content=".len();
        let end = line
            .rfind('>')
            .filter(|&end| end >= value_from)
            .ok_or_else(|| LayoutError::MalformedTemplate {
                template: template.to_string(),
                pos,
                message: format!("'>' not found for {} element", tags::META_LAYOUT),
            })?;

        let mut layout = &line[value_from..end];
        if let Some(stripped) = layout.strip_suffix('/') {
            layout = stripped;
        }
        self.parent_layout = Some(remove_chars(layout, &['"', '\'']).trim().to_string());
        Ok(true)
    }

    fn read_marker(&mut self, line: &str) -> bool {
        if !line.contains(tags::LAYOUT_HEAD_MARKER) {
            return false;
        }
        self.insert_at = Some(self.lines.len());
        true
    }

    /// Emit the composed head block, blank lines skipped.
    pub(crate) fn render(&self, out: &mut String) {
        out.push_str("\n<head>\n");
        if let Some(title) = &self.title {
            out.push_str(&format!("  <title>{}</title>\n", title));
        }
        for line in &self.lines {
            if !line.trim().is_empty() {
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push_str("</head>\n");
    }

    /// Fold a child's head into this one. Child variables and crumbs
    /// overwrite; a child title overrides; child head lines land at the
    /// insertion marker, or at the end when no marker was declared.
    pub(crate) fn merge_with(&mut self, child: HeadSection) {
        for (name, value) in child.variables {
            self.set_variable(name, value);
        }
        for crumb in child.crumbs {
            self.set_crumb(crumb);
        }
        if child.title.is_some() {
            self.title = child.title;
        }
        match self.insert_at {
            Some(at) => {
                self.lines.splice(at..at, child.lines);
            }
            None => self.lines.extend(child.lines),
        }
    }

    fn set_variable(&mut self, name: String, value: String) {
        match self.variables.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.variables.push((name, value)),
        }
    }

    fn set_crumb(&mut self, crumb: Crumb) {
        match self.crumbs.iter_mut().find(|c| c.name == crumb.name) {
            Some(slot) => *slot = crumb,
            None => self.crumbs.push(crumb),
        }
    }

    /// Resolve `$variableId` tokens for every defined variable.
    pub(crate) fn replace_variables(&self, page: String) -> String {
        if self.variables.is_empty() {
            return page;
        }
        let mut page = page;
        for (name, value) in &self.variables {
            let token = format!("{}{}", tokens::VARIABLE_PREFIX, name);
            page = replace(&page, &token, value);
        }
        page
    }

    /// Resolve the `$breadcrumb` token, removing it when no crumbs exist.
    pub(crate) fn replace_breadcrumbs(&self, page: String) -> String {
        if self.crumbs.is_empty() {
            return replace(&page, tokens::BREADCRUMB, "");
        }
        tracing::debug!("rendering breadcrumb trail with {} entries", self.crumbs.len());
        let trail = breadcrumbs::render_trail(&self.crumbs);
        replace(&page, tokens::BREADCRUMB, &trail)
    }
}
