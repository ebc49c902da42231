//! Inline variable extraction from head content
//!
//! Two element forms define variables: `<template id="ID">...</template>`
//! and `<var id="ID">...</var>`. Both are read in sequential passes over
//! the shrinking head content; each matched block is cut out of the text
//! and its first definition recorded.

use crate::config::consts::tags;
use crate::layout::error::LayoutError;

/// Extract all variable definition blocks from `content`.
///
/// Returns the content with every recognized block removed. Definitions
/// land in `variables` in document order; an id already present is left
/// untouched (first occurrence wins).
pub(crate) fn read_all(
    template: &str,
    content: String,
    variables: &mut Vec<(String, String)>,
) -> Result<String, LayoutError> {
    let mut reader = VariableReader {
        template,
        content,
        element_start: tags::TEMPLATE_VAR_START,
        element_end: tags::TEMPLATE_VAR_END,
    };
    reader.read_pass(variables)?;
    reader.element_start = tags::VAR_START;
    reader.element_end = tags::VAR_END;
    reader.read_pass(variables)?;
    Ok(reader.content)
}

struct VariableReader<'t> {
    template: &'t str,
    content: String,
    element_start: &'static str,
    element_end: &'static str,
}

impl VariableReader<'_> {
    fn read_pass(&mut self, variables: &mut Vec<(String, String)>) -> Result<(), LayoutError> {
        while let Some(start) = self.content.find(self.element_start) {
            self.read_one(start, variables)?;
        }
        Ok(())
    }

    fn read_one(
        &mut self,
        start: usize,
        variables: &mut Vec<(String, String)>,
    ) -> Result<(), LayoutError> {
        let id_from = start + self.element_start.len();
        let id_end = self.content[id_from..]
            .find("\">")
            .map(|p| p + id_from)
            .ok_or_else(|| LayoutError::MalformedTemplate {
                template: self.template.to_string(),
                pos: start,
                message: format!("no closing '\">' reading '{}' variable", self.element_start),
            })?;
        let end = self.content[id_end..]
            .find(self.element_end)
            .map(|p| p + id_end)
            .ok_or_else(|| LayoutError::MalformedTemplate {
                template: self.template.to_string(),
                pos: id_end,
                message: format!("'{}' not found reading head variable", self.element_end),
            })?;

        let id = self.content[id_from..id_end].trim().to_string();
        let value = self.content[id_end + 2..end].trim().to_string();

        if !variables.iter().any(|(k, _)| k == &id) {
            variables.push((id, value));
        }
        self.content
            .replace_range(start..end + self.element_end.len(), "");
        Ok(())
    }
}
