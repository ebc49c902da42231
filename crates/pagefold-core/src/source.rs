//! Template source abstraction
//!
//! The layout engine never touches the filesystem itself; it asks a
//! [`TemplateSource`] for raw template text by name. Caching and
//! modification tracking belong to the source, not to the engine.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use crate::layout::error::LayoutError;

/// Supplies raw template text by name
pub trait TemplateSource {
    /// Return the raw text for `name`, or
    /// [`LayoutError::TemplateNotFound`] when no content exists for it.
    fn source(&self, name: &str) -> Result<String, LayoutError>;
}

/// Reads templates from a directory, resolving names as relative paths.
///
/// Files are decoded as UTF-8; the encoding is fixed when the source is
/// constructed rather than passed per call.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl TemplateSource for DirectorySource {
    fn source(&self, name: &str) -> Result<String, LayoutError> {
        let path = self.root.join(name);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(LayoutError::TemplateNotFound {
                name: name.to_string(),
            }),
            Err(e) => Err(LayoutError::SourceRead {
                name: name.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

/// In-memory template source backed by a name → text map.
///
/// The test double for the source boundary; also usable for templates
/// embedded in a binary.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    templates: HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template under `name`, replacing any previous text.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.templates.insert(name.into(), text.into());
    }

    /// Builder-style [`StaticSource::insert`].
    pub fn with(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }
}

impl TemplateSource for StaticSource {
    fn source(&self, name: &str) -> Result<String, LayoutError> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| LayoutError::TemplateNotFound {
                name: name.to_string(),
            })
    }
}
