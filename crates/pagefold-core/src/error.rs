use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagefoldError {
    // Template errors
    #[error("TEMPLATE_NOT_FOUND: {0}")]
    TemplateNotFound(String),

    #[error("TEMPLATE_MALFORMED: {0}")]
    TemplateMalformed(String),

    // Layout errors
    #[error("LAYOUT_INHERITANCE_CYCLE: {0}")]
    InheritanceCycle(String),

    #[error("LAYOUT_DEPTH_EXCEEDED: {0}")]
    DepthExceeded(String),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: failed to parse pagefold.toml: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl From<crate::layout::error::LayoutError> for PagefoldError {
    fn from(err: crate::layout::error::LayoutError) -> Self {
        use crate::layout::error::LayoutError;
        match &err {
            LayoutError::TemplateNotFound { .. } => PagefoldError::TemplateNotFound(err.to_string()),
            LayoutError::InheritanceCycle { .. } => PagefoldError::InheritanceCycle(err.to_string()),
            LayoutError::DepthExceeded { .. } => PagefoldError::DepthExceeded(err.to_string()),
            LayoutError::SourceRead { .. } => PagefoldError::Generic(err.to_string()),
            LayoutError::MalformedTemplate { .. } => PagefoldError::TemplateMalformed(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PagefoldError>;
