//! Layout error types

use std::fmt;

/// Parse and merge errors raised while composing a layout chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A required closing tag, attribute, or terminator is missing
    MalformedTemplate {
        /// Name of the template being parsed
        template: String,
        /// Byte position the parser was at when the input ran out
        pos: usize,
        /// What was expected, e.g. `'</head>' tag not found`
        message: String,
    },

    /// The template source has no content for the requested name
    TemplateNotFound {
        /// The requested template name
        name: String,
    },

    /// The template source failed to produce content for an existing name
    SourceRead {
        /// The requested template name
        name: String,
        /// Underlying failure description
        message: String,
    },

    /// A template's parent chain loops back on itself
    InheritanceCycle {
        /// The template whose parent closed the loop
        template: String,
        /// The chain walked so far, leaf first
        chain: Vec<String>,
    },

    /// The parent chain is longer than the configured maximum
    DepthExceeded {
        /// The template that exceeded the limit
        template: String,
        /// The configured maximum chain length
        max: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::MalformedTemplate {
                template,
                pos,
                message,
            } => {
                write!(
                    f,
                    "{} in template '{}' at position [{}]",
                    message, template, pos
                )
            }
            LayoutError::TemplateNotFound { name } => {
                write!(f, "template '{}' not found", name)
            }
            LayoutError::SourceRead { name, message } => {
                write!(f, "failed to read template '{}': {}", name, message)
            }
            LayoutError::InheritanceCycle { template, chain } => {
                write!(
                    f,
                    "layout inheritance cycle at '{}': {}",
                    template,
                    chain.join(" -> ")
                )
            }
            LayoutError::DepthExceeded { template, max } => {
                write!(
                    f,
                    "layout inheritance deeper than {} levels at '{}'",
                    max, template
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {}
