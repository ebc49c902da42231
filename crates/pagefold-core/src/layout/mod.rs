//! Layout module - raw-text layout inheritance for HTML templates
//!
//! A child document names its parent layout in a `<meta name="layout">`
//! tag; the engine folds the child's head and body into the parent's
//! placeholders and repeats up the chain until a root layout is reached.
//! Everything works on raw markup with hand-rolled scanning; there is no
//! DOM and no grammar.
//!
//! ## Recognized markup
//!
//! - `<meta name="layout" content="PARENT"/>` - declares the parent layout
//! - `<meta id="layout-head"/>` - where child head lines land in a parent
//! - `<div id="layout-body"></div>` - where child body content lands
//! - `<template id="ID">...</template>`, `<var id="ID">...</var>` -
//!   inline variable definitions, referenced as `$ID`
//! - `<meta name="breadN" content="DESC" href="HREF"/>` - breadcrumb
//!   entries, rendered in place of `$breadcrumb`
//!
//! ## Precedence
//!
//! Within one document the first definition of a variable or breadcrumb
//! key wins. Across merge levels the child overwrites the parent, and the
//! innermost `<title>` and non-empty body-tag attributes carry through.

pub mod engine;
pub mod error;
pub mod replace;

pub use engine::LayoutEngine;
pub use error::LayoutError;
