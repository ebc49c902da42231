//! Constants shared across the crate

/// Markup conventions recognized by the layout parser, bit-exact
pub mod tags {
    /// Opens the head section
    pub const HEAD: &str = "<head>";
    /// Closes the head section
    pub const HEAD_END: &str = "</head>";
    /// Opens the body tag, attribute text follows until `>`
    pub const BODY: &str = "<body";
    /// Closes the body section; matched as the last occurrence in a document
    pub const BODY_END: &str = "</body>";
    /// Opens the title element
    pub const TITLE: &str = "<title>";
    /// Closes the title element
    pub const TITLE_END: &str = "</title>";
    /// Declares the parent layout, `content` attribute carries its name
    pub const META_LAYOUT: &str = "<meta name=\"layout\"";
    /// Prefix of a breadcrumb declaration, `<meta name="breadN" .../>`
    pub const META_BREAD: &str = "<meta name=\"bread";
    /// Marks where a child's head lines are spliced into a parent layout
    pub const LAYOUT_HEAD_MARKER: &str = "<meta id=\"layout-head\"/>";
    /// Placeholder replaced by a child's body content in a parent layout
    pub const LAYOUT_BODY_PLACEHOLDER: &str = "<div id=\"layout-body\"></div>";
    /// Opens a variable definition block, `<template id="ID">...</template>`
    pub const TEMPLATE_VAR_START: &str = "<template id=\"";
    /// Closes a `<template>` variable definition block
    pub const TEMPLATE_VAR_END: &str = "</template>";
    /// Opens a variable definition block, `<var id="ID">...</var>`
    pub const VAR_START: &str = "<var id=\"";
    /// Closes a `<var>` variable definition block
    pub const VAR_END: &str = "</var>";
}

/// Substitution tokens resolved during the final render
pub mod tokens {
    /// Prefix of a variable token, `$variableId`
    pub const VARIABLE_PREFIX: &str = "$";
    /// Replaced by the rendered breadcrumb trail, or removed
    pub const BREADCRUMB: &str = "$breadcrumb";
}

/// Breadcrumb rendering conventions
pub mod crumbs {
    /// Breadcrumb keys are `bread0`, `bread1`, ... in trail order
    pub const KEY_PREFIX: &str = "bread";
    /// Joins rendered trail entries
    pub const SEPARATOR: &str = "<span class=\"sep\">&nbsp;/&nbsp;</span>";
}

/// Limits guarding the inheritance walk
pub mod limits {
    /// Default maximum parent-chain length before composition fails
    pub const DEFAULT_MAX_DEPTH: usize = 32;
}
