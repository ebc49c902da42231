//! Tests for the layout engine
//!
//! Organized into focused submodules: low-level text primitives, the
//! head-content readers, section parsing, and full composition runs.

// Test helper functions
mod helpers;



// Section parsing tests
mod body;

// Composition tests
mod render_basic;
