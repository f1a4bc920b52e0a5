//! HTML documentation output.

pub mod html;

pub use html::render_catalog_html;
