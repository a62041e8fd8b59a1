//! Placement handlers - authoring-time template layout.

mod layout_templates;

pub use layout_templates::{
    LayoutError, LayoutResult, LayoutTemplatesCommand, LayoutTemplatesHandler,
};
