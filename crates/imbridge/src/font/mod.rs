//! Font atlas upload.

mod atlas;

pub use atlas::atlas_surface;

pub(crate) use atlas::upload_font_atlas;
