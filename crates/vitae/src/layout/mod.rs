// Layout: turns a ResumeDocument into positioned draw commands that fit a
// single fixed-size page. CPU-bound and allocation-only; callers running
// inside an async executor should wrap it in spawn_blocking.

pub mod engine;
pub mod geometry;
pub mod sanitize;
pub mod wrap;

pub use engine::layout_resume;
pub use geometry::{default_geometry, PageGeometry, PAGE_HEIGHT, PAGE_WIDTH};
