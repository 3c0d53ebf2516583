//! Hyperview - interactive 4D projection viewer
//!
//! A tumbling cube and a tesseract rotating in a selectable 4D plane,
//! projected 4D -> 3D -> screen.

pub mod config;
pub mod scene;
pub mod systems;
