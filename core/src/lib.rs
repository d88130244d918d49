pub mod angle;
pub mod format;
pub mod geometry;
pub mod model;
pub mod triangle;
pub mod unit_circle;
pub mod view;

pub fn version() -> &'static str {
    "0.1.0"
}
