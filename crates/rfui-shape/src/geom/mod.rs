mod edges;
mod size;
mod vec2;

pub use edges::Edges;
pub use size::Size;
pub use vec2::Vec2;
