pub mod bounds;
pub mod mesh;
pub mod point;
