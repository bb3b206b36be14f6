pub mod error;
pub mod ply;
pub mod sequence;
pub mod sink;
