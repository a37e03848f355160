pub mod checkerboard;
pub mod constant;
