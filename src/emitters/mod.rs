pub mod area;
pub mod directional;
pub mod lambertian;
pub mod point;
