// Copyright 2020 @TwoCookingMice

pub mod aabb;
pub mod bitmap;
pub mod color;
pub mod constants;
pub mod frame;
pub mod ray;
pub mod transform;
pub mod warp;
