// Copyright @yucwang 2021

pub mod bsdf;
pub mod bvh;
pub mod computation_node;
pub mod emission;
pub mod error;
pub mod instance;
pub mod integrator;
pub mod interaction;
pub mod light;
pub mod sampler;
pub mod scene;
pub mod sensor;
pub mod settings;
pub mod shape;
pub mod texture;
