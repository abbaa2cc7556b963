//! Topo-sun - sun exposure and seasonal climate estimates for climbing walls

pub mod core;
pub mod topo;
pub mod solar;
pub mod engine;
