pub mod canvas;
pub mod color;
pub mod exits;
pub mod intel_map;
