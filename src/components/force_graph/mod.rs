mod component;
mod payload;
mod render;
mod state;
mod types;

pub use component::ForceGraphCanvas;
pub use types::GraphData;
