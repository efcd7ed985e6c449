pub mod dropdown;
pub mod force_graph;
pub mod legend;
pub mod range_slider;
