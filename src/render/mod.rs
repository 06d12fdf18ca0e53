pub mod clouds;
pub mod color;
pub mod frame;
pub mod layer;
pub mod scene;
pub mod sky;
