pub mod channels;
pub mod config;
pub mod heatmap;
pub mod index;
mod selection;
pub mod stats;
