pub mod entities;
pub mod graph;
pub mod show;
pub mod stats;
