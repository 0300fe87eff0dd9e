pub mod geometry;
pub mod icon_gen;
