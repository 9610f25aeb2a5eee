pub mod algorithms;
pub mod config;
pub mod grid;
pub mod map_file;
pub mod samples;
pub mod statistics;
