pub mod cli;
pub mod config;
pub mod flock;
pub mod music;
pub mod voice;
