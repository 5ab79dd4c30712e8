pub mod agent;
pub mod food;
pub mod swarm;
