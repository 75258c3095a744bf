pub mod ecs;
pub mod tracker;
