pub mod mapping;
pub mod world;
