pub mod ease;
pub mod map;
pub mod presence;
pub mod spring;
