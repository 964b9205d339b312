pub mod local;
pub mod memory;
