pub mod cache;
pub mod directory;
pub mod error;
pub mod report;
pub mod service;
