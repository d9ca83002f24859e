pub mod engine;
pub mod entities;
pub mod errors;
pub mod ports;
