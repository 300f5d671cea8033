pub mod constants;
pub mod domain;
pub mod entities;
mod idens;
pub mod initializer;
pub mod seed;
pub mod settings;
