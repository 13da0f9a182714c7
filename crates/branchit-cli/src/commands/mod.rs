pub mod demo;
pub mod frame;
pub mod profile;
