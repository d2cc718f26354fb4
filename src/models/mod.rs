pub mod components;
pub mod robot;
