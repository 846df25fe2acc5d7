pub mod backend;
pub mod config;
pub mod console;
pub mod facade;
pub mod logger;
pub mod page;
