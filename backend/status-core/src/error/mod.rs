pub mod catalog;
pub mod config;
pub mod lookup;
pub mod provider;

