mod config;
mod fallback;
mod lookup;
