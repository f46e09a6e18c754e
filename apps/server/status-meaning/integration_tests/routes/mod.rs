mod demo;
mod helpers;
mod status;
