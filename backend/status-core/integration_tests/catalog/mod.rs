mod fetch;
mod source;
