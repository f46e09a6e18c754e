mod catalog;
mod lookup;
