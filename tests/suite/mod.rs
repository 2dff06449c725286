mod carousel;
mod config;
mod counter;
mod page;
