pub mod base;
pub mod dial;
pub mod types;
pub mod utils;

#[cfg(test)]
pub mod mock;
