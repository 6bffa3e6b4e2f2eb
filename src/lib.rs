pub mod agent;
pub mod configs;
pub mod errors;
pub mod prompt;
pub mod providers;
pub mod session;
pub mod tools;
