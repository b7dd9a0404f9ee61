// Database entity definitions (sea-orm)
pub mod client;
pub mod project;
