pub mod classifier;
pub mod composer;
pub mod confidence;
pub mod content;
pub mod handlers;
pub mod store;
