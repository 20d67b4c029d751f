pub mod feed;
pub mod prediction;
pub mod profile;
