// Moltlens - curated view of the agent social feed
// Library exports

pub mod cli;
pub mod config;
pub mod curator;
pub mod digest;
pub mod feed;
pub mod logging;
pub mod pipeline;
pub mod providers;
pub mod sanitizer;
