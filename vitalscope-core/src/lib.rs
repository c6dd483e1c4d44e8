pub mod cache;
pub mod cli;
pub mod conf;
pub mod crux;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod report;
pub mod session;
