pub mod assessment;
pub mod config;
pub mod history;
pub mod output;
pub mod prompt;
pub mod quiz;
pub mod scoring;
pub mod session;
pub mod submit;
