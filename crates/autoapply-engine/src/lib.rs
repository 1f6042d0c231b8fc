pub mod collaborators;
pub mod config;
pub mod profile;
pub mod report;
pub mod resolve;
pub mod search;
pub mod submit;
pub mod wait;
