//! Recent commit messages of the site repository

pub mod github;
pub mod handler;

pub use github::{CommitSource, GithubCommitSource};
pub use handler::ActivityHandler;
