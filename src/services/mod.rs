// src/services/mod.rs

//! Services over the content cache.
//!
//! - `posts`: shapes cached content items into posts
//! - `blog`: the full read API consumed by page renderers

pub mod blog;
pub mod posts;

pub use blog::Blog;
pub use posts::PostRepository;
