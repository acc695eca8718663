#[macro_use]
extern crate log;

pub mod catalog;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod genre;
pub mod listing;
pub mod models;
pub mod pagination;
pub mod prelude;
pub mod query;
pub mod storage;
pub mod sync;
pub mod view;
pub mod wishlist;

#[cfg(test)]
mod fixtures;

/// Endpoint of the public catalog used when nothing else is configured
pub static DEFAULT_API_URL: &str = "https://gutendex.com/books";
