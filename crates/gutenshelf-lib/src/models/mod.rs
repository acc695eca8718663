pub mod book;
pub use book::*;

pub mod page;
pub use page::*;
