use serde::{Deserialize, Serialize};

use super::BookRecord;

/// One page of catalog results plus the total number of matching records
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BookPage {
    pub count: u64,
    #[serde(default)]
    pub results: Vec<BookRecord>,
}
