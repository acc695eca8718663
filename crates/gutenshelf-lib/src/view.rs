//! Plain data handed to whatever draws the pages.

use crate::models::{Author, BookRecord};

pub const DEFAULT_COVER_URL: &str = "https://images.inc.com/uploaded_files/image/1920x1080/getty_509107562_2000133320009280346_351827.jpg";
pub const UNKNOWN_GENRE: &str = "Unknown";
pub const TITLE_PREVIEW_LEN: usize = 40;

pub fn format_author(author: &Author) -> String {
    let birth = author
        .birth_year
        .map(|year| year.to_string())
        .unwrap_or_else(|| "?".to_string());
    let death = author
        .death_year
        .map(|year| year.to_string())
        .unwrap_or_else(|| "Present".to_string());
    format!("{} ({} - {})", author.name, birth, death)
}

pub fn format_authors(authors: &[Author]) -> String {
    authors
        .iter()
        .map(format_author)
        .collect::<Vec<_>>()
        .join(", ")
}

fn preview_title(title: &str) -> String {
    if title.chars().count() > TITLE_PREVIEW_LEN {
        format!("{}...", title.chars().take(TITLE_PREVIEW_LEN).collect::<String>())
    } else {
        title.to_string()
    }
}

/// A book as shown in the listing grid and on the wishlist page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCard {
    pub id: i64,
    pub title: String,
    pub full_title: String,
    pub authors: String,
    pub genre: String,
    pub cover_url: String,
}

impl From<&BookRecord> for BookCard {
    fn from(book: &BookRecord) -> Self {
        Self {
            id: book.id,
            title: preview_title(&book.title),
            full_title: book.title.clone(),
            authors: format_authors(&book.authors),
            genre: book
                .subjects
                .first()
                .cloned()
                .unwrap_or_else(|| UNKNOWN_GENRE.to_string()),
            cover_url: book
                .cover_image_url()
                .unwrap_or(DEFAULT_COVER_URL)
                .to_string(),
        }
    }
}

/// Everything the detail page shows about one book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetail {
    pub id: i64,
    pub title: String,
    pub authors: String,
    pub subjects: String,
    pub download_count: i64,
    pub languages: String,
    pub media_type: String,
    pub cover_url: String,
    pub read_url: Option<String>,
}

impl From<&BookRecord> for BookDetail {
    fn from(book: &BookRecord) -> Self {
        let subjects = if book.subjects.is_empty() {
            UNKNOWN_GENRE.to_string()
        } else {
            book.subjects.join(", ")
        };

        Self {
            id: book.id,
            title: book.title.clone(),
            authors: format_authors(&book.authors),
            subjects,
            download_count: book.download_count,
            languages: book.languages.join(", "),
            media_type: book.media_type.clone(),
            cover_url: book
                .cover_image_url()
                .unwrap_or(DEFAULT_COVER_URL)
                .to_string(),
            read_url: book.read_url().map(str::to_string),
        }
    }
}
