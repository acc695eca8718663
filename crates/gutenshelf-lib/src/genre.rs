use std::collections::HashSet;

use crate::models::BookRecord;

pub const ALL_GENRES_LABEL: &str = "All Genres";

/// One entry of the genre filter control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreOption {
    pub value: String,
    pub label: String,
    pub is_selected: bool,
}

/// Subjects seen on every page fetched so far in this session.
///
/// Only grows; a subject that disappears from later pages stays selectable.
#[derive(Debug, Clone, Default)]
pub struct GenreIndex {
    genres: Vec<String>,
    seen: HashSet<String>,
}

impl GenreIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, items: &[BookRecord]) {
        for subject in items.iter().flat_map(|item| item.subjects.iter()) {
            if self.seen.insert(subject.clone()) {
                self.genres.push(subject.clone());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Options in first-seen order, behind a leading "unfiltered" entry whose value is empty.
    pub fn render(&self, selected: &str) -> Vec<GenreOption> {
        std::iter::once(GenreOption {
            value: String::new(),
            label: ALL_GENRES_LABEL.to_string(),
            is_selected: selected.is_empty(),
        })
        .chain(self.genres.iter().map(|genre| GenreOption {
            value: genre.clone(),
            label: genre.clone(),
            is_selected: genre == selected,
        }))
        .collect()
    }
}
