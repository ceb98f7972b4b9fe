//! Quote and book collections plus the record-selection capability.

use crate::error::CoverError;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AnimeQuote {
    pub quote: String,
    pub character: String,
    pub anime: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: u32,
}

pub fn load_stoic_quotes(data_dir: &Path) -> Result<Vec<String>, CoverError> {
    load_json(&data_dir.join("stoic_quotes.json"))
}

pub fn load_anime_quotes(data_dir: &Path) -> Result<Vec<AnimeQuote>, CoverError> {
    load_json(&data_dir.join("anime_quotes.json"))
}

pub fn load_books(data_dir: &Path) -> Result<Vec<Book>, CoverError> {
    load_json(&data_dir.join("books.json"))
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, CoverError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| CoverError::ContentUnavailable(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|e| CoverError::ContentUnavailable(format!("{}: {e}", path.display())))
}

/// Record selection, injected so tests can pin the choice.
pub trait Picker {
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>;
}

/// Uniform random selection for production use.
#[derive(Default)]
pub struct RandomPicker {
    rng: ThreadRng,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Picker for RandomPicker {
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

/// Always selects the record at one fixed index. Test double.
pub struct FixedPicker(pub usize);

impl Picker for FixedPicker {
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.0)
    }
}

/// Draw one record, treating an empty collection as a hard error rather
/// than rendering a blank block.
pub fn pick<'a, T>(
    picker: &mut impl Picker,
    items: &'a [T],
    what: &str,
) -> Result<&'a T, CoverError> {
    picker
        .pick(items)
        .ok_or_else(|| CoverError::ContentUnavailable(format!("{what} collection is empty")))
}
