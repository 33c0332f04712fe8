//! Recipes for the xiph.org download table
//!
//! The table lists each library in one cell and its current version in the next.

use std::sync::Arc;

use scraper::Html;

use super::PageRecipe;
use crate::version::html::{select_all, text};
use crate::version::http::PageFetcher;
use crate::version::recipe::RecipeTable;

const DOWNLOADS_URL: &str = "https://xiph.org/downloads/";

pub(super) fn register(table: &mut RecipeTable, fetcher: &Arc<PageFetcher>) {
    table.insert(
        "ogg",
        Arc::new(PageRecipe::new(fetcher.clone(), DOWNLOADS_URL, ogg)),
    );
    table.insert(
        "vorbis",
        Arc::new(PageRecipe::new(fetcher.clone(), DOWNLOADS_URL, vorbis)),
    );
}

fn cell_after(doc: &Html, library: &str) -> Option<String> {
    let cells = select_all(doc, "td");
    let index = cells.iter().position(|cell| text(*cell).contains(library))?;
    cells.get(index + 1).map(|cell| text(*cell).trim().to_string())
}

pub fn ogg(doc: &Html) -> Option<String> {
    cell_after(doc, "libogg")
}

pub fn vorbis(doc: &Html) -> Option<String> {
    cell_after(doc, "libvorbis")
}
