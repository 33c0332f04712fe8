//! Recipes reading GitHub release listing pages
//!
//! The listing links each release tag as `/<owner>/<repo>/releases/tag/<tag>`;
//! the first link matching the expected tag shape is the newest release.

use std::sync::Arc;

use scraper::Html;

use super::{Extractor, PageRecipe};
use crate::version::html::{find_link, nth_word, select_all, text};
use crate::version::http::PageFetcher;
use crate::version::recipe::RecipeTable;

const BASE_URL: &str = "https://github.com";

pub(super) fn register(table: &mut RecipeTable, fetcher: &Arc<PageFetcher>) {
    let recipes: [(&str, &str, Extractor); 9] = [
        ("conan", "/conan-io/conan/releases", conan),
        ("glew", "/nigels-com/glew/releases", glew),
        ("googletest", "/google/googletest/releases", googletest),
        ("grepWin", "/stefankueng/grepWin/releases/", grep_win),
        ("ninja", "/ninja-build/ninja/releases/latest", ninja),
        ("SDL", "/libsdl-org/SDL/releases", sdl),
        ("SDL_image", "/libsdl-org/SDL_image/releases", sdl_image),
        ("SDL_mixer", "/libsdl-org/SDL_mixer/releases", sdl_mixer),
        ("SDL_ttf", "/libsdl-org/SDL_ttf/releases", sdl_ttf),
    ];

    for (name, path, extract) in recipes {
        let recipe = PageRecipe::new(fetcher.clone(), format!("{}{}", BASE_URL, path), extract);
        table.insert(name, Arc::new(recipe));
    }
}

fn release_link_text(doc: &Html, pattern: &str) -> Option<String> {
    find_link(doc, pattern).map(|el| text(el).trim().to_string())
}

/// Newest 2.x release; falls back to the last listed tag when no 2.x exists
pub fn conan(doc: &Html) -> Option<String> {
    let mut version = None;
    for link in select_all(doc, r#"a[href^="/conan-io/conan/releases/tag"]"#) {
        let Some(candidate) = nth_word(&text(link), 0) else {
            continue;
        };
        let is_major_two = candidate.split('.').next() == Some("2");
        version = Some(candidate);
        if is_major_two {
            break;
        }
    }
    version
}

pub fn glew(doc: &Html) -> Option<String> {
    let link = find_link(doc, r"^/nigels-com/glew/releases/tag/glew-\d+\.\d+\.\d+$")?;
    nth_word(&text(link), 1)
}

pub fn googletest(doc: &Html) -> Option<String> {
    release_link_text(
        doc,
        r"^/google/googletest/releases/tag/release-\d+\.\d+\.\d+$",
    )
    .map(|version| version.trim_start_matches('v').to_string())
}

pub fn grep_win(doc: &Html) -> Option<String> {
    let link = find_link(doc, r"^/stefankueng/grepWin/releases/tag/\d+\.\d+\.\d+$")?;
    nth_word(&text(link), 1)
}

pub fn ninja(doc: &Html) -> Option<String> {
    release_link_text(doc, r"^/ninja-build/ninja/releases/tag/v\d+\.\d+\.\d+$")
        .map(|version| version.trim_start_matches('v').to_string())
}

pub fn sdl(doc: &Html) -> Option<String> {
    release_link_text(doc, r"^/libsdl-org/SDL/releases/tag/release-\d+\.\d+\.\d+$")
}

pub fn sdl_image(doc: &Html) -> Option<String> {
    release_link_text(
        doc,
        r"^/libsdl-org/SDL_image/releases/tag/release-\d+\.\d+\.\d+$",
    )
}

pub fn sdl_mixer(doc: &Html) -> Option<String> {
    release_link_text(
        doc,
        r"^/libsdl-org/SDL_mixer/releases/tag/release-\d+\.\d+\.\d+$",
    )
}

pub fn sdl_ttf(doc: &Html) -> Option<String> {
    release_link_text(
        doc,
        r"^/libsdl-org/SDL_ttf/releases/tag/release-\d+\.\d+\.\d+$",
    )
}
