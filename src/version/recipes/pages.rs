//! Recipes for project download pages with one-off layouts

use std::sync::Arc;

use regex::Regex;
use scraper::Html;

use super::{BROWSER_USER_AGENT, Extractor, PageRecipe, SHORT_USER_AGENT};
use crate::version::html::{
    find_by_attr, find_link, last_word, nth_word, select_all, select_first, text,
};
use crate::version::http::PageFetcher;
use crate::version::recipe::RecipeTable;

pub(super) fn register(table: &mut RecipeTable, fetcher: &Arc<PageFetcher>) {
    let plain: [(&str, &str, Extractor); 16] = [
        ("7Zip", "https://www.7-zip.org/", seven_zip),
        ("AndroidNDK", "https://developer.android.com/ndk/downloads/", android_ndk),
        (
            "AndroidSDKAPI",
            "https://developer.android.com/guide/topics/manifest/uses-sdk-element",
            android_sdk_api,
        ),
        ("bzip2", "https://sourceware.org/bzip2/", bzip2),
        (
            "freetype",
            "https://sourceforge.net/projects/freetype/files/freetype2/",
            freetype,
        ),
        ("GIMP_mac", "https://www.gimp.org/downloads/", gimp_mac),
        ("GIMP_win", "https://www.gimp.org/downloads/", gimp_win),
        ("Gradle", "https://gradle.org/install/", gradle),
        ("KeePassXC", "https://keepassxc.org/download/", keepassxc),
        ("libpng", "http://www.libpng.org/pub/png/libpng.html", libpng),
        ("MuseScore", "https://musescore.org/en", musescore),
        ("OBS", "https://obsproject.com/download", obs),
        ("python", "https://www.python.org/", python),
        ("SFML", "https://www.sfml-dev.org/download.php", sfml),
        ("TortoiseGit", "https://tortoisegit.org/download/", tortoise_git),
        (
            "VS2022",
            "https://docs.microsoft.com/en-us/visualstudio/releases/2022/release-notes",
            vs2022,
        ),
    ];

    for (name, url, extract) in plain {
        table.insert(name, Arc::new(PageRecipe::new(fetcher.clone(), url, extract)));
    }

    table.insert("zlib", Arc::new(PageRecipe::new(fetcher.clone(), "https://zlib.net/", zlib)));

    // These sites answer differently (or not at all) without a browser user agent
    table.insert(
        "AndroidStudio",
        Arc::new(
            PageRecipe::new(
                fetcher.clone(),
                "https://developer.android.com/studio/",
                android_studio,
            )
            .user_agent(BROWSER_USER_AGENT)
            .with_cookies(),
        ),
    );
    table.insert(
        "cmake",
        Arc::new(
            PageRecipe::new(fetcher.clone(), "https://cmake.org/download/", cmake)
                .user_agent(BROWSER_USER_AGENT)
                .with_cookies(),
        ),
    );
    table.insert(
        "git",
        Arc::new(
            PageRecipe::new(fetcher.clone(), "https://git-scm.com/download", git)
                .user_agent(SHORT_USER_AGENT),
        ),
    );
    table.insert(
        "NotepadPlusPlus",
        Arc::new(
            PageRecipe::new(
                fetcher.clone(),
                "https://notepad-plus-plus.org/downloads",
                notepad_plus_plus,
            )
            .user_agent(SHORT_USER_AGENT),
        ),
    );
    table.insert(
        "Xcode",
        Arc::new(
            PageRecipe::new(
                fetcher.clone(),
                "https://apps.apple.com/us/app/xcode/id497799835",
                xcode,
            )
            .user_agent(SHORT_USER_AGENT),
        ),
    );
}

fn first_text(doc: &Html, css: &str) -> Option<String> {
    select_first(doc, css).map(text)
}

/// "Download 7-Zip 22.01 (2022-07-15):"
pub fn seven_zip(doc: &Html) -> Option<String> {
    let heading = select_all(doc, "b")
        .into_iter()
        .map(text)
        .find(|t| t.contains("Download"))?;
    nth_word(&heading, 2)
}

/// "Latest LTS Version (r25b)"
pub fn android_ndk(doc: &Html) -> Option<String> {
    let heading = first_text(doc, "h2#lts-downloads")?;
    last_word(&heading).map(|word| word.trim_matches(|c| c == '(' || c == ')').to_string())
}

pub fn android_sdk_api(doc: &Html) -> Option<String> {
    find_link(doc, r"^/sdk/api_diff/\d+/changes$").map(|el| text(el).trim().to_string())
}

/// "Android Studio Dolphin | 2021.3.1 Patch 1 ..."
pub fn android_studio(doc: &Html) -> Option<String> {
    nth_word(&first_text(doc, "div.dac-info-size")?, 4)
}

pub fn bzip2(doc: &Html) -> Option<String> {
    let cell = first_text(doc, r#"td[colspan="2"]"#)?;
    let line = cell
        .lines()
        .find(|line| line.contains("The current stable version"))?;
    last_word(line).map(|word| word.trim_matches('.').to_string())
}

/// "Latest Release (3.25.0)"
pub fn cmake(doc: &Html) -> Option<String> {
    let heading = first_text(doc, "h3")?;
    nth_word(&heading, 2).map(|word| word.trim_matches(|c| c == '(' || c == ')').to_string())
}

pub fn freetype(doc: &Html) -> Option<String> {
    find_by_attr(doc, "a", "href", |href| {
        href.starts_with("/projects/freetype/files/freetype2/")
    })
    .map(|el| text(el).trim().to_string())
}

fn gimp(doc: &Html, platform: &str) -> Option<String> {
    let link = find_by_attr(doc, "a", "href", |href| href.contains(platform))?;
    nth_word(&text(link), 2)
}

/// "Download GIMP 2.10.32 ..." on the macOS link
pub fn gimp_mac(doc: &Html) -> Option<String> {
    gimp(doc, "osx")
}

/// "Download GIMP 2.10.32 ..." on the Windows link
pub fn gimp_win(doc: &Html) -> Option<String> {
    gimp(doc, "windows")
}

pub fn git(doc: &Html) -> Option<String> {
    first_text(doc, "span.version").map(|t| t.trim().to_string())
}

/// First word of the first paragraph that looks like a version number
pub fn gradle(doc: &Html) -> Option<String> {
    let paragraph = first_text(doc, "p")?;
    let re = Regex::new(r"^(\d+\.){1,2}(\d+)").ok()?;
    paragraph
        .split_whitespace()
        .find_map(|word| re.find(word).map(|m| m.as_str().to_string()))
}

pub fn keepassxc(doc: &Html) -> Option<String> {
    first_text(doc, "span.label.label-success").map(|t| t.trim_start_matches('v').to_string())
}

pub fn libpng(doc: &Html) -> Option<String> {
    first_text(doc, r#"font[size="+1"]"#).map(|t| t.trim().to_string())
}

/// "Download 3.6.2 ..."
pub fn musescore(doc: &Html) -> Option<String> {
    nth_word(&first_text(doc, "span#download-version")?, 1)
}

/// "Version: 28.0.3"
pub fn obs(doc: &Html) -> Option<String> {
    let label = first_text(doc, "span.dl_ver")?.replace(' ', "");
    label.split(':').nth(1).map(str::to_string)
}

/// "Python 3.10.8"
pub fn python(doc: &Html) -> Option<String> {
    let link = find_by_attr(doc, "a", "href", |href| {
        href.starts_with("/downloads/release/python-")
    })?;
    nth_word(&text(link), 1)
}

pub fn notepad_plus_plus(doc: &Html) -> Option<String> {
    let link = find_by_attr(doc, "a", "href", |href| href.starts_with("/downloads/"))?;
    nth_word(&text(link), 2)
}

/// "Download SFML 2.5.1"
pub fn sfml(doc: &Html) -> Option<String> {
    last_word(&first_text(doc, "div.title")?)
}

/// "The current stable version is: 2.13.0"
pub fn tortoise_git(doc: &Html) -> Option<String> {
    last_word(&first_text(doc, "strong")?)
}

/// "Visual Studio 2022 version 17.3.6"
pub fn vs2022(doc: &Html) -> Option<String> {
    let link = find_link(doc, r"^#\d+\.\d+\.\d+$")?;
    nth_word(&text(link), 4)
}

/// "Version 14.0.1"
pub fn xcode(doc: &Html) -> Option<String> {
    nth_word(&first_text(doc, "p.whats-new__latest__version")?, 1)
}

/// "zlib 1.2.13"
pub fn zlib(doc: &Html) -> Option<String> {
    nth_word(&first_text(doc, r#"font[size="+2"]"#)?, 1)
}
