//! Element lookup and text helpers shared by the page recipes
//!
//! Every helper returns `None` instead of failing so that an extractor can
//! chain lookups with `?` and a missing element surfaces as a not-found error.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// First element matching a CSS selector
pub fn select_first<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    doc.select(&selector).next()
}

/// All elements matching a CSS selector, in document order
pub fn select_all<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => doc.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

/// First `tag` element whose `attr` value satisfies `predicate`
pub fn find_by_attr<'a>(
    doc: &'a Html,
    tag: &str,
    attr: &str,
    predicate: impl Fn(&str) -> bool,
) -> Option<ElementRef<'a>> {
    select_all(doc, tag)
        .into_iter()
        .find(|el| el.value().attr(attr).is_some_and(&predicate))
}

/// First `a` element whose `href` matches `pattern`
pub fn find_link<'a>(doc: &'a Html, pattern: &str) -> Option<ElementRef<'a>> {
    let re = Regex::new(pattern).ok()?;
    find_by_attr(doc, "a", "href", |href| re.is_match(href))
}

/// Concatenated text of an element and its descendants
pub fn text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Whitespace-separated word at `index` of `text`
pub fn nth_word(text: &str, index: usize) -> Option<String> {
    text.split_whitespace().nth(index).map(str::to_string)
}

/// Last whitespace-separated word of `text`
pub fn last_word(text: &str) -> Option<String> {
    text.split_whitespace().last().map(str::to_string)
}
