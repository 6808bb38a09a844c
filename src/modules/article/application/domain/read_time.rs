use regex::Regex;
use std::sync::LazyLock;

pub const WORDS_PER_MINUTE: usize = 200;

static TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static tag regex"));

/// Estimated reading time of an HTML body, e.g. `"3 min read"`. Never below one minute.
pub fn calculate_read_time(html: &str) -> String {
    let text = TAGS.replace_all(html, " ");
    let words = text.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}
