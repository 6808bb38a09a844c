// src/shared/slug.rs
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_\s-]").expect("static slug regex"));
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("static slug regex"));
static EDGE_HYPHENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-+|-+$").expect("static slug regex"));

/// Turns free text into a URL-safe slug.
///
/// Lowercases and trims, drops everything that is not an ASCII word character,
/// whitespace or hyphen, collapses whitespace/underscore/hyphen runs into a
/// single hyphen and strips hyphens from both ends.
pub fn generate_slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = DISALLOWED.replace_all(lowered.trim(), "");
    let hyphenated = SEPARATORS.replace_all(&stripped, "-");
    EDGE_HYPHENS.replace_all(&hyphenated, "").into_owned()
}

/// Returns `base` if unused, otherwise the first free `base-1`, `base-2`, ...
///
/// Two creates racing on the same title can both observe the same snapshot and
/// pick the same suffix; the article counts involved keep that acceptable.
pub fn generate_unique_slug<S: AsRef<str>>(base: &str, existing: &[S]) -> String {
    let taken: HashSet<&str> = existing.iter().map(|s| s.as_ref()).collect();

    if !taken.contains(base) {
        return base.to_string();
    }

    let mut counter: u64 = 1;
    loop {
        let candidate = format!("{}-{}", base, counter);
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_slug_punctuation_and_underscores() {
        assert_eq!(generate_slug("Hello, World!  Foo_Bar"), "hello-world-foo-bar");
    }

    #[test]
    fn test_generate_slug_trims_edge_hyphens() {
        assert_eq!(generate_slug("  --Rust & WebAssembly--  "), "rust-webassembly");
    }

    #[test]
    fn test_generate_slug_collapses_mixed_separators() {
        assert_eq!(generate_slug("a _ - b\t\nc"), "a-b-c");
    }

    #[test]
    fn test_generate_slug_drops_non_ascii_letters() {
        assert_eq!(generate_slug("Café Déjà Vu"), "caf-dj-vu");
    }

    #[test]
    fn test_generate_slug_all_punctuation_is_empty() {
        assert_eq!(generate_slug("!!! ???"), "");
    }

    #[test]
    fn test_generate_slug_is_idempotent() {
        let once = generate_slug("Building a CV site, part 2");
        assert_eq!(generate_slug(&once), once);
    }

    #[test]
    fn test_unique_slug_appends_next_free_suffix() {
        assert_eq!(generate_unique_slug("post", &["post", "post-1"]), "post-2");
    }

    #[test]
    fn test_unique_slug_without_collision() {
        assert_eq!(generate_unique_slug("new-post", &["post"]), "new-post");
    }

    #[test]
    fn test_unique_slug_fills_gaps() {
        let existing = vec!["post".to_string(), "post-2".to_string()];
        assert_eq!(generate_unique_slug("post", &existing), "post-1");
    }

    #[test]
    fn test_unique_slug_with_empty_existing_set() {
        let existing: Vec<String> = Vec::new();
        assert_eq!(generate_unique_slug("post", &existing), "post");
    }
}
