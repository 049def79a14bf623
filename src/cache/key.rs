//! Deterministic cache-key construction
//!
//! Every catalog operation stores its payload under
//! `{operation-prefix}_{parameters}_page_{page}` (the detail operation has no
//! page and uses `film_{slug}`). Key building must be a pure function of
//! (operation, parameters, page): distinct queries never alias the same slot and
//! the same query always reuses its slot. Distinct operation prefixes keep the
//! same literal slug from colliding across operations, and the search keyword is
//! percent-encoded so free text cannot smuggle another key's shape.

/// Key for a search result page
pub fn search(keyword: &str, page: u32) -> String {
    format!("search_{}_page_{}", urlencoding::encode(keyword), page)
}

/// Key for a genre listing page
pub fn genre(genre_slug: &str, page: u32) -> String {
    format!("genre_{}_page_{}", genre_slug, page)
}

/// Key for a country listing page
pub fn country(country_slug: &str, page: u32) -> String {
    format!("country_{}_page_{}", country_slug, page)
}

/// Key for a category listing page
pub fn category(category_slug: &str, page: u32) -> String {
    format!("category_{}_page_{}", category_slug, page)
}

/// Key for a single film detail record
pub fn film(slug: &str) -> String {
    format!("film_{}", slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_query_reuses_same_slot() {
        assert_eq!(genre("hanh-dong", 1), genre("hanh-dong", 1));
        assert_eq!(search("người nhện", 2), search("người nhện", 2));
    }

    #[test]
    fn test_pages_do_not_collide() {
        assert_ne!(genre("hanh-dong", 1), genre("hanh-dong", 2));
        assert_ne!(category("phim-bo", 1), category("phim-bo", 2));
    }

    #[test]
    fn test_same_slug_across_operations_does_not_collide() {
        // "phim-bo" is both a category slug and a plausible genre slug
        assert_ne!(category("phim-bo", 1), genre("phim-bo", 1));
        assert_ne!(country("hai", 1), genre("hai", 1));
    }

    #[test]
    fn test_search_keyword_is_percent_encoded() {
        let key = search("người nhện", 1);
        assert!(!key.contains(' '), "raw spaces must not appear in keys: {}", key);
        assert_eq!(key, format!("search_{}_page_1", urlencoding::encode("người nhện")));
    }

    #[test]
    fn test_distinct_keywords_do_not_collide() {
        assert_ne!(search("one", 1), search("two", 1));
        // the page suffix is fixed-position, so an underscore-bearing keyword
        // cannot alias another keyword's page
        assert_ne!(search("a_page_2", 1), search("a", 2));
    }

    #[test]
    fn test_film_key_has_no_page_suffix() {
        assert_eq!(film("tay-du-ky"), "film_tay-du-ky");
    }
}
