//! Static slug taxonomies for the OPhim catalog
//!
//! Genre, country, and category slugs the upstream API routes on, paired with
//! their Vietnamese display names. The client passes slugs through verbatim, so
//! these tables are a convenience for consumers (CLI listings, name lookup),
//! not an input filter.

/// A slug/display-name pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Taxon {
    pub slug: &'static str,
    pub name: &'static str,
}

/// Genres served by `/v1/api/the-loai/{slug}`
pub static GENRES: [Taxon; 21] = [
    Taxon { slug: "hanh-dong", name: "Hành Động" },
    Taxon { slug: "phieu-luu", name: "Phiêu Lưu" },
    Taxon { slug: "hoat-hinh", name: "Hoạt Hình" },
    Taxon { slug: "hai", name: "Hài" },
    Taxon { slug: "hinh-su", name: "Hình Sự" },
    Taxon { slug: "tai-lieu", name: "Tài Liệu" },
    Taxon { slug: "chinh-kich", name: "Chính Kịch" },
    Taxon { slug: "gia-dinh", name: "Gia Đình" },
    Taxon { slug: "gia-tuong", name: "Giả Tưởng" },
    Taxon { slug: "lich-su", name: "Lịch Sử" },
    Taxon { slug: "kinh-di", name: "Kinh Dị" },
    Taxon { slug: "nhac", name: "Nhạc" },
    Taxon { slug: "bi-an", name: "Bí Ẩn" },
    Taxon { slug: "lang-man", name: "Lãng Mạn" },
    Taxon { slug: "khoa-hoc-vien-tuong", name: "Khoa Học Viễn Tưởng" },
    Taxon { slug: "gay-can", name: "Gây Cấn" },
    Taxon { slug: "chien-tranh", name: "Chiến Tranh" },
    Taxon { slug: "tam-ly", name: "Tâm Lý" },
    Taxon { slug: "tinh-cam", name: "Tình Cảm" },
    Taxon { slug: "co-trang", name: "Cổ Trang" },
    Taxon { slug: "mien-tay", name: "Miền Tây" },
];

/// Countries served by `/v1/api/quoc-gia/{slug}`
pub static COUNTRIES: [Taxon; 16] = [
    Taxon { slug: "au-my", name: "Âu Mỹ" },
    Taxon { slug: "anh", name: "Anh" },
    Taxon { slug: "trung-quoc", name: "Trung Quốc" },
    Taxon { slug: "indonesia", name: "Indonesia" },
    Taxon { slug: "viet-nam", name: "Việt Nam" },
    Taxon { slug: "phap", name: "Pháp" },
    Taxon { slug: "hong-kong", name: "Hồng Kông" },
    Taxon { slug: "han-quoc", name: "Hàn Quốc" },
    Taxon { slug: "nhat-ban", name: "Nhật Bản" },
    Taxon { slug: "thai-lan", name: "Thái Lan" },
    Taxon { slug: "dai-loan", name: "Đài Loan" },
    Taxon { slug: "nga", name: "Nga" },
    Taxon { slug: "ha-lan", name: "Hà Lan" },
    Taxon { slug: "philippines", name: "Philippines" },
    Taxon { slug: "an-do", name: "Ấn Độ" },
    Taxon { slug: "quoc-gia-khac", name: "Quốc gia khác" },
];

/// Categories served by `/v1/api/danh-sach/{slug}`
pub static CATEGORIES: [Taxon; 13] = [
    Taxon { slug: "phim-moi", name: "Phim Mới" },
    Taxon { slug: "phim-bo", name: "Phim Bộ" },
    Taxon { slug: "phim-le", name: "Phim Lẻ" },
    Taxon { slug: "tv-shows", name: "TV Shows" },
    Taxon { slug: "hoat-hinh", name: "Hoạt Hình" },
    Taxon { slug: "phim-vietsub", name: "Phim Vietsub" },
    Taxon { slug: "phim-thuyet-minh", name: "Phim Thuyết Minh" },
    Taxon { slug: "phim-long-tien", name: "Phim Lồng Tiếng" },
    Taxon { slug: "phim-bo-dang-chieu", name: "Phim Bộ Đang Chiếu" },
    Taxon { slug: "phim-bo-hoan-thanh", name: "Phim Bộ Hoàn Thành" },
    Taxon { slug: "phim-sap-chieu", name: "Phim Sắp Chiếu" },
    Taxon { slug: "subteam", name: "Subteam" },
    Taxon { slug: "phim-chieu-rap", name: "Phim Chiếu Rạp" },
];

/// Display name for a genre slug, if known
pub fn genre_name(slug: &str) -> Option<&'static str> {
    GENRES.iter().find(|t| t.slug == slug).map(|t| t.name)
}

/// Display name for a country slug, if known
pub fn country_name(slug: &str) -> Option<&'static str> {
    COUNTRIES.iter().find(|t| t.slug == slug).map(|t| t.name)
}

/// Display name for a category slug, if known
pub fn category_name(slug: &str) -> Option<&'static str> {
    CATEGORIES.iter().find(|t| t.slug == slug).map(|t| t.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_lookup() {
        assert_eq!(genre_name("hanh-dong"), Some("Hành Động"));
        assert_eq!(genre_name("khoa-hoc-vien-tuong"), Some("Khoa Học Viễn Tưởng"));
        assert_eq!(genre_name("khong-ton-tai"), None);
    }

    #[test]
    fn test_country_lookup() {
        assert_eq!(country_name("han-quoc"), Some("Hàn Quốc"));
        assert_eq!(country_name("quoc-gia-khac"), Some("Quốc gia khác"));
        assert_eq!(country_name("atlantis"), None);
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(category_name("phim-chieu-rap"), Some("Phim Chiếu Rạp"));
        assert_eq!(category_name("tv-shows"), Some("TV Shows"));
        assert_eq!(category_name("phim-4d"), None);
    }

    #[test]
    fn test_slugs_are_unique_within_each_table() {
        for table in [&GENRES[..], &COUNTRIES[..], &CATEGORIES[..]] {
            for (i, a) in table.iter().enumerate() {
                for b in &table[i + 1..] {
                    assert_ne!(a.slug, b.slug, "duplicate slug {}", a.slug);
                }
            }
        }
    }

    #[test]
    fn test_hoat_hinh_exists_as_both_genre_and_category() {
        // same literal slug on two routes; cache keys must keep them apart
        assert!(genre_name("hoat-hinh").is_some());
        assert!(category_name("hoat-hinh").is_some());
    }
}
