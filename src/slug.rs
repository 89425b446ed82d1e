use regex::Regex;
use std::sync::OnceLock;

/// Lowercase `title`, collapse every run outside `[a-z0-9]` to one hyphen,
/// and trim hyphens from both ends.
pub fn slugify(title: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap());
    let lowered = title.to_lowercase();
    re.replace_all(&lowered, "-").trim_matches('-').to_string()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    const TITLES: &[&str] = &[
        "My Site!",
        "  Leading and trailing  ",
        "---already-slugged---",
        "Café & Crème Brûlée",
        "Podcast: Episode #42 (LIVE)",
        "UPPER lower 123",
        "",
        "!!!",
        "日本語のタイトル",
        "a--b__c",
    ];

    fn is_well_formed(slug: &str) -> bool {
        slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            && !slug.starts_with('-')
            && !slug.ends_with('-')
            && !slug.contains("--")
    }

    #[test]
    fn known_titles() {
        assert_eq!(slugify("My Site!"), "my-site");
        assert_eq!(slugify("Podcast: Episode #42 (LIVE)"), "podcast-episode-42-live");
        assert_eq!(slugify("Café & Crème"), "caf-cr-me");
        assert_eq!(slugify("a--b__c"), "a-b-c");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn slugs_are_well_formed() {
        for title in TITLES {
            let slug = slugify(title);
            assert!(is_well_formed(&slug), "{:?} -> {:?}", title, slug);
        }
    }

    #[test]
    fn slugify_is_idempotent() {
        for title in TITLES {
            let once = slugify(title);
            assert_eq!(slugify(&once), once, "title {:?}", title);
        }
    }
}
