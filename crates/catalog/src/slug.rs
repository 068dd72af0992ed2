//! 由商品名称生成 URL 安全的 slug

/// 小写化，去掉 `[a-z0-9 -]` 以外的字符，空白与连字符连续出现时合并为一个 `-`，并去掉首尾的 `-`。
///
/// ```
/// assert_eq!(catalog::slugify("Home & Kitchen"), "home-kitchen");
/// assert_eq!(catalog::slugify("  --Coffee   Maker Pro-- "), "coffee-maker-pro");
/// assert_eq!(catalog::slugify("★★★"), "");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.to_lowercase().chars() {
        match ch {
            'a'..='z' | '0'..='9' => {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(ch);
            }
            ' ' | '-' => pending_hyphen = true,
            _ => {}
        }
    }

    slug
}

/// 非空，仅包含小写字母、数字和单个连字符，且不以连字符开头或结尾
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_names() {
        assert_eq!(slugify("Wireless Bluetooth Headphones"), "wireless-bluetooth-headphones");
        assert_eq!(slugify("Organic Cotton T-Shirt"), "organic-cotton-t-shirt");
        assert_eq!(slugify("Coffee Maker Pro"), "coffee-maker-pro");
    }

    #[test]
    fn test_strips_and_collapses() {
        assert_eq!(slugify("Home & Kitchen"), "home-kitchen");
        assert_eq!(slugify("a - b"), "a-b");
        assert_eq!(slugify("a---b"), "a-b");
        assert_eq!(slugify("-leading and trailing-"), "leading-and-trailing");
        assert_eq!(slugify("Crème Brûlée 2"), "crme-brle-2");
    }

    #[test]
    fn test_non_space_whitespace_is_stripped_not_joined() {
        assert_eq!(slugify("tab\tseparated"), "tabseparated");
        assert_eq!(slugify("line\nbreak"), "linebreak");
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(" - - "), "");
    }

    #[test]
    fn test_output_is_valid_and_idempotent() {
        let names = [
            "Wireless Charging Pad",
            "  Sports & Fitness  ",
            "100% Organic -- Cotton",
            "UPPER lower 123",
            "x",
        ];
        for name in names {
            let slug = slugify(name);
            assert!(is_valid_slug(&slug), "{name:?} -> {slug:?}");
            assert_eq!(slugify(&slug), slug);
            assert_eq!(slugify(name), slug);
        }
    }

    #[test]
    fn test_all_short_punctuation_and_whitespace_mixes() {
        let alphabet: Vec<char> = (0u8..=0x7f)
            .map(char::from)
            .filter(|c| c.is_ascii_punctuation() || c.is_ascii_whitespace())
            .chain(['a', 'Z', '7', 'é'])
            .collect();

        let mut checked = 0;
        for &a in &alphabet {
            for &b in &alphabet {
                for &c in &alphabet {
                    for name in [format!("{a}{b}{c}"), format!("x{a}{b}{c}y"), format!("{a} {b}-{c}")] {
                        let slug = slugify(&name);
                        assert!(slug.is_empty() || is_valid_slug(&slug), "{name:?} -> {slug:?}");
                        assert_eq!(slugify(&slug), slug, "{name:?}");
                        checked += 1;
                    }
                }
            }
        }
        assert_eq!(checked, alphabet.len().pow(3) * 3);
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("yoga-mat"));
        assert!(is_valid_slug("a1"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-yoga"));
        assert!(!is_valid_slug("yoga-"));
        assert!(!is_valid_slug("yoga--mat"));
        assert!(!is_valid_slug("Yoga"));
    }
}
