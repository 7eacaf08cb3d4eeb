use crate::types::has_fa_prefix;

/// Token returned when a name contains nothing but separators.
pub const FALLBACK_ICON_TOKEN: &str = "fa-question";

/// Normalize a free-form icon name into a `fa-kebab-case` token.
///
/// Blank input is returned unchanged. Input that already starts with `fa-`
/// (any case) is only trimmed and lowercased. Everything else is kebab-cased:
/// whitespace, `_` and `.` become `-`, a hyphen is inserted at each
/// lower-to-upper boundary, and leading/trailing hyphens are stripped.
pub fn normalize_icon_name(icon: &str) -> String {
    if icon.trim().is_empty() {
        return icon.to_owned();
    }

    let trimmed = icon.trim();
    if has_fa_prefix(trimmed) {
        return trimmed.to_lowercase();
    }

    let mut out = String::with_capacity(trimmed.len() + 4);
    let mut prev: Option<char> = None;
    for c in trimmed.chars() {
        if c.is_whitespace() || c == '_' || c == '.' {
            out.push('-');
        } else if c.is_uppercase() {
            if prev.is_some_and(char::is_lowercase) {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_lowercase());
        }
        prev = Some(c);
    }

    let text = out.trim_matches('-');
    if text.is_empty() {
        FALLBACK_ICON_TOKEN.to_owned()
    } else {
        format!("fa-{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_becomes_kebab() {
        assert_eq!(normalize_icon_name("ArrowRight"), "fa-arrow-right");
        assert_eq!(normalize_icon_name("circleXmark"), "fa-circle-xmark");
    }

    #[test]
    fn separators_become_hyphens() {
        assert_eq!(normalize_icon_name("arrow_right"), "fa-arrow-right");
        assert_eq!(normalize_icon_name("arrow.right"), "fa-arrow-right");
        assert_eq!(normalize_icon_name("arrow right"), "fa-arrow-right");
    }

    #[test]
    fn prefixed_input_is_only_case_folded() {
        assert_eq!(normalize_icon_name("fa-Arrow-Right"), "fa-arrow-right");
        assert_eq!(normalize_icon_name("  FA-Custom "), "fa-custom");
        assert_eq!(normalize_icon_name("fa-Arrow_Right"), "fa-arrow_right");
    }

    #[test]
    fn blank_input_is_returned_unchanged() {
        assert_eq!(normalize_icon_name(""), "");
        assert_eq!(normalize_icon_name("  "), "  ");
        assert_eq!(normalize_icon_name("\t\n"), "\t\n");
    }

    #[test]
    fn separator_only_input_falls_back() {
        assert_eq!(normalize_icon_name("---"), FALLBACK_ICON_TOKEN);
        assert_eq!(normalize_icon_name("___"), "fa-question");
        assert_eq!(normalize_icon_name("._ -"), "fa-question");
    }

    #[test]
    fn leading_and_trailing_separators_are_stripped() {
        assert_eq!(normalize_icon_name("_star_"), "fa-star");
        assert_eq!(normalize_icon_name("-House-"), "fa-house");
    }

    #[test]
    fn consecutive_capitals_stay_together() {
        assert_eq!(normalize_icon_name("HTML5"), "fa-html5");
        assert_eq!(normalize_icon_name("myHTMLIcon"), "fa-my-htmlicon");
    }

    #[test]
    fn digits_and_symbols_pass_through() {
        assert_eq!(normalize_icon_name("Rotate90"), "fa-rotate90");
        assert_eq!(normalize_icon_name("plus+minus"), "fa-plus+minus");
    }

    #[test]
    fn normalization_is_idempotent() {
        for input in [
            "ArrowRight",
            "arrow_right",
            "  FA-Custom ",
            "---",
            "myHTMLIcon",
            "a.b c_d",
            "Ärger",
        ] {
            let once = normalize_icon_name(input);
            assert_eq!(normalize_icon_name(&once), once, "input: {input:?}");
        }
    }
}
