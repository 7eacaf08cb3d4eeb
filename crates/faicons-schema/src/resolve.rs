//! Shorthand icon descriptor resolution.
//!
//! A descriptor such as `"far arrow-right"` or `"fa-star fas"` is resolved into a
//! canonical `"<style-prefix> <icon-token>"` pair.

use crate::normalize::FALLBACK_ICON_TOKEN;
use crate::options::IconStyle;
use crate::types::{has_fa_prefix, IconToken};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("icon descriptor must not be empty")]
    EmptyDescriptor,
}

/// Short style prefix used in class attributes (`fas`, `far`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StylePrefix {
    Light,
    Regular,
    Solid,
    Brands,
    Thin,
    Duotone,
}

impl StylePrefix {
    pub const ALL: &'static [StylePrefix] = &[
        StylePrefix::Light,
        StylePrefix::Regular,
        StylePrefix::Solid,
        StylePrefix::Brands,
        StylePrefix::Thin,
        StylePrefix::Duotone,
    ];

    /// Applied when neither the descriptor nor the caller names a style.
    pub const DEFAULT: StylePrefix = StylePrefix::Light;

    pub fn as_str(self) -> &'static str {
        match self {
            StylePrefix::Light => "fal",
            StylePrefix::Regular => "far",
            StylePrefix::Solid => "fas",
            StylePrefix::Brands => "fab",
            StylePrefix::Thin => "fat",
            StylePrefix::Duotone => "fad",
        }
    }

    pub fn from_prefix(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for StylePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StylePrefix> for IconStyle {
    fn from(prefix: StylePrefix) -> Self {
        match prefix {
            StylePrefix::Light => IconStyle::Light,
            StylePrefix::Regular => IconStyle::Regular,
            StylePrefix::Solid => IconStyle::Solid,
            StylePrefix::Brands => IconStyle::Brands,
            StylePrefix::Thin => IconStyle::Thin,
            StylePrefix::Duotone => IconStyle::Duotone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedIcon {
    pub style: StylePrefix,
    pub token: IconToken,
}

impl fmt::Display for ResolvedIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.style, self.token)
    }
}

/// Resolve a descriptor into a style prefix and icon token.
///
/// A recognized `style_override` wins over any style embedded in the
/// descriptor; otherwise the first embedded style is used, falling back to
/// [`StylePrefix::DEFAULT`]. Blank or unrecognized overrides are ignored.
pub fn resolve_icon(
    descriptor: &str,
    style_override: Option<&str>,
) -> Result<ResolvedIcon, ResolveError> {
    let descriptor = descriptor.trim();
    if descriptor.is_empty() {
        return Err(ResolveError::EmptyDescriptor);
    }

    let parts: Vec<&str> = descriptor.split_whitespace().collect();

    let embedded_style = parts.iter().find_map(|p| StylePrefix::from_prefix(p));
    let token = parts
        .iter()
        .find(|p| has_fa_prefix(p))
        .map(|p| (*p).to_owned())
        .unwrap_or_else(|| derive_token(&parts));

    let style = style_override
        .map(str::trim)
        .and_then(StylePrefix::from_prefix)
        .or(embedded_style)
        .unwrap_or(StylePrefix::DEFAULT);

    Ok(ResolvedIcon {
        style,
        token: IconToken::new(token),
    })
}

/// Convenience wrapper returning the `"<style> <token>"` string.
pub fn icon(descriptor: &str, style_override: Option<&str>) -> Result<String, ResolveError> {
    resolve_icon(descriptor, style_override).map(|r| r.to_string())
}

/// Build a token from the first plain word; style-only descriptors get the fallback.
fn derive_token(parts: &[&str]) -> String {
    let Some(word) = parts
        .iter()
        .find(|p| StylePrefix::from_prefix(p).is_none())
    else {
        return FALLBACK_ICON_TOKEN.to_owned();
    };
    if has_fa_prefix(word) {
        return (*word).to_owned();
    }
    format!("fa-{}", word.trim_start_matches('-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(descriptor: &str, style: Option<&str>) -> String {
        icon(descriptor, style).unwrap()
    }

    #[test]
    fn fully_qualified_descriptor_is_kept() {
        assert_eq!(resolve("fas fa-star", None), "fas fa-star");
        assert_eq!(resolve("fa-star fab", None), "fab fa-star");
    }

    #[test]
    fn plain_word_gets_default_style() {
        assert_eq!(resolve("star", None), "fal fa-star");
        assert_eq!(resolve("  star  ", None), "fal fa-star");
    }

    #[test]
    fn override_wins_over_default() {
        assert_eq!(resolve("star", Some("fab")), "fab fa-star");
    }

    #[test]
    fn override_wins_over_embedded_style() {
        assert_eq!(resolve("far arrow-right", Some("fas")), "fas fa-arrow-right");
    }

    #[test]
    fn invalid_or_blank_override_is_ignored() {
        assert_eq!(resolve("far star", Some("bogus")), "far fa-star");
        assert_eq!(resolve("far star", Some("   ")), "far fa-star");
        assert_eq!(resolve("star", Some("solid")), "fal fa-star");
    }

    #[test]
    fn override_is_case_insensitive_and_trimmed() {
        assert_eq!(resolve("star", Some(" FAD ")), "fad fa-star");
    }

    #[test]
    fn first_embedded_style_wins() {
        assert_eq!(resolve("far fas star", None), "far fa-star");
    }

    #[test]
    fn embedded_style_is_case_insensitive() {
        assert_eq!(resolve("FAS star", None), "fas fa-star");
    }

    #[test]
    fn first_prefixed_token_wins() {
        assert_eq!(resolve("fa-one fa-two", None), "fal fa-one");
        assert_eq!(resolve("plain fa-star", None), "fal fa-star");
    }

    #[test]
    fn prefixed_token_keeps_its_case() {
        assert_eq!(resolve("FA-Star", None), "fal FA-Star");
    }

    #[test]
    fn leading_hyphens_are_stripped_from_plain_words() {
        assert_eq!(resolve("--star", None), "fal fa-star");
    }

    #[test]
    fn first_plain_word_is_used() {
        assert_eq!(resolve("fas arrow right", None), "fas fa-arrow");
    }

    #[test]
    fn style_only_descriptor_falls_back() {
        assert_eq!(resolve("fas", None), "fas fa-question");
        assert_eq!(resolve("fas far", Some("fab")), "fab fa-question");
    }

    #[test]
    fn blank_descriptor_is_rejected() {
        assert_eq!(resolve_icon("", None), Err(ResolveError::EmptyDescriptor));
        assert_eq!(resolve_icon("   ", None), Err(ResolveError::EmptyDescriptor));
        assert_eq!(
            resolve_icon("\t", Some("fas")),
            Err(ResolveError::EmptyDescriptor)
        );
    }

    #[test]
    fn resolved_icon_exposes_parts() {
        let r = resolve_icon("fad user", None).unwrap();
        assert_eq!(r.style, StylePrefix::Duotone);
        assert_eq!(r.token, "fa-user");
        assert_eq!(IconStyle::from(r.style), IconStyle::Duotone);
    }

    #[test]
    fn style_prefix_lookup() {
        for p in StylePrefix::ALL {
            assert_eq!(StylePrefix::from_prefix(p.as_str()), Some(*p));
        }
        assert_eq!(StylePrefix::from_prefix("FAL"), Some(StylePrefix::Light));
        assert_eq!(StylePrefix::from_prefix("fa"), None);
    }
}
