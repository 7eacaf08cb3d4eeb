//! Newtype wrappers for the string identifiers that flow between modules.
//!
//! All newtypes serialize/deserialize as plain strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }

            /// ASCII case-insensitive comparison against a trimmed raw string.
            pub fn matches(&self, other: &str) -> bool {
                self.0.eq_ignore_ascii_case(other.trim())
            }
        }

        impl Deref for $name {
            type Target = str;
            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }
    };
}

string_newtype!(
    /// A `fa-`-prefixed glyph token such as `fa-arrow-right`.
    IconToken
);

string_newtype!(
    /// Identifier of a glyph in the metadata catalog (the top-level YAML key).
    IconName
);

string_newtype!(
    /// Style family name as spelled in the metadata catalog, e.g. `solid` or `brands`.
    StyleName
);

impl IconToken {
    /// True when the token carries the `fa-` prefix, ignoring ASCII case.
    pub fn has_prefix(&self) -> bool {
        has_fa_prefix(&self.0)
    }
}

pub(crate) fn has_fa_prefix(s: &str) -> bool {
    s.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("fa-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_token_display_and_as_ref() {
        let token = IconToken::new("fa-star");
        assert_eq!(token.to_string(), "fa-star");
        assert_eq!(token.as_str(), "fa-star");
        assert_eq!(AsRef::<str>::as_ref(&token), "fa-star");
    }

    #[test]
    fn icon_name_serializes_as_plain_string() {
        let name = IconName::new("arrow-right");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"arrow-right\"");
        let back: IconName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn style_name_matches_ignores_case() {
        let style = StyleName::from("Solid");
        assert!(style.matches("solid"));
        assert!(style.matches(" SOLID "));
        assert!(!style.matches("regular"));
    }

    #[test]
    fn prefix_detection_is_case_insensitive() {
        assert!(IconToken::new("FA-star").has_prefix());
        assert!(IconToken::new("fa-").has_prefix());
        assert!(!IconToken::new("fas").has_prefix());
        assert!(!IconToken::new("f").has_prefix());
    }

    #[test]
    fn prefix_detection_handles_multibyte_start() {
        assert!(!has_fa_prefix("é-star"));
        assert!(!has_fa_prefix("fé"));
    }
}
