//! Icon class strings, icon names, and icon metadata for Font Awesome consumers.
//!
//! This crate defines the schema layer: enumerated icon options and their CSS
//! classes (`IconOptions`, `build_classes`), the class joiner (`ClassBuilder`),
//! icon name normalization (`normalize_icon_name`), shorthand descriptor
//! resolution (`resolve_icon`), and the metadata catalog parser that groups icon
//! records by style (`parse_icons_by_style`).

pub mod classes;
pub mod metadata;
pub mod normalize;
pub mod options;
pub mod resolve;
pub mod types;

pub use classes::{build_classes, join_classes, ClassBuilder};
pub use metadata::{
    parse_icons_by_style, parse_icons_by_style_file, IconRecord, MetadataError, StyleGroup,
    StyleGroups,
};
pub use normalize::{normalize_icon_name, FALLBACK_ICON_TOKEN};
pub use options::{
    IconAnimation, IconFlip, IconOptions, IconPull, IconRotation, IconSize, IconStyle,
    StackLayerSize,
};
pub use resolve::{icon, resolve_icon, ResolveError, ResolvedIcon, StylePrefix};
pub use types::{IconName, IconToken, StyleName};
