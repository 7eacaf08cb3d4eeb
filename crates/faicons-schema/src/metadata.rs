//! Icon metadata catalog (`icons.yml`) parsing, grouped by style.

use crate::types::{IconName, StyleName};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::path::Path;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::debug;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),
    #[error("failed to read metadata file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse icon metadata: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("metadata load cancelled")]
    Cancelled,
}

/// One glyph as exposed to consumers, with every optional list defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    pub name: IconName,
    pub label: Option<String>,
    pub unicode: Option<String>,
    pub changes: Vec<String>,
    pub search_terms: Vec<String>,
    pub aliases: Vec<String>,
    pub alias_unicodes_composite: Vec<String>,
    pub voted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleGroup {
    pub style: StyleName,
    pub icons: Vec<IconRecord>,
}

/// Icon records keyed by style, in first-seen style order.
///
/// Style lookups ignore ASCII case only; non-ASCII letters must match exactly.
/// The spelling of the first occurrence is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleGroups {
    groups: Vec<StyleGroup>,
}

impl StyleGroups {
    /// Records for `style`, compared with ASCII case folding.
    pub fn get(&self, style: &str) -> Option<&[IconRecord]> {
        self.groups
            .iter()
            .find(|g| g.style.matches(style))
            .map(|g| g.icons.as_slice())
    }

    /// Icon `name` within `style`; both compared with ASCII case folding.
    pub fn find_icon(&self, style: &str, name: &str) -> Option<&IconRecord> {
        self.get(style)?.iter().find(|r| r.name.matches(name))
    }

    pub fn contains_style(&self, style: &str) -> bool {
        self.get(style).is_some()
    }

    pub fn styles(&self) -> impl Iterator<Item = &StyleName> {
        self.groups.iter().map(|g| &g.style)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StyleGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of records across all groups; an icon in two styles counts twice.
    pub fn total_icons(&self) -> usize {
        self.groups.iter().map(|g| g.icons.len()).sum()
    }

    fn push(&mut self, style: &str, record: IconRecord) {
        if let Some(group) = self.groups.iter_mut().find(|g| g.style.matches(style)) {
            group.icons.push(record);
            return;
        }
        self.groups.push(StyleGroup {
            style: StyleName::new(style),
            icons: vec![record],
        });
    }
}

impl<'a> IntoIterator for &'a StyleGroups {
    type Item = &'a StyleGroup;
    type IntoIter = std::slice::Iter<'a, StyleGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl Serialize for StyleGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.style, &group.icons)?;
        }
        map.end()
    }
}

// Raw catalog layout. Unknown keys (svg, free, ...) are ignored.

#[derive(Debug, Default, Deserialize)]
struct IconEntry {
    #[serde(default)]
    aliases: Option<AliasesEntry>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    changes: Vec<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    label: Option<String>,
    #[serde(default)]
    search: Option<SearchEntry>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    styles: Vec<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    unicode: Option<String>,
    #[serde(default)]
    voted: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct AliasesEntry {
    #[serde(default, deserialize_with = "lenient::string_list")]
    names: Vec<String>,
    #[serde(default)]
    unicodes: Option<UnicodesEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct UnicodesEntry {
    #[serde(default, deserialize_with = "lenient::string_list")]
    composite: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchEntry {
    #[serde(default, deserialize_with = "lenient::string_list")]
    terms: Vec<String>,
}

impl IconEntry {
    fn into_record(self, name: &str) -> IconRecord {
        let (aliases, composite) = match self.aliases {
            Some(a) => (a.names, a.unicodes.map(|u| u.composite).unwrap_or_default()),
            None => (Vec::new(), Vec::new()),
        };
        IconRecord {
            name: IconName::new(name),
            label: self.label,
            unicode: self.unicode,
            changes: self.changes,
            search_terms: self.search.map(|s| s.terms).unwrap_or_default(),
            aliases,
            alias_unicodes_composite: composite,
            voted: self.voted.unwrap_or(false),
        }
    }
}

/// Catalog scalars are not always quoted (`changes: [4.4]`, icon `0`), so any
/// scalar is accepted and rendered as text.
mod lenient {
    use super::{de, Deserialize, Deserializer, Value};

    pub(super) fn scalar_text(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Tagged(t) => scalar_text(&t.value),
            Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
        }
    }

    pub(super) fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        match Option::<Value>::deserialize(d)? {
            None | Some(Value::Null) => Ok(None),
            Some(v) => scalar_text(&v)
                .map(Some)
                .ok_or_else(|| de::Error::custom("expected a scalar value")),
        }
    }

    pub(super) fn string_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        match Option::<Value>::deserialize(d)? {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Sequence(items)) => items
                .iter()
                .filter(|v| !v.is_null())
                .map(|v| {
                    scalar_text(v).ok_or_else(|| de::Error::custom("expected a list of scalars"))
                })
                .collect(),
            Some(v) => scalar_text(&v)
                .map(|s| vec![s])
                .ok_or_else(|| de::Error::custom("expected a list of scalars")),
        }
    }
}

/// Parse catalog YAML and group every icon under each style it lists.
///
/// Icons with no `styles` are dropped. Blank style names are skipped.
pub fn parse_icons_by_style(yaml: &str) -> Result<StyleGroups, MetadataError> {
    if yaml.trim().is_empty() {
        return Err(MetadataError::EmptyInput("YAML content"));
    }

    let root: Option<Mapping> = serde_yaml::from_str(yaml)?;
    let mut groups = StyleGroups::default();
    let Some(root) = root else {
        return Ok(groups);
    };

    let mut dropped = 0usize;
    for (key, value) in root {
        let Some(name) = lenient::scalar_text(&key) else {
            debug!("skipping icon with non-scalar key: {key:?}");
            continue;
        };
        if value.is_null() {
            continue;
        }

        let mut entry: IconEntry = serde_yaml::from_value(value)?;
        if entry.styles.is_empty() {
            dropped += 1;
            continue;
        }

        let styles = std::mem::take(&mut entry.styles);
        let record = entry.into_record(&name);
        for style in styles.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
            groups.push(style, record.clone());
        }
    }

    debug!(
        "parsed icon metadata: {} styles, {} records, {dropped} icons without styles",
        groups.len(),
        groups.total_icons()
    );
    Ok(groups)
}

/// Read a catalog file and parse it with [`parse_icons_by_style`].
///
/// Cancellation is observed once, after the whole file has been read.
pub async fn parse_icons_by_style_file(
    path: impl AsRef<Path>,
    cancel: &CancellationToken,
) -> Result<StyleGroups, MetadataError> {
    let path = path.as_ref();
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(MetadataError::EmptyInput("file path"));
    }

    debug!("reading icon metadata from {}", path.display());
    let content = tokio::fs::read_to_string(path).await?;

    if cancel.is_cancelled() {
        return Err(MetadataError::Cancelled);
    }

    parse_icons_by_style(&content)
}
