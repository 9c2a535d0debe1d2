//! Front-matter parsing
//!
//! Notes carry a small YAML-like header between two `---` lines. Only the
//! subset that knowledge-base exports actually use is understood: scalar
//! strings, booleans, quoted strings and single-level block lists.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Keys every parsed front-matter starts out with
const DEFAULT_LIST_KEYS: [&str; 2] = ["aliases", "tags"];
const DEFAULT_STRING_KEYS: [&str; 3] = ["create_date", "update_date", "uid"];

/// A single front-matter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FmValue {
    String(String),
    Bool(bool),
    List(Vec<String>),
}

/// What to do when a key is used both as a scalar and as a list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListCoercion {
    /// Replace the scalar with a fresh list (compatible with existing notes)
    #[default]
    Coerce,
    /// Reject the header as malformed
    Strict,
}

/// Front-matter parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrontMatterError {
    #[error("key `{key}` is used as both a scalar and a list (line {line})")]
    DivergentKey { key: String, line: usize },
}

/// Parsed front-matter of a note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    fields: IndexMap<String, FmValue>,
}

impl Default for FrontMatter {
    fn default() -> Self {
        let mut fields = IndexMap::new();
        for key in DEFAULT_LIST_KEYS {
            fields.insert(key.to_string(), FmValue::List(Vec::new()));
        }
        for key in DEFAULT_STRING_KEYS {
            fields.insert(key.to_string(), FmValue::String(String::new()));
        }
        Self { fields }
    }
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// `None` means the text has no header at all; the whole text is then
    /// returned unchanged as the body.
    pub fn parse(content: &str) -> (Option<Self>, &str) {
        Self::parse_with(content, ListCoercion::default())
    }

    /// Same as [`FrontMatter::parse`] with an explicit list coercion policy
    pub fn parse_with(content: &str, policy: ListCoercion) -> (Option<Self>, &str) {
        let Some((header, body)) = split_block(content) else {
            return (None, content);
        };

        match Self::parse_block(header, policy) {
            Ok(fm) => (Some(fm), body),
            Err(e) => {
                // Malformed metadata must not cost us the note
                tracing::warn!("Failed to parse front-matter, using defaults: {}", e);
                (Some(Self::default()), content)
            }
        }
    }

    /// Parse the lines between the two `---` delimiters
    pub fn parse_block(block: &str, policy: ListCoercion) -> Result<Self, FrontMatterError> {
        let mut fm = Self::default();
        let lines: Vec<&str> = block.lines().collect();
        let mut current_key: Option<&str> = None;

        for (idx, line) in lines.iter().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let indent = line.len() - line.trim_start().len();
            // File line: the opening `---` is line 1
            let line_no = idx + 2;

            if let Some(item) = trimmed.strip_prefix('-') {
                match current_key {
                    Some(key) => fm.push_item(key, item.trim(), policy, line_no)?,
                    None => tracing::debug!("Ignoring list item before any key: {:?}", trimmed),
                }
                continue;
            }

            let Some((key, value)) = trimmed.split_once(':') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            let value = value.trim();
            tracing::trace!(key, indent, "front-matter key");
            current_key = Some(key);

            let parsed = if !value.is_empty() {
                parse_scalar(value)
            } else if lines
                .get(idx + 1)
                .is_some_and(|next| next.trim().starts_with('-'))
            {
                FmValue::List(Vec::new())
            } else {
                FmValue::String(String::new())
            };

            // Once items are appended the key stays a list
            let holds_items =
                matches!(fm.fields.get(key), Some(FmValue::List(items)) if !items.is_empty());
            if holds_items && !matches!(parsed, FmValue::List(_)) {
                let placeholder = matches!(&parsed, FmValue::String(s) if s.is_empty());
                if !placeholder && policy == ListCoercion::Strict {
                    return Err(FrontMatterError::DivergentKey {
                        key: key.to_string(),
                        line: line_no,
                    });
                }
                tracing::debug!(
                    "Keeping list for key `{}`, ignoring scalar at line {}",
                    key,
                    line_no
                );
                continue;
            }
            fm.fields.insert(key.to_string(), parsed);
        }

        Ok(fm)
    }

    fn push_item(
        &mut self,
        key: &str,
        item: &str,
        policy: ListCoercion,
        line: usize,
    ) -> Result<(), FrontMatterError> {
        let slot = self
            .fields
            .entry(key.to_string())
            .or_insert_with(|| FmValue::List(Vec::new()));

        // An empty string is only the placeholder left by `key:`
        let placeholder = match slot {
            FmValue::List(items) => {
                items.push(item.to_string());
                return Ok(());
            }
            FmValue::String(s) => s.is_empty(),
            FmValue::Bool(_) => false,
        };

        if !placeholder {
            if policy == ListCoercion::Strict {
                return Err(FrontMatterError::DivergentKey {
                    key: key.to_string(),
                    line,
                });
            }
            tracing::debug!("Coercing scalar key `{}` into a list at line {}", key, line);
        }
        *slot = FmValue::List(vec![item.to_string()]);
        Ok(())
    }

    /// Raw value for a key
    pub fn get(&self, key: &str) -> Option<&FmValue> {
        self.fields.get(key)
    }

    /// String value for a key; `None` if absent or not a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.fields.get(key)? {
            FmValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean value for a key; `None` if absent or not a boolean
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.fields.get(key)? {
            FmValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// List value for a key; `None` if absent or not a list
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        match self.fields.get(key)? {
            FmValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// All keys and values in declaration order (defaults first)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FmValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Booleans are case-insensitive; one layer of matching quotes is stripped
fn parse_scalar(value: &str) -> FmValue {
    if value.eq_ignore_ascii_case("true") {
        return FmValue::Bool(true);
    }
    if value.eq_ignore_ascii_case("false") {
        return FmValue::Bool(false);
    }
    FmValue::String(unquote(value).to_string())
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Split `---`-delimited header from body. Both delimiters must be lines of
/// their own, the opening one on the very first line. Blank lines right after
/// the closing delimiter belong to neither part.
fn split_block(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim() != "---" || !first.ends_with('\n') {
        return None;
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        if line.trim() == "---" {
            let header = &content[header_start..offset];
            let mut body_start = offset + line.len();
            for rest in content[body_start..].split_inclusive('\n') {
                if !rest.trim().is_empty() || !rest.ends_with('\n') {
                    break;
                }
                body_start += rest.len();
            }
            return Some((header, &content[body_start..]));
        }
        offset += line.len();
    }

    None
}
