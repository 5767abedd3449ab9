use serde::Serialize;
use serde_json::Value;

use crate::error::RecordError;

/// Topic labels attached to a submission's problem.
///
/// Upstream data is not guaranteed to carry a well-formed list, so a record
/// keeps the raw text when it cannot be read instead of failing the batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TagList {
    Parsed(Vec<String>),
    Malformed(String),
}

impl Default for TagList {
    fn default() -> Self {
        TagList::Parsed(Vec::new())
    }
}

impl From<Vec<String>> for TagList {
    fn from(tags: Vec<String>) -> Self {
        TagList::Parsed(tags)
    }
}

impl TagList {
    /// Reads a tag list from a raw JSON value.
    ///
    /// Accepts an array of strings or a list literal string. A missing or
    /// null value is an empty list.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => TagList::default(),
            Some(Value::Array(items)) => {
                let tags: Option<Vec<String>> = items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect();
                match tags {
                    Some(tags) => TagList::Parsed(tags),
                    None => TagList::Malformed(Value::Array(items.clone()).to_string()),
                }
            }
            Some(Value::String(text)) => match parse_tag_literal(text) {
                Ok(tags) => TagList::Parsed(tags),
                Err(_) => TagList::Malformed(text.clone()),
            },
            Some(other) => TagList::Malformed(other.to_string()),
        }
    }

    /// The parsed tags, or the reason they are unusable
    pub fn tags(&self) -> Result<&[String], RecordError> {
        match self {
            TagList::Parsed(tags) => Ok(tags),
            TagList::Malformed(raw) => Err(RecordError::MalformedTags(raw.clone())),
        }
    }
}

/// Parses a list literal such as `['dp', "greedy"]`.
///
/// An empty or whitespace-only string is an empty list.
pub fn parse_tag_literal(text: &str) -> Result<Vec<String>, RecordError> {
    let malformed = || RecordError::MalformedTags(text.to_string());

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(malformed)?;

    let mut tags = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let quote = match chars.next() {
            None => break,
            Some(q @ ('\'' | '"')) => q,
            Some(_) => return Err(malformed()),
        };

        let mut tag = String::new();
        loop {
            match chars.next() {
                None => return Err(malformed()),
                Some('\\') => tag.push(chars.next().ok_or_else(malformed)?),
                Some(c) if c == quote => break,
                Some(c) => tag.push(c),
            }
        }
        tags.push(tag);

        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        match chars.next() {
            None => break,
            Some(',') => continue,
            Some(_) => return Err(malformed()),
        }
    }

    Ok(tags)
}
