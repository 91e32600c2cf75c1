use core::fmt::Display;
use core::str::FromStr;

use crate::prelude_internal::*;

/// Turns a flat form key into its path segments.
pub type DecodeKeyFn = fn(&str) -> KeyPath;

/// Joins path segments back into a flat form key.
pub type EncodeKeyFn = fn(&[String]) -> String;

/// The segments of a flat form key, outermost first.
///
/// A key path always holds at least one segment. A key that does not follow a
/// scheme's syntax decodes to a single segment equal to the whole key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Plural)]
#[plural(len, into_iter, into_iter_ref)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// A path made of the key itself.
    pub fn single(key: impl Into<String>) -> Self {
        KeyPath(vec![key.into()])
    }

    /// Returns `None` for an empty segment list.
    pub fn from_segments(segments: Vec<String>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(KeyPath(segments))
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn first(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or_default()
    }

    pub fn is_single(&self) -> bool {
        self.0.len() == 1
    }

    pub fn into_segments(self) -> Vec<String> {
        self.0
    }
}

impl Display for KeyPath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " / ")?;
            }
            write!(f, "{segment:?}")?;
        }
        Ok(())
    }
}

/// The built-in key path syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyScheme {
    /// `a[b[c]]`
    NestedBrackets,
    /// `a[b][c]`
    RepeatedBrackets,
    /// `a.b.c`
    Dotted,
}

impl KeyScheme {
    pub const ALL: [KeyScheme; 3] = [
        KeyScheme::NestedBrackets,
        KeyScheme::RepeatedBrackets,
        KeyScheme::Dotted,
    ];

    pub fn name(self) -> &'static str {
        match self {
            KeyScheme::NestedBrackets => "nested",
            KeyScheme::RepeatedBrackets => "brackets",
            KeyScheme::Dotted => "dots",
        }
    }

    pub fn decoder(self) -> DecodeKeyFn {
        match self {
            KeyScheme::NestedBrackets => decode_nested_brackets,
            KeyScheme::RepeatedBrackets => decode_repeated_brackets,
            KeyScheme::Dotted => decode_dotted,
        }
    }

    pub fn encoder(self) -> EncodeKeyFn {
        match self {
            KeyScheme::NestedBrackets => encode_nested_brackets,
            KeyScheme::RepeatedBrackets => encode_repeated_brackets,
            KeyScheme::Dotted => encode_dotted,
        }
    }

    pub fn decode(self, key: &str) -> KeyPath {
        (self.decoder())(key)
    }

    pub fn encode(self, segments: &[String]) -> String {
        (self.encoder())(segments)
    }
}

impl Display for KeyScheme {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key scheme {0:?}, expected one of: nested, brackets, dots")]
pub struct UnknownKeyScheme(pub String);

impl FromStr for KeyScheme {
    type Err = UnknownKeyScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyScheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| UnknownKeyScheme(s.to_string()))
    }
}

fn positions(key: &str, needle: u8) -> Vec<usize> {
    key.bytes()
        .enumerate()
        .filter_map(|(i, b)| (b == needle).then_some(i))
        .collect()
}

/// Decodes `a[b[c]]` into `a`, `b`, `c`.
///
/// Every `[` must be matched by one of the `]` that close the key, and no `]`
/// may appear before them.
pub fn decode_nested_brackets(key: &str) -> KeyPath {
    let opens = positions(key, b'[');
    let Some(&first) = opens.first() else {
        return KeyPath::single(key);
    };
    let Some(stripped_len) = key.len().checked_sub(opens.len()) else {
        return KeyPath::single(key);
    };
    if key.as_bytes()[stripped_len..].iter().any(|&b| b != b']') {
        return KeyPath::single(key);
    }
    let stripped = &key[..stripped_len];
    if stripped.contains(']') {
        return KeyPath::single(key);
    }

    let mut segments = Vec::with_capacity(opens.len() + 1);
    segments.push(stripped[..first].to_string());
    for (i, &open) in opens.iter().enumerate() {
        let end = opens.get(i + 1).copied().unwrap_or(stripped_len);
        segments.push(stripped[open + 1..end].to_string());
    }
    KeyPath(segments)
}

pub fn encode_nested_brackets(segments: &[String]) -> String {
    let Some((first, rest)) = segments.split_first() else {
        return String::new();
    };
    let mut key = first.clone();
    for segment in rest {
        key.push('[');
        key.push_str(segment);
    }
    key.extend(core::iter::repeat_n(']', rest.len()));
    key
}

/// Decodes `a[b][c]` into `a`, `b`, `c`.
///
/// Brackets must pair up in order, each group must start right where the
/// previous one closed, and the last `]` must end the key.
pub fn decode_repeated_brackets(key: &str) -> KeyPath {
    let opens = positions(key, b'[');
    let closes = positions(key, b']');
    if opens.is_empty() || opens.len() != closes.len() {
        return KeyPath::single(key);
    }
    for (i, (&open, &close)) in opens.iter().zip(&closes).enumerate() {
        let next_open = opens.get(i + 1).copied().unwrap_or(key.len());
        if open > close || close + 1 != next_open {
            return KeyPath::single(key);
        }
    }

    let mut segments = Vec::with_capacity(opens.len() + 1);
    segments.push(key[..opens[0]].to_string());
    for (&open, &close) in opens.iter().zip(&closes) {
        segments.push(key[open + 1..close].to_string());
    }
    KeyPath(segments)
}

pub fn encode_repeated_brackets(segments: &[String]) -> String {
    let Some((first, rest)) = segments.split_first() else {
        return String::new();
    };
    let mut key = first.clone();
    for segment in rest {
        key.push('[');
        key.push_str(segment);
        key.push(']');
    }
    key
}

/// Decodes `a.b.c` into `a`, `b`, `c`. Empty segments are kept.
pub fn decode_dotted(key: &str) -> KeyPath {
    KeyPath(key.split('.').map(str::to_string).collect())
}

pub fn encode_dotted(segments: &[String]) -> String {
    segments.join(".")
}
