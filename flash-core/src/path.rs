//! Group and card addressing.
//!
//! Groups are never stored. A card's group is the ordered list of segments
//! in front of its title, and listings are answered by comparing those
//! segments, so `Group` prefixes `Group.Sub` but not `GroupX`.

use crate::CoreError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

pub const SEPARATOR: char = '.';

/// Segments and titles become file names in the file backend.
const RESERVED: [char; 2] = ['/', '\\'];

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupPath {
    segments: Vec<String>,
}

impl GroupPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Parses a dot-delimited group. Empty segments are dropped, so `""`,
    /// `"."` and `"Group."` are all well formed.
    pub fn parse(s: &str) -> Self {
        Self {
            segments: s
                .split(SEPARATOR)
                .filter(|seg| !seg.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.segments.push(segment.into());
        next
    }

    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        let mut up = self.clone();
        up.segments.pop();
        Some(up)
    }

    /// Segment-wise prefix test. The root group prefixes every group.
    pub fn starts_with(&self, prefix: &GroupPath) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    pub fn join(&self, title: &str) -> CardPath {
        CardPath::new(self.clone(), title)
    }

    /// Rejects segments that would not map to exactly one directory.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.segments.iter().any(|seg| seg.contains(RESERVED)) {
            return Err(CoreError::InvalidName(self.to_string()));
        }
        Ok(())
    }

    /// The group as nested directory components.
    pub fn to_relative_path(&self) -> PathBuf {
        self.segments.iter().collect()
    }
}

impl fmt::Display for GroupPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            f.write_str(seg)?;
        }
        Ok(())
    }
}

impl From<&str> for GroupPath {
    fn from(s: &str) -> Self {
        GroupPath::parse(s)
    }
}

/// Fully-qualified card identity: a group plus a bare title.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CardPath {
    group: GroupPath,
    title: String,
}

impl CardPath {
    /// Dotted titles are folded into the group, so `("", "a.b")` and
    /// `("a", "b")` name the same card.
    pub fn new(group: GroupPath, title: &str) -> Self {
        match title.rsplit_once(SEPARATOR) {
            Some((lead, bare)) => {
                let mut group = group;
                group.segments.extend(GroupPath::parse(lead).segments);
                Self {
                    group,
                    title: bare.to_string(),
                }
            }
            None => Self {
                group,
                title: title.to_string(),
            },
        }
    }

    pub fn parse(s: &str) -> Self {
        CardPath::new(GroupPath::root(), s)
    }

    pub fn group(&self) -> &GroupPath {
        &self.group
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// A usable card path has a non-empty bare title and no reserved
    /// characters anywhere.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.is_empty() {
            return Err(CoreError::EmptyTitle);
        }
        if self.group.validate().is_err() || self.title.contains(RESERVED) {
            return Err(CoreError::InvalidName(self.to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for CardPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_root() {
            f.write_str(&self.title)
        } else {
            write!(f, "{}{SEPARATOR}{}", self.group, self.title)
        }
    }
}

impl Serialize for CardPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CardPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(CardPath::parse(&s))
    }
}
