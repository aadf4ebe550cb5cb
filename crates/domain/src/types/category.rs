//! Classification labels
//!
//! A `Category` is a string tag. The five known tags are associated
//! constants; rules may return any other tag, and the metrics layer accepts
//! unseen tags as they arrive.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Handling category assigned to a package
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(Cow<'static, str>);

impl Category {
    /// Neither heavy nor bulky; also the fallback when no rule applies
    pub const STANDARD: Category = Category(Cow::Borrowed("STANDARD"));
    /// Heavy or bulky, but not both
    pub const SPECIAL: Category = Category(Cow::Borrowed("SPECIAL"));
    /// Heavy and bulky
    pub const REJECTED: Category = Category(Cow::Borrowed("REJECTED"));
    /// Low density (opt-in rule)
    pub const FRAGILE: Category = Category(Cow::Borrowed("FRAGILE"));
    /// Small and light (opt-in rule)
    pub const EXPRESS: Category = Category(Cow::Borrowed("EXPRESS"));

    /// Build a custom category tag
    pub fn custom(tag: impl Into<String>) -> Self {
        Self(Cow::Owned(tag.into()))
    }

    /// Label text, e.g. `"STANDARD"`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is one of the five built-in tags
    pub fn is_builtin(&self) -> bool {
        matches!(self.as_str(), "STANDARD" | "SPECIAL" | "REJECTED" | "FRAGILE" | "EXPRESS")
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&'static str> for Category {
    fn from(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        Self(Cow::Owned(tag))
    }
}

impl PartialEq<str> for Category {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Category {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
