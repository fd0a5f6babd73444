use super::{ForumPostRecord, MatchRecord};
use serde::{Deserialize, Serialize};

/// Result of running one extractor against a page.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractOutcome<T> {
    Matched(T),
    NotApplicable,
}

impl<T> ExtractOutcome<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Matched(record) => Some(record),
            Self::NotApplicable => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

/// What a fetched page turned out to be.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "record", rename_all = "lowercase")]
pub enum Preview {
    Match(MatchRecord),
    Forum(ForumPostRecord),
    Unclassified,
}

impl Preview {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Match(_) => "match",
            Self::Forum(_) => "forum",
            Self::Unclassified => "unclassified",
        }
    }
}
