// 🔗 Relation - typed link between two mentions in a story

use crate::error::NetworkError;
use crate::mention::Mention;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// RELATION TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationType {
    WillHavePosition,
    IsEndingPosition,
    HasOngoingPosition,
    HadPosition,
    At,
    WillJoin,
    IsLeaving,
    IsAt,
    HadPositionAt,

    /// Person → pronoun referring to them
    HasPronoun,

    ReportsTo,
}

impl RelationType {
    pub const ALL: [RelationType; 11] = [
        RelationType::WillHavePosition,
        RelationType::IsEndingPosition,
        RelationType::HasOngoingPosition,
        RelationType::HadPosition,
        RelationType::At,
        RelationType::WillJoin,
        RelationType::IsLeaving,
        RelationType::IsAt,
        RelationType::HadPositionAt,
        RelationType::HasPronoun,
        RelationType::ReportsTo,
    ];

    /// Annotation label, e.g. "HAD_POSITION_AT"
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::WillHavePosition => "WILL_HAVE_POSITION",
            RelationType::IsEndingPosition => "IS_ENDING_POSITION",
            RelationType::HasOngoingPosition => "HAS_ONGOING_POSITION",
            RelationType::HadPosition => "HAD_POSITION",
            RelationType::At => "AT",
            RelationType::WillJoin => "WILL_JOIN",
            RelationType::IsLeaving => "IS_LEAVING",
            RelationType::IsAt => "IS_AT",
            RelationType::HadPositionAt => "HAD_POSITION_AT",
            RelationType::HasPronoun => "HAS_PRONOUN",
            RelationType::ReportsTo => "REPORTS_TO",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, NetworkError> {
        let trimmed = label.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| NetworkError::UnknownRelationLabel(label.to_string()))
    }
}

impl FromStr for RelationType {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RELATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// Head span of the annotated arc
    pub head: Mention,

    /// Child span of the annotated arc
    pub child: Mention,

    pub relation_type: RelationType,

    /// Date the relation was recorded; not present in annotations
    pub entry_date: Option<NaiveDate>,
}

impl Relation {
    pub fn new(head: Mention, child: Mention, relation_type: RelationType) -> Self {
        Relation {
            head,
            child,
            relation_type,
            entry_date: None,
        }
    }

    pub fn with_entry_date(mut self, entry_date: NaiveDate) -> Self {
        self.entry_date = Some(entry_date);
        self
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -[{}]-> {}",
            self.head.name, self.relation_type, self.child.name
        )
    }
}
