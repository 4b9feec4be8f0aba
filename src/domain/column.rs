//! Column keys - identifiers of every rankable grid column

use std::fmt;

use serde::{Serialize, Serializer};

/// Identifier of the synthetic group collecting ungrouped tasks
pub const GLOBAL_GROUP_ID: &str = "__global__";

/// Key of the average over every resolved task
pub const GLOBAL_AVERAGE_KEY: &str = "__global___average";

/// Key of the tasks-won column
pub const TASKS_WON_KEY: &str = "__tasks_won__";

/// Key of the synthetic group's own average. Kept apart from
/// [`GLOBAL_AVERAGE_KEY`] so the two columns never overwrite each other.
pub const GLOBAL_GROUP_AVERAGE_KEY: &str = "__global___group_average";

const AVERAGE_SUFFIX: &str = "_average";

/// Identity of a column group
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupId {
    /// A group declared by the document
    Declared(String),
    /// The synthetic bucket for tasks without an open, known group
    Global,
}

impl GroupId {
    pub fn declared(id: impl Into<String>) -> Self {
        Self::Declared(id.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Declared(id) => id,
            Self::Global => GLOBAL_GROUP_ID,
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global)
    }

    /// Parse a raw identifier; the reserved global id maps to [`GroupId::Global`]
    pub fn parse(raw: &str) -> Self {
        if raw == GLOBAL_GROUP_ID {
            Self::Global
        } else {
            Self::Declared(raw.to_string())
        }
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for GroupId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A rankable column of the grid
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnKey {
    /// Raw scores of a single task
    Task(String),
    /// Average over the tasks of one group
    GroupAverage(GroupId),
    /// Average over every resolved task
    GlobalAverage,
    /// Number of tasks on which a model ranks first
    TasksWon,
}

impl ColumnKey {
    pub fn task(id: impl Into<String>) -> Self {
        Self::Task(id.into())
    }

    pub fn group_average(group: GroupId) -> Self {
        Self::GroupAverage(group)
    }

    pub fn is_task(&self) -> bool {
        matches!(self, Self::Task(_))
    }

    /// Flat string form used for sort/toggle wiring and serialization
    pub fn key(&self) -> String {
        match self {
            Self::Task(id) => id.clone(),
            Self::GroupAverage(GroupId::Declared(id)) => format!("{id}{AVERAGE_SUFFIX}"),
            Self::GroupAverage(GroupId::Global) => GLOBAL_GROUP_AVERAGE_KEY.to_string(),
            Self::GlobalAverage => GLOBAL_AVERAGE_KEY.to_string(),
            Self::TasksWon => TASKS_WON_KEY.to_string(),
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl Serialize for ColumnKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_forms() {
        assert_eq!(ColumnKey::task("CBD").key(), "CBD");
        assert_eq!(
            ColumnKey::group_average(GroupId::declared("Retrieval")).key(),
            "Retrieval_average"
        );
        assert_eq!(ColumnKey::GlobalAverage.key(), "__global___average");
        assert_eq!(ColumnKey::TasksWon.key(), "__tasks_won__");
        assert_ne!(
            ColumnKey::group_average(GroupId::Global).key(),
            ColumnKey::GlobalAverage.key()
        );
    }

    #[test]
    fn test_group_id_parse() {
        assert_eq!(GroupId::parse("__global__"), GroupId::Global);
        assert_eq!(GroupId::parse("STS"), GroupId::declared("STS"));
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&ColumnKey::group_average(GroupId::declared("STS"))).unwrap();
        assert_eq!(json, "\"STS_average\"");
    }
}
