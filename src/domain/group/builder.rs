//! Column group builder - partitions tasks into open groups

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::column::{ColumnKey, GroupId, GLOBAL_AVERAGE_KEY, TASKS_WON_KEY};
use crate::domain::document::{TaskDef, TaskGroupDef};

/// An open group and the tasks resolved into it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnGroup {
    id: GroupId,
    #[serde(skip_serializing_if = "Option::is_none")]
    def: Option<TaskGroupDef>,
    tasks: Vec<TaskDef>,
}

impl ColumnGroup {
    fn declared(def: TaskGroupDef) -> Self {
        Self {
            id: GroupId::Declared(def.id.clone()),
            def: Some(def),
            tasks: Vec::new(),
        }
    }

    fn global() -> Self {
        Self {
            id: GroupId::Global,
            def: None,
            tasks: Vec::new(),
        }
    }

    pub fn id(&self) -> &GroupId {
        &self.id
    }

    pub fn is_global(&self) -> bool {
        self.id.is_global()
    }

    /// Header label; the synthetic global group has none
    pub fn name(&self) -> Option<&str> {
        self.def.as_ref().map(TaskGroupDef::display_name)
    }

    pub fn description(&self) -> Option<&str> {
        self.def.as_ref().and_then(|d| d.description.as_deref())
    }

    pub fn url(&self) -> Option<&str> {
        self.def.as_ref().and_then(|d| d.url.as_deref())
    }

    pub fn tasks(&self) -> &[TaskDef] {
        &self.tasks
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn average_key(&self) -> ColumnKey {
        ColumnKey::GroupAverage(self.id.clone())
    }
}

/// Ordered open groups: declared order, then the global group
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ColumnGroups {
    groups: Vec<ColumnGroup>,
}

impl ColumnGroups {
    pub fn iter(&self) -> impl Iterator<Item = &ColumnGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, id: &GroupId) -> Option<&ColumnGroup> {
        self.groups.iter().find(|g| &g.id == id)
    }

    /// Every resolved task, in group order
    pub fn tasks(&self) -> impl Iterator<Item = &TaskDef> + Clone {
        self.groups.iter().flat_map(|g| g.tasks.iter())
    }

    pub fn task_count(&self) -> usize {
        self.groups.iter().map(ColumnGroup::task_count).sum()
    }

    /// Task columns followed by every group average and the global average
    pub fn score_columns(&self) -> Vec<ColumnKey> {
        let mut columns: Vec<ColumnKey> = self.tasks().map(|t| ColumnKey::task(&t.id)).collect();
        columns.extend(self.groups.iter().map(ColumnGroup::average_key));
        columns.push(ColumnKey::GlobalAverage);
        columns
    }

    /// Resolve a flat column key against the current columns
    pub fn column(&self, raw: &str) -> Option<ColumnKey> {
        if raw == TASKS_WON_KEY {
            return Some(ColumnKey::TasksWon);
        }
        if raw == GLOBAL_AVERAGE_KEY {
            return Some(ColumnKey::GlobalAverage);
        }
        if let Some(task) = self.tasks().find(|t| t.id == raw) {
            return Some(ColumnKey::task(&task.id));
        }
        self.groups
            .iter()
            .map(ColumnGroup::average_key)
            .find(|key| key.key() == raw)
    }
}

/// Partition tasks into groups.
///
/// Closed groups are removed together with their tasks; tasks without a group
/// or with an unknown one land in the global group; empty groups are dropped.
/// A task whose id repeats an earlier task or equals a reserved column key
/// (a group average, the global average, tasks won) is skipped with a warning,
/// so every column key stays unique.
pub fn build_groups(
    group_defs: &[TaskGroupDef],
    task_defs: &[TaskDef],
    closed: &BTreeSet<String>,
) -> ColumnGroups {
    let mut groups: Vec<ColumnGroup> = group_defs
        .iter()
        .filter(|def| !closed.contains(&def.id))
        .cloned()
        .map(ColumnGroup::declared)
        .collect();
    groups.push(ColumnGroup::global());
    let global_idx = groups.len() - 1;

    let index: HashMap<String, usize> = groups[..global_idx]
        .iter()
        .enumerate()
        .map(|(idx, g)| (g.id.as_str().to_string(), idx))
        .collect();

    let mut reserved: HashSet<String> = groups.iter().map(|g| g.average_key().key()).collect();
    reserved.insert(GLOBAL_AVERAGE_KEY.to_string());
    reserved.insert(TASKS_WON_KEY.to_string());

    let mut dropped = 0usize;
    let mut seen = HashSet::new();
    for task in task_defs {
        if reserved.contains(&task.id) || !seen.insert(task.id.as_str()) {
            warn!(task_id = %task.id, "Skipping task with a colliding column key");
            continue;
        }
        let target = match task.group_id.as_deref() {
            Some(group_id) if index.contains_key(group_id) => Some(index[group_id]),
            Some(group_id) if closed.contains(group_id) => None,
            _ => Some(global_idx),
        };
        match target {
            Some(idx) => groups[idx].tasks.push(task.clone()),
            None => dropped += 1,
        }
    }

    groups.retain(|g| !g.tasks.is_empty());

    debug!(
        groups = groups.len(),
        closed = closed.len(),
        dropped_tasks = dropped,
        "Built column groups"
    );

    ColumnGroups { groups }
}
