//! View projector - turns resolved groups, scores and ranks into cell rows

use serde::Serialize;

use super::cell::{Cell, CellKind};
use super::export::ExportMatrix;
use super::state::ViewState;
use crate::domain::average::ResolvedScores;
use crate::domain::column::ColumnKey;
use crate::domain::group::{ColumnGroup, ColumnGroups};
use crate::domain::model::Model;
use crate::domain::ranking::Ranking;
use crate::domain::visibility::Visibility;

const STICKY: &str = "cell-sticky";
const BORDER: &str = "cell-border";
const SORTED: &str = "cell-sorted";

/// The literal grid handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedView {
    pub metric: String,
    pub sort: ColumnKey,
    pub top_header: Vec<Cell>,
    pub main_header: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
}

impl ResolvedView {
    /// Both header rows followed by every body row
    pub fn all_rows(&self) -> impl Iterator<Item = &[Cell]> {
        [self.top_header.as_slice(), self.main_header.as_slice()]
            .into_iter()
            .chain(self.rows.iter().map(Vec::as_slice))
    }

    /// Same cell sequence as a flat scalar matrix
    pub fn export_matrix(&self) -> ExportMatrix {
        ExportMatrix::from_cells(self.all_rows())
    }

    /// Ids of the rendered models in row order
    pub fn row_labels(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter_map(|row| row.first())
            .map(|cell| cell.value.as_str())
            .collect()
    }
}

/// Everything the projector reads
pub struct Projection<'a> {
    pub models: &'a [Model],
    pub groups: &'a ColumnGroups,
    pub scores: &'a ResolvedScores,
    pub ranking: &'a Ranking,
    pub visibility: &'a Visibility,
    pub state: &'a ViewState,
}

impl Projection<'_> {
    pub fn project(&self) -> ResolvedView {
        ResolvedView {
            metric: self.ranking.metric().to_string(),
            sort: self.state.sort.clone(),
            top_header: self.top_header(),
            main_header: self.main_header(),
            rows: self.rows(),
        }
    }

    fn expanded(&self, group: &ColumnGroup) -> bool {
        self.state.is_expanded(group.id())
    }

    fn top_header(&self) -> Vec<Cell> {
        let mut cells = vec![
            Cell::new(CellKind::RowIdHeader, "").with_class(STICKY),
            Cell::empty(),
            Cell::empty().with_class(BORDER),
        ];
        cells.extend(self.groups.iter().map(|group| self.group_cell(group)));
        cells
    }

    fn group_cell(&self, group: &ColumnGroup) -> Cell {
        let colspan = if self.expanded(group) {
            group.task_count() + 1
        } else {
            1
        };

        match group.name() {
            Some(name) if !group.is_global() => Cell::new(CellKind::HeaderGroup, name)
                .with_colspan(colspan)
                .with_class(BORDER)
                .with_column_id(group.id().as_str())
                .with_url(group.url())
                .with_description(group.description()),
            _ => Cell::empty().with_colspan(colspan).with_class(BORDER),
        }
    }

    fn sortable(&self, label: impl Into<String>, column: ColumnKey) -> Cell {
        let cell = Cell::new(CellKind::SortableHeader, label).with_column_id(column.key());
        if column == self.state.sort {
            cell.with_class(SORTED)
        } else {
            cell
        }
    }

    fn main_header(&self) -> Vec<Cell> {
        let mut cells = vec![
            Cell::new(CellKind::Header, "Model").with_class(STICKY),
            self.sortable("Tasks won", ColumnKey::TasksWon),
            self.sortable(average_label(self.groups.task_count()), ColumnKey::GlobalAverage)
                .with_class(BORDER),
        ];

        for group in self.groups.iter() {
            cells.push(
                self.sortable(average_label(group.task_count()), group.average_key())
                    .with_class(BORDER),
            );
            if self.expanded(group) {
                cells.extend(
                    group
                        .tasks()
                        .iter()
                        .map(|task| self.sortable(task.display_name(), ColumnKey::task(&task.id))),
                );
            }
        }

        cells
    }

    fn rows(&self) -> Vec<Vec<Cell>> {
        let mut visible = self.visibility.apply(self.models);
        visible.sort_by(|a, b| self.ranking.compare(self.scores, a, b, &self.state.sort));
        visible.into_iter().map(|model| self.row(model)).collect()
    }

    fn row(&self, model: &Model) -> Vec<Cell> {
        let mut cells = vec![
            Cell::new(CellKind::RowId, model.display_name())
                .with_class(STICKY)
                .with_url(model.url())
                .with_description(model.description())
                .with_warning(model.warning()),
            self.tasks_won_cell(model),
            self.value_cell(model, &ColumnKey::GlobalAverage, true),
        ];

        for group in self.groups.iter() {
            cells.push(self.value_cell(model, &group.average_key(), true));
            if self.expanded(group) {
                cells.extend(
                    group
                        .tasks()
                        .iter()
                        .map(|task| self.value_cell(model, &ColumnKey::task(&task.id), false)),
                );
            }
        }

        cells
    }

    fn tasks_won_cell(&self, model: &Model) -> Cell {
        let cell = Cell::new(CellKind::Value, self.ranking.tasks_won(model.id()).to_string());
        self.with_medal(cell, model, &ColumnKey::TasksWon)
    }

    fn value_cell(&self, model: &Model, column: &ColumnKey, border: bool) -> Cell {
        let mut cell = Cell::score(self.scores.value(model, column, self.ranking.metric()));
        if border {
            cell = cell.with_class(BORDER);
        }
        self.with_medal(cell, model, column)
    }

    fn with_medal(&self, cell: Cell, model: &Model, column: &ColumnKey) -> Cell {
        match self.ranking.achievement(column, model.id()) {
            Some(medal) => cell.with_class(medal.css_class()),
            None => cell,
        }
    }
}

fn average_label(task_count: usize) -> String {
    format!("Average\n({} tasks)", task_count)
}
