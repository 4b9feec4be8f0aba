//! View domain - view state, display cells, projection and export matrix

mod cell;
mod export;
mod projector;
mod state;

pub use cell::{format_score, Cell, CellKind};
pub use export::{ExportFormat, ExportMatrix, ExportValue, EXPORT_FILE_STEM};
pub use projector::{Projection, ResolvedView};
pub use state::{GroupState, ViewState};
