//! CSV export via the `csv` crate

use std::io::Write;

use crate::domain::{DomainError, ExportMatrix};

/// Write every matrix row as one CSV record
pub fn write_csv<W: Write>(matrix: &ExportMatrix, out: W) -> Result<(), DomainError> {
    let mut writer = csv::Writer::from_writer(out);

    for row in matrix.rows() {
        writer
            .write_record(row.iter().map(|value| value.to_string()))
            .map_err(|e| DomainError::export(format!("Failed to write CSV record: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| DomainError::export(format!("Failed to flush CSV output: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, CellKind};

    #[test]
    fn test_writes_numbers_and_quoted_labels() {
        let header = vec![
            Cell::new(CellKind::Header, "Model"),
            Cell::new(CellKind::SortableHeader, "Average\n(2 tasks)"),
        ];
        let row = vec![
            Cell::new(CellKind::RowId, "org/model, large"),
            Cell::new(CellKind::Value, "70.50"),
        ];
        let matrix = ExportMatrix::from_cells([header.as_slice(), row.as_slice()]);

        let mut out = Vec::new();
        write_csv(&matrix, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Model,Average (2 tasks)\n\"org/model, large\",70.5\n"
        );
    }

    #[test]
    fn test_empty_matrix_writes_nothing() {
        let mut out = Vec::new();
        write_csv(&ExportMatrix::default(), &mut out).unwrap();

        assert!(out.is_empty());
    }
}
