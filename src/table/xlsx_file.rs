use std::io::{Seek, Write};
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook};

use super::{Cell, Table, TableError};

const SHEET_NAME: &str = "Sheet1";

/// Largest magnitude an Excel number (an f64) stores exactly
const MAX_EXACT_INTEGER: i64 = 1 << 53;

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::Int(v) => Cell::Int(*v),
            Data::Float(v) => Cell::Float(*v),
            Data::Bool(v) => Cell::Bool(*v),
            Data::String(s) => Cell::Text(s.clone()),
            Data::DateTime(dt) => Cell::Float(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(e) => Cell::Text(e.to_string()),
        }
    }
}

pub(super) fn read(path: &Path) -> Result<Table, TableError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| TableError::NoWorksheet(path.to_path_buf()))??;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|data| Cell::from(data).to_string())
            .collect(),
        None => return Ok(Table::default()),
    };

    let mut table = Table::new(headers);
    for row in rows {
        table.push_row(row.iter().map(Cell::from).collect());
    }

    Ok(table)
}

pub(super) fn write<W: Write + Seek + Send>(table: &Table, writer: W) -> Result<(), TableError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, header) in table.headers().iter().enumerate() {
        worksheet.write_string_with_format(0, col_num(col)?, header, &header_format)?;
    }

    for (i, row) in table.rows().iter().enumerate() {
        let r = row_num(i + 1)?;
        for (col, cell) in row.iter().enumerate() {
            let c = col_num(col)?;
            match cell {
                Cell::Empty => {}
                Cell::Int(v) if v.unsigned_abs() <= MAX_EXACT_INTEGER as u64 => {
                    worksheet.write_number(r, c, *v as f64)?;
                }
                Cell::Float(v) if v.is_finite() => {
                    worksheet.write_number(r, c, *v)?;
                }
                Cell::Int(_) | Cell::Float(_) => {
                    worksheet.write_string(r, c, cell.to_string())?;
                }
                Cell::Bool(v) => {
                    worksheet.write_boolean(r, c, *v)?;
                }
                Cell::Text(s) => {
                    worksheet.write_string(r, c, s)?;
                }
            }
        }
    }

    workbook.save_to_writer(writer)?;
    Ok(())
}

fn row_num(index: usize) -> Result<RowNum, TableError> {
    RowNum::try_from(index).map_err(|_| TableError::TooLarge(format!("{} rows", index)))
}

fn col_num(index: usize) -> Result<ColNum, TableError> {
    ColNum::try_from(index).map_err(|_| TableError::TooLarge(format!("{} columns", index + 1)))
}
