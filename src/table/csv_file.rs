use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use super::{Cell, Table, TableError};

pub(super) fn read(path: &Path) -> Result<Table, TableError> {
    let file = File::open(path)?;
    read_from(BufReader::new(file))
}

pub(super) fn read_from<R: std::io::Read>(reader: R) -> Result<Table, TableError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let mut table = Table::new(csv_reader.headers()?.iter());

    for record in csv_reader.records() {
        let record = record?;
        table.push_row(record.iter().map(Cell::from_text).collect());
    }

    Ok(table)
}

pub(super) fn write<W: Write>(table: &Table, writer: W) -> Result<(), TableError> {
    let mut csv_writer = csv::WriterBuilder::new().delimiter(b',').from_writer(writer);

    csv_writer.write_record(table.headers())?;
    for row in table.rows() {
        csv_writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }
    csv_writer.flush()?;

    Ok(())
}
