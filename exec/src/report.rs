use std::io;
use csv;
use prettytable::{Table, Row, Cell};
use prettytable::format;
use semeval::prelude::*;
use errors::*;

/// Label of the micro-averaged row
pub const TOTAL: &str = "total";

fn header(scores: &Scores) -> Vec<String> {
    let mut titles = vec!["source".to_owned()];
    titles.extend(scores.titles());
    titles
}

fn record(source: &str, scores: &Scores, digits: usize) -> Vec<String> {
    let mut fields = vec![source.to_owned()];
    fields.extend(scores.fields(digits));
    fields
}

/// One row per evaluated pair followed by the aggregated scores
pub fn scores_table(rows: &[(String, Scores)], total: &Scores, digits: usize) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(Row::new(header(total).iter().map(|t| Cell::new(t)).collect()));

    for &(ref source, ref scores) in rows {
        table.add_row(Row::new(record(source, scores, digits).iter().map(|f| Cell::new(f)).collect()));
    }
    if rows.len() > 1 {
        table.add_row(Row::new(record(TOTAL, total, digits).iter().map(|f| Cell::new(f)).collect()));
    }

    table
}

pub fn write_csv<W: io::Write>(writer: W, rows: &[(String, Scores)], total: &Scores, digits: usize) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&header(total))?;
    for &(ref source, ref scores) in rows {
        wtr.write_record(&record(source, scores, digits))?;
    }
    wtr.write_record(&record(TOTAL, total, digits))?;
    wtr.flush()?;

    Ok(())
}
