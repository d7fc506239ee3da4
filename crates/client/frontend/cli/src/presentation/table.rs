//! Fixed-width character table.

use std::io::{self, Write};

use roster_core::CharacterRecord;

/// Column widths besides the configurable name column.
const ID_WIDTH: usize = 3;
const CLASS_WIDTH: usize = 10;
const LEVEL_WIDTH: usize = 5;
const HEALTH_WIDTH: usize = 6;
const ATTACK_WIDTH: usize = 6;
const DEFENSE_WIDTH: usize = 7;

/// Renders records as a bordered, left-aligned table.
#[derive(Clone, Copy, Debug)]
pub struct CharacterTable {
    name_width: usize,
}

impl CharacterTable {
    pub fn new(name_width: usize) -> Self {
        Self { name_width }
    }

    fn widths(&self) -> [usize; 7] {
        [
            ID_WIDTH,
            self.name_width,
            CLASS_WIDTH,
            LEVEL_WIDTH,
            HEALTH_WIDTH,
            ATTACK_WIDTH,
            DEFENSE_WIDTH,
        ]
    }

    /// `+----+` rule spanning the full row.
    pub fn border(&self) -> String {
        let widths = self.widths();
        let inner: usize = widths.iter().map(|w| w + 2).sum::<usize>() + widths.len() - 1;
        format!("+{}+", "-".repeat(inner))
    }

    pub fn header(&self) -> String {
        self.row([
            "ID", "Name", "Class", "Level", "Health", "Attack", "Defense",
        ])
    }

    pub fn record_row(&self, record: &CharacterRecord) -> String {
        let cells = [
            record.id().to_string(),
            record.name().to_owned(),
            record.class().to_string(),
            record.level().to_string(),
            record.health().to_string(),
            record.attack().to_string(),
            record.defense().to_string(),
        ];
        self.row(cells.each_ref().map(String::as_str))
    }

    fn row(&self, cells: [&str; 7]) -> String {
        let mut line = String::from("|");
        for (cell, width) in cells.iter().zip(self.widths()) {
            line.push_str(&format!(" {cell:<width$} |"));
        }
        line
    }

    /// Write the whole table: border, header, border, rows, border.
    pub fn write(&self, out: &mut impl Write, records: &[CharacterRecord]) -> io::Result<()> {
        let border = self.border();
        writeln!(out, "{border}")?;
        writeln!(out, "{}", self.header())?;
        writeln!(out, "{border}")?;
        for record in records {
            writeln!(out, "{}", self.record_row(record))?;
        }
        writeln!(out, "{border}")
    }
}
