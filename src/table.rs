//! Bordered plain-text tables for terminal reports.

use std::fmt;

/// One table line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// A row of cells, left-aligned.
    Cells(Vec<String>),
    /// A horizontal rule between rows.
    Separator,
}

/// A titled table rendered with `+---+` rules and `| cell |` rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Centred title above the headings.
    pub title: Option<String>,
    /// Column headings.
    pub headings: Vec<String>,
    /// Body rows and separators, in display order.
    pub rows: Vec<Row>,
    /// Whether a closing rule is drawn after the last row.
    pub border_bottom: bool,
}

impl Table {
    /// Creates an empty table with the given title and headings.
    pub fn new<I, S>(title: impl Into<String>, headings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: Some(title.into()),
            headings: headings.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            border_bottom: true,
        }
    }

    /// Appends a row of cells.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(Row::Cells(cells.into_iter().map(Into::into).collect()));
    }

    /// Appends a horizontal rule.
    pub fn add_separator(&mut self) {
        self.rows.push(Row::Separator);
    }

    /// The cell rows only, skipping separators.
    pub fn cell_rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().filter_map(|row| match row {
            Row::Cells(cells) => Some(cells.as_slice()),
            Row::Separator => None,
        })
    }

    fn column_widths(&self) -> Vec<usize> {
        let columns = self
            .cell_rows()
            .map(<[String]>::len)
            .chain(std::iter::once(self.headings.len()))
            .max()
            .unwrap_or(0);
        let mut widths = vec![0; columns];
        for cells in std::iter::once(self.headings.as_slice()).chain(self.cell_rows()) {
            for (i, cell) in cells.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        // Widen the last column so a long title still fits.
        if let (Some(title), Some(last)) = (&self.title, widths.len().checked_sub(1)) {
            let inner = inner_width(&widths);
            let needed = title.chars().count() + 2;
            if needed > inner {
                widths[last] += needed - inner;
            }
        }
        widths
    }
}

fn inner_width(widths: &[usize]) -> usize {
    widths.iter().map(|w| w + 2).sum::<usize>() + widths.len().saturating_sub(1)
}

fn write_rule(f: &mut fmt::Formatter<'_>, widths: &[usize]) -> fmt::Result {
    for width in widths {
        write!(f, "+{}", "-".repeat(width + 2))?;
    }
    writeln!(f, "+")
}

fn write_cells(f: &mut fmt::Formatter<'_>, widths: &[usize], cells: &[String]) -> fmt::Result {
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map_or("", String::as_str);
        let pad = width - cell.chars().count();
        write!(f, "| {cell}{} ", " ".repeat(pad))?;
    }
    writeln!(f, "|")
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();

        if let Some(title) = &self.title {
            let inner = inner_width(&widths).max(title.chars().count() + 2);
            let left = (inner - title.chars().count()) / 2;
            let right = inner - title.chars().count() - left;
            writeln!(f, "+{}+", "-".repeat(inner))?;
            writeln!(f, "|{}{title}{}|", " ".repeat(left), " ".repeat(right))?;
        }

        write_rule(f, &widths)?;
        if !self.headings.is_empty() {
            write_cells(f, &widths, &self.headings)?;
            write_rule(f, &widths)?;
        }

        for row in &self.rows {
            match row {
                Row::Cells(cells) => write_cells(f, &widths, cells)?,
                Row::Separator => write_rule(f, &widths)?,
            }
        }

        if self.border_bottom {
            write_rule(f, &widths)?;
        }
        Ok(())
    }
}
