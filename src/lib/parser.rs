use log::debug;

/// First character of a glyph header line.
pub const DELIMITER: char = ':';
/// Separator between header fields.
pub const SEPARATOR: char = ',';

/// One glyph header plus the grid lines that follow it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub header: String,
    pub rows: Vec<String>,
}

/// Fields of a header line, borrowed from the record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Header<'a> {
    pub token: &'a str,
    pub x_advance: &'a str,
    pub x_offset: &'a str,
    pub y_offset: &'a str,
}

impl RawRecord {
    fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            rows: Vec::new(),
        }
    }

    /// Splits `:<token>,<xAdvance>,<xOffset>,<yOffset>`. Missing fields are
    /// empty, extra fields are ignored.
    pub fn header(&self) -> Header<'_> {
        let line = self.header.strip_prefix(DELIMITER).unwrap_or(&self.header);
        let mut fields = line.split(SEPARATOR);
        let mut next = || fields.next().unwrap_or_default();

        Header {
            token: next(),
            x_advance: next(),
            x_offset: next(),
            y_offset: next(),
        }
    }
}

/// Groups lines into glyph records.
///
/// A line starting with [`DELIMITER`] closes the pending record and opens a
/// new one. Any other line is right-trimmed and appended to the pending
/// record as a pixel row. Lines before the first header are dropped.
#[derive(Debug)]
pub struct Records<'a, I: Iterator<Item = &'a str>> {
    lines: I,
    pending: Option<RawRecord>,
}

impl<'a, I: Iterator<Item = &'a str>> Records<'a, I> {
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            pending: None,
        }
    }
}

impl<'a, I: Iterator<Item = &'a str>> Iterator for Records<'a, I> {
    type Item = RawRecord;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            if line.starts_with(DELIMITER) {
                let finished = self.pending.replace(RawRecord::new(line));
                if finished.is_some() {
                    return finished;
                }
            } else if let Some(record) = self.pending.as_mut() {
                record.rows.push(line.trim_end().to_string());
            } else {
                debug!("Skipping line outside of a glyph record: {line:?}");
            }
        }

        self.pending.take()
    }
}

pub fn records(source: &str) -> Records<'_, core::str::Lines<'_>> {
    Records::new(source.lines())
}
