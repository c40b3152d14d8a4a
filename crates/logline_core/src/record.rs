// record.rs: header-indexed view over comma-delimited rows
use memchr::{memchr, memchr_iter};
use std::collections::HashMap;
use std::fs;

use crate::error::ExtractError;

/// Column-name lookup built from a header row. On duplicate column names the
/// first occurrence wins.
#[derive(Debug, Clone)]
pub struct Header {
    index: HashMap<String, usize>,
}

impl Header {
    pub fn from_row(row: &str) -> Self {
        let mut index = HashMap::new();
        for (i, name) in split_fields(row).into_iter().enumerate() {
            index.entry(name).or_insert(i);
        }
        Self { index }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// One parsed row, addressable by column name through a [`Header`].
#[derive(Debug, Clone)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn from_line(line: &str) -> Self {
        Self { fields: split_fields(line) }
    }

    pub fn from_fields(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Named-column lookup. `None` means the header lacks the column or this
    /// row is shorter than the header.
    pub fn get<'a>(&'a self, header: &Header, name: &str) -> Option<&'a str> {
        let idx = header.position(name)?;
        self.fields.get(idx).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Split one row into fields. Double quotes delimit fields that may contain
/// commas; a doubled quote inside a quoted field is a literal quote. A
/// trailing comma yields one final empty field.
pub fn split_fields(line: &str) -> Vec<String> {
    let bytes = line.as_bytes();
    let n = bytes.len();
    // pre-reserve from the comma count to avoid growth steps
    let approx = memchr_iter(b',', bytes).count() + 1;
    let mut out: Vec<String> = Vec::with_capacity(approx);

    let mut i = 0usize;
    while i <= n {
        if i >= n {
            if n > 0 && bytes[n - 1] == b',' {
                out.push(String::new());
            }
            break;
        }
        let mut buf: Vec<u8> = Vec::with_capacity(16);
        if bytes[i] == b'"' {
            i += 1;
            while i < n {
                if bytes[i] == b'"' {
                    if bytes.get(i + 1) == Some(&b'"') {
                        buf.push(b'"');
                        i += 2;
                    } else {
                        i += 1;
                        break;
                    }
                } else {
                    buf.push(bytes[i]);
                    i += 1;
                }
            }
            // stray bytes between the closing quote and the delimiter are dropped
            while i < n && bytes[i] != b',' {
                i += 1;
            }
        } else {
            let end = memchr(b',', &bytes[i..]).map_or(n, |pos| i + pos);
            buf.extend_from_slice(&bytes[i..end]);
            i = end;
        }
        if i < n && bytes[i] == b',' {
            i += 1;
        }
        out.push(String::from_utf8_lossy(&buf).into_owned());
    }

    out
}

/// Read a headered delimited file into its header and data records. Blank
/// lines are skipped. Quoted fields spanning physical lines are not supported.
pub fn read_records(path: &str) -> Result<(Header, Vec<Record>), ExtractError> {
    let data = fs::read_to_string(path).map_err(|source| ExtractError::ReadFile {
        path: path.to_string(),
        source,
    })?;
    let mut lines = data.lines();
    let header_row = lines.next().ok_or_else(|| ExtractError::MissingHeader {
        path: path.to_string(),
    })?;
    let header = Header::from_row(header_row);
    let records = lines
        .filter(|line| !line.trim().is_empty())
        .map(Record::from_line)
        .collect();
    Ok((header, records))
}
