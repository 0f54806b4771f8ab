use std::path::Path;

use umya_spreadsheet::Worksheet;

use crate::errors::GenerationError;

pub const REQUIRED_COLUMNS: [&str; 4] = ["province", "amphoe", "district", "zipcode"];

/// One row of the address table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressRow {
    pub province: String,
    pub amphoe: String,
    pub district: String,
    /// Raw cell text; `None` when the cell is empty.
    pub zipcode: Option<String>,
}

/// Decodes a tabular resource into address rows.
pub trait TabularDecoder {
    fn format(&self) -> &'static str;

    fn decode(&self, path: &Path) -> Result<Vec<AddressRow>, GenerationError>;
}

/// Pick a decoder from the file extension.
pub fn decoder_for(path: &Path) -> Result<Box<dyn TabularDecoder>, GenerationError> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "xlsx" => Ok(Box::new(XlsxDecoder)),
        "csv" => Ok(Box::new(CsvDecoder)),
        other => Err(GenerationError::DataUnavailable(format!(
            "unsupported address table format '{other}' for {}",
            path.display()
        ))),
    }
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    province: usize,
    amphoe: usize,
    district: usize,
    zipcode: usize,
}

impl ColumnIndex {
    fn from_header<S: AsRef<str>>(header: &[S], path: &Path) -> Result<Self, GenerationError> {
        let position = |name: &str| {
            header
                .iter()
                .position(|value| value.as_ref().trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| {
                    GenerationError::DataUnavailable(format!(
                        "address table {} is missing column '{name}'",
                        path.display()
                    ))
                })
        };
        Ok(Self {
            province: position(REQUIRED_COLUMNS[0])?,
            amphoe: position(REQUIRED_COLUMNS[1])?,
            district: position(REQUIRED_COLUMNS[2])?,
            zipcode: position(REQUIRED_COLUMNS[3])?,
        })
    }

    fn row<F>(&self, cell: F) -> Option<AddressRow>
    where
        F: Fn(usize) -> String,
    {
        let row = AddressRow {
            province: cell(self.province).trim().to_string(),
            amphoe: cell(self.amphoe).trim().to_string(),
            district: cell(self.district).trim().to_string(),
            zipcode: Some(cell(self.zipcode).trim().to_string()).filter(|value| !value.is_empty()),
        };
        let blank = row.province.is_empty()
            && row.amphoe.is_empty()
            && row.district.is_empty()
            && row.zipcode.is_none();
        (!blank).then_some(row)
    }
}

/// Reads the first worksheet of an `.xlsx` workbook; row 1 is the header.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxDecoder;

impl TabularDecoder for XlsxDecoder {
    fn format(&self) -> &'static str {
        "xlsx"
    }

    fn decode(&self, path: &Path) -> Result<Vec<AddressRow>, GenerationError> {
        let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|err| {
            GenerationError::DataUnavailable(format!(
                "failed to parse workbook {}: {}",
                path.display(),
                err
            ))
        })?;
        let sheet = book.get_sheet(&0).ok_or_else(|| {
            GenerationError::DataUnavailable(format!("workbook {} has no sheets", path.display()))
        })?;
        decode_sheet(sheet, path)
    }
}

fn decode_sheet(sheet: &Worksheet, path: &Path) -> Result<Vec<AddressRow>, GenerationError> {
    let (max_col, max_row) = sheet.get_highest_column_and_row();
    let header: Vec<String> = (1..=max_col)
        .map(|col| sheet.get_value((col, 1_u32)))
        .collect();
    let columns = ColumnIndex::from_header(&header, path)?;

    let rows = (2..=max_row)
        .filter_map(|row| columns.row(|index| sheet.get_value((index as u32 + 1, row))))
        .collect();
    Ok(rows)
}

/// Reads a headed CSV file.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvDecoder;

impl TabularDecoder for CsvDecoder {
    fn format(&self) -> &'static str {
        "csv"
    }

    fn decode(&self, path: &Path) -> Result<Vec<AddressRow>, GenerationError> {
        let csv_error = |err: csv::Error| {
            GenerationError::DataUnavailable(format!(
                "failed to decode csv {}: {}",
                path.display(),
                err
            ))
        };
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(csv_error)?;
        let header: Vec<String> = reader
            .headers()
            .map_err(csv_error)?
            .iter()
            .map(|value| value.to_string())
            .collect();
        let columns = ColumnIndex::from_header(&header, path)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(csv_error)?;
            let cell = |index: usize| record.get(index).unwrap_or_default().to_string();
            if let Some(row) = columns.row(cell) {
                rows.push(row);
            }
        }
        Ok(rows)
    }
}
