//! Workbook encoder for the secondary (xlsx) export format

use crate::error::Result;
use rust_xlsxwriter::Workbook;

/// Name of the single sheet in an exported workbook
pub const SHEET_NAME: &str = "DATA";

/// Encode combined document text as an xlsx workbook in memory
///
/// The whole text is treated as one delimited table. The csv reader skips
/// the blank lines separating header blocks, so when the document holds
/// more than one block only the first block's header lands in the sheet's
/// header row and every later header line becomes an ordinary data row.
/// That mirrors how the combined text reads as a single table and is kept
/// intentionally.
pub fn encode_workbook(document_text: &str) -> Result<Vec<u8>> {
    let table = parse_table(document_text)?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (row_idx, record) in table.iter().enumerate() {
        for (col_idx, field) in record.iter().enumerate() {
            worksheet.write_string(row_idx as u32, col_idx as u16, field.as_str())?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Parse document text into records of fields
///
/// Flexible parsing: blocks may have differing field counts.
fn parse_table(document_text: &str) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(document_text.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        records.push(record.iter().map(str::to_string).collect());
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{DataType, Reader, Xlsx};
    use std::io::Cursor;

    #[test]
    fn test_parse_single_block() {
        let table = parse_table("a,b\n1,2\n3,4").unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table[0], vec!["a", "b"]);
        assert_eq!(table[1], vec!["1", "2"]);
    }

    #[test]
    fn test_later_headers_become_data_rows() {
        // Two blocks: the second block's header is just another row
        let table = parse_table("a,b\n1,2\n3,4\n\nx,y\n9,8").unwrap();

        assert_eq!(table.len(), 5);
        assert_eq!(table[0], vec!["a", "b"]);
        assert_eq!(table[3], vec!["x", "y"]);
        assert_eq!(table[4], vec!["9", "8"]);
    }

    #[test]
    fn test_parse_ragged_blocks() {
        let table = parse_table("a,b,c\n1,2,3\n\nx,y\n9,8").unwrap();

        assert_eq!(table[0].len(), 3);
        assert_eq!(table[2].len(), 2);
    }

    #[test]
    fn test_encode_produces_xlsx_container() {
        let buffer = encode_workbook("a,b\n1,2\n3,4").unwrap();

        // xlsx files are zip archives
        assert!(buffer.len() > 4);
        assert_eq!(&buffer[..4], b"PK\x03\x04");
    }

    #[test]
    fn test_encode_empty_document() {
        let buffer = encode_workbook("").unwrap();

        assert!(!buffer.is_empty());
        assert_eq!(&buffer[..2], b"PK");
    }

    #[test]
    fn test_workbook_reads_back_with_single_data_sheet() {
        // Two blocks: sheet headers come from the first block only, the
        // second block's header line reads back as an ordinary data row
        let buffer = encode_workbook("a,b\n1,2\n3,4\n\nx,y\n9,8").unwrap();

        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(buffer)).unwrap();
        assert_eq!(workbook.sheet_names().to_vec(), vec!["DATA".to_string()]);

        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        assert_eq!(range.height(), 5);
        assert_eq!(range.get_value((0, 0)).unwrap().get_string(), Some("a"));
        assert_eq!(range.get_value((0, 1)).unwrap().get_string(), Some("b"));
        assert_eq!(range.get_value((1, 0)).unwrap().get_string(), Some("1"));
        assert_eq!(range.get_value((3, 0)).unwrap().get_string(), Some("x"));
        assert_eq!(range.get_value((4, 1)).unwrap().get_string(), Some("8"));
    }

    #[test]
    fn test_multi_block_row_accounting() {
        // One header row plus three data rows plus the second block's
        // header demoted to a data row
        let text = "a,b\n1,2\n3,4\n\na,c\n5,6";
        let table = parse_table(text).unwrap();

        assert_eq!(table.len(), 5);
        let data_rows = table.len() - 1;
        assert_eq!(data_rows, 4);
    }
}
