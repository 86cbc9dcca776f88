//! CSV export: builds the file content in memory and hands it to the
//! browser as a Blob download.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Types that can be exported as CSV rows.
pub trait CsvExportable {
    /// Column headers, in output order.
    fn headers() -> Vec<&'static str>;

    /// One CSV row worth of cell values for this record.
    fn to_csv_row(&self) -> Vec<String>;
}

/// Builds the full CSV document for `data`. Pure string work, kept
/// separate from the download plumbing so it can be unit tested.
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    // UTF-8 BOM so spreadsheet apps pick the right encoding
    let mut csv_content = String::from('\u{FEFF}');

    csv_content.push_str(&T::headers().join(","));
    csv_content.push('\n');

    for item in data {
        let escaped_row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&escaped_row.join(","));
        csv_content.push('\n');
    }

    csv_content
}

/// Exports `data` as a CSV file and triggers a browser download.
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("No data to export".to_string());
    }

    let blob = create_csv_blob(&build_csv(data))?;
    download_blob(&blob, filename)
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url =
        Url::create_object_url_with_blob(blob).map_err(|e| format!("Failed to create URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create element: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "Element is not an anchor".to_string())?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        id: &'static str,
        note: &'static str,
    }

    impl CsvExportable for Line {
        fn headers() -> Vec<&'static str> {
            vec!["ID", "Note"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.id.to_string(), self.note.to_string()]
        }
    }

    #[test]
    fn builds_header_and_rows() {
        let data = vec![
            Line { id: "ORD-1234", note: "plain" },
            Line { id: "ORD-1235", note: "has, comma" },
        ];
        let csv = build_csv(&data);
        let body = csv.trim_start_matches('\u{FEFF}');
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines[0], "ID,Note");
        assert_eq!(lines[1], "ORD-1234,plain");
        assert_eq!(lines[2], "ORD-1235,\"has, comma\"");
    }

    #[test]
    fn escapes_quotes_by_doubling() {
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("plain"), "plain");
    }
}
