/// Browser downloads: CSV export of list rows and single documents
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Rows that can be written as CSV
pub trait CsvExportable {
    /// Column titles
    fn headers() -> Vec<&'static str>;

    /// Cell values in `headers()` order
    fn to_csv_row(&self) -> Vec<String>;
}

/// Builds the CSV document (comma separated, header line first).
pub fn to_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut csv_content = String::new();
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

/// Writes `data` as CSV and starts the browser download.
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }
    download_text(&to_csv(data), filename, "text/csv;charset=utf-8;")
}

/// Starts the download of a text document (invoice, JSON profile, ...).
pub fn download_text(content: &str, filename: &str, mime: &str) -> Result<(), String> {
    let blob = create_blob(content, mime)?;
    download_blob(&blob, filename)?;
    log::info!("downloaded '{}' ({} bytes)", filename, content.len());
    Ok(())
}

/// Quotes a cell holding a separator, a quote or a line break
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_blob(content: &str, mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Clicks a temporary `<a download>` pointing at the blob.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, f64);

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Total"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), format!("{:.2}", self.1)]
        }
    }

    #[test]
    fn test_to_csv_escapes_cells() {
        let csv = to_csv(&[Row("Doe, John", 99.99), Row("say \"hi\"", 5.0)]);
        assert_eq!(
            csv,
            "Name,Total\n\"Doe, John\",99.99\n\"say \"\"hi\"\"\",5.00\n"
        );
    }

    #[test]
    fn test_export_of_nothing_fails() {
        assert!(export_to_csv::<Row>(&[], "empty.csv").is_err());
    }
}
