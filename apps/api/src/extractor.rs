//! Document Extractor: pulls the text layer out of an uploaded PDF resume.
//!
//! Text-layer extraction only. Scanned documents without a text layer come
//! back as blank pages, not errors.

use lopdf::Document;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to load PDF: {0}")]
    Load(#[from] lopdf::Error),
}

/// Extracts every page's text in page order, pages joined by a newline.
///
/// A page whose extraction fails contributes an empty string so one bad page
/// never discards the rest of the document. Only a payload that cannot be
/// parsed as a PDF at all is an error, and that error is recoverable by the
/// caller: the session it belongs to is left untouched.
pub fn extract_resume_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let doc = Document::load_mem(bytes)?;

    let pages: Vec<String> = doc
        .get_pages()
        .into_iter()
        .map(|(page_num, _page_id)| {
            doc.extract_text(&[page_num]).unwrap_or_else(|e| {
                warn!("page {page_num}: text extraction failed, substituting empty page: {e}");
                String::new()
            })
        })
        .collect();

    Ok(pages.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    #[test]
    fn test_non_pdf_payload_is_a_load_error() {
        let result = extract_resume_text(b"this is not a pdf");
        assert!(matches!(result, Err(ExtractError::Load(_))));
    }

    #[test]
    fn test_empty_payload_is_a_load_error() {
        assert!(extract_resume_text(b"").is_err());
    }

    // Builds a one-page-per-text PDF in memory so extraction order can be
    // checked without fixture files.
    fn pdf_with_pages(texts: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_extracts_pages_in_page_order() {
        let bytes = pdf_with_pages(&["FIRST PAGE MARKER", "SECOND PAGE MARKER"]);
        let text = extract_resume_text(&bytes).unwrap();

        let first = text
            .find("FIRST PAGE MARKER")
            .expect("first page text missing");
        let second = text
            .find("SECOND PAGE MARKER")
            .expect("second page text missing");
        assert!(first < second, "pages must be joined in page order");
    }

    #[test]
    fn test_single_page_document_extracts() {
        let bytes = pdf_with_pages(&["Name: A"]);
        let text = extract_resume_text(&bytes).unwrap();
        assert!(text.contains("Name: A"));
    }
}
