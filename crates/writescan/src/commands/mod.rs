//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod info;
#[cfg(feature = "mcp")]
pub mod mcp;
pub mod serve;

/// Read a file and validate its size against the configured limit.
///
/// The size is checked from metadata before the file is read into memory.
/// Files with a `.pdf` extension are decoded and their page text returned.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    if is_pdf(path) {
        let bytes =
            std::fs::read(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
        return extract_pdf_text(&bytes)
            .with_context(|| format!("failed to extract text from {path}"));
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

fn is_pdf(path: &Utf8Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Extract the text of every page in document order.
///
/// Pages are separated by a blank line and the result is trimmed.
pub fn extract_pdf_text(bytes: &[u8]) -> anyhow::Result<String> {
    let doc = lopdf::Document::load_mem(bytes).context("not a readable PDF document")?;

    let mut pages = Vec::new();
    for number in doc.get_pages().into_keys() {
        let text = doc
            .extract_text(&[number])
            .with_context(|| format!("failed to read text on page {number}"))?;
        pages.push(text.trim_end().to_owned());
    }
    tracing::debug!(pages = pages.len(), "extracted PDF text");

    Ok(pages.join("\n\n").trim().to_owned())
}

/// Build a minimal PDF with one line of Courier text per page.
#[cfg(test)]
pub(crate) fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    use lopdf::content::{Content, Operation};
    use lopdf::{Document, Object, Stream, dictionary};

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

    let mut kids = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(Object::from(page_id));
    }

    let count = Object::Integer(kids.len() as i64);
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
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
