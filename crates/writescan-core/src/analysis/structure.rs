//! Document structure notes.

/// Describe headings and paragraph layout.
pub fn analyze_structure(heading_count: usize, paragraph_count: usize) -> String {
    let mut notes = Vec::new();

    if heading_count > 0 {
        notes.push(format!("Document has {heading_count} heading(s)"));
    }

    if paragraph_count > 1 {
        notes.push(format!("Well-organized with {paragraph_count} paragraph(s)"));
    } else {
        notes.push("Single paragraph structure".to_string());
    }

    if notes.is_empty() {
        "Basic document structure".to_string()
    } else {
        notes.join("; ")
    }
}
