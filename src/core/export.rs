//! Print view and Word export of rendered deeds.
//!
//! The print view is a self-contained HTML page opened in its own window and
//! printed (or saved as PDF) by the browser. The Word export is a single-file
//! WordprocessingML document, which Word opens directly as a `.doc`.

use crate::core::{
    model::DocumentKind,
    render::{ParagraphStyle, RenderedDocument},
};
use std::fmt::Write;

/// Content type of [`word_document`] output
pub const WORD_CONTENT_TYPE: &str = "application/msword";

const PRINT_STYLES: &str = r"
@page { size: A4; margin: 25mm 20mm 25mm 30mm; }
body { font-family: 'Latha', 'Noto Sans Tamil', 'Vijaya', serif; font-size: 13pt; line-height: 1.8; color: #000; }
h1 { text-align: center; font-size: 18pt; text-decoration: underline; margin: 0 0 1.2em; }
p { margin: 0 0 0.8em; text-align: justify; }
p.heading { text-align: center; font-weight: bold; margin-top: 1.5em; }
p.schedule { margin-left: 2em; }
p.signature { text-align: right; margin-top: 2em; }
@media screen { body { max-width: 210mm; margin: 2em auto; } }
";

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const fn css_class(style: ParagraphStyle) -> &'static str {
    match style {
        ParagraphStyle::Heading => "heading",
        ParagraphStyle::Body => "body",
        ParagraphStyle::Schedule => "schedule",
        ParagraphStyle::Signature => "signature",
    }
}

/// Self-contained HTML page for the print window.
///
/// The first heading paragraph is the title and is emitted as `<h1>`.
#[must_use]
pub fn print_html(document: &RenderedDocument) -> String {
    let mut html = String::new();
    let title = escape(&document.title);

    // Writing to a String cannot fail.
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"ta\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{PRINT_STYLES}</style>\n</head>\n<body>\n"
    );

    let title_is_first = document.paragraphs.first().is_some_and(|first| {
        first.style == ParagraphStyle::Heading && first.text == document.title
    });
    let paragraphs = if title_is_first {
        &document.paragraphs[1..]
    } else {
        &document.paragraphs[..]
    };
    let _ = writeln!(html, "<h1>{title}</h1>");

    for paragraph in paragraphs {
        let _ = writeln!(
            html,
            "<p class=\"{}\">{}</p>",
            css_class(paragraph.style),
            escape(&paragraph.text)
        );
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn word_paragraph_properties(style: ParagraphStyle) -> &'static str {
    match style {
        ParagraphStyle::Heading => "<w:pPr><w:jc w:val=\"center\"/></w:pPr>",
        ParagraphStyle::Body => "<w:pPr><w:jc w:val=\"both\"/></w:pPr>",
        ParagraphStyle::Schedule => "<w:pPr><w:ind w:left=\"720\"/><w:jc w:val=\"both\"/></w:pPr>",
        ParagraphStyle::Signature => "<w:pPr><w:jc w:val=\"right\"/></w:pPr>",
    }
}

/// WordprocessingML 2003 document with one paragraph per rendered block.
#[must_use]
pub fn word_document(document: &RenderedDocument) -> Vec<u8> {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
    xml.push_str("<?mso-application progid=\"Word.Document\"?>\n");
    xml.push_str(
        "<w:wordDocument xmlns:w=\"http://schemas.microsoft.com/office/word/2003/wordml\">\n",
    );
    xml.push_str("<w:docPr><w:view w:val=\"print\"/></w:docPr>\n<w:body>\n");

    for paragraph in &document.paragraphs {
        let bold = if paragraph.style == ParagraphStyle::Heading {
            "<w:b/>"
        } else {
            ""
        };
        let _ = writeln!(
            xml,
            "<w:p>{}<w:r><w:rPr>{bold}<w:rFonts w:ascii=\"Latha\" w:h-ansi=\"Latha\" w:cs=\"Latha\"/><w:sz w:val=\"24\"/></w:rPr><w:t>{}</w:t></w:r></w:p>",
            word_paragraph_properties(paragraph.style),
            escape(&paragraph.text)
        );
    }

    // A4 page with the margins used by the print view
    xml.push_str("<w:sectPr><w:pgSz w:w=\"11906\" w:h=\"16838\"/><w:pgMar w:top=\"1418\" w:right=\"1134\" w:bottom=\"1418\" w:left=\"1701\"/></w:sectPr>\n");
    xml.push_str("</w:body>\n</w:wordDocument>\n");
    xml.into_bytes()
}

/// Download file name for a stored document, e.g. `sale_deed_42.doc`.
#[must_use]
pub fn export_file_name(kind: DocumentKind, id: i64) -> String {
    format!("{}_{id}.doc", kind.as_str())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::render::Paragraph;

    fn document() -> RenderedDocument {
        RenderedDocument {
            title: "கிரைய சாசனம்".to_string(),
            paragraphs: vec![
                Paragraph::heading("கிரைய சாசனம்"),
                Paragraph::body("Survey <12> & \"13\""),
                Paragraph::signature("கையொப்பம்"),
            ],
        }
    }

    #[test]
    fn test_print_html_is_self_contained_and_escaped() {
        let html = print_html(&document());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<meta charset=\"utf-8\">"));
        assert!(html.contains("@page"));
        assert_eq!(html.matches("கிரைய சாசனம்").count(), 2); // <title> and <h1>
        assert!(html.contains("<p class=\"body\">Survey &lt;12&gt; &amp; &quot;13&quot;</p>"));
        assert!(html.contains("<p class=\"signature\">கையொப்பம்</p>"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_word_document_has_one_paragraph_per_block() {
        let xml = String::from_utf8(word_document(&document())).unwrap();

        assert!(xml.starts_with("<?xml"));
        assert_eq!(xml.matches("<w:p>").count(), 3);
        assert!(xml.contains("<w:t>Survey &lt;12&gt; &amp; &quot;13&quot;</w:t>"));
        assert!(xml.trim_end().ends_with("</w:wordDocument>"));
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(DocumentKind::SaleDeed, 42), "sale_deed_42.doc");
    }
}
