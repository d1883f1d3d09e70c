//! Deed text rendering.
//!
//! Each document type has a fixed Tamil boilerplate into which form values are
//! interpolated. Rendering is pure and never fails: a value that does not
//! parse is printed as typed, so a preview always shows something.

mod mortgage;
mod sale_agreement;
mod sale_deed;

pub use mortgage::render_mortgage_deed;
pub use sale_agreement::render_sale_agreement;
pub use sale_deed::render_sale_deed;

use crate::core::{
    amounts::{format_indian_grouping, parse_amount},
    dates::{format_display_date, parse_form_date},
    model::{Attribution, DocumentBody, DocumentForm, Party, PriorDocument, Property},
    words::{NumberWords, Tamil, rupees_in_words},
};
use serde::Serialize;

/// How a paragraph is laid out in the print view and the Word export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphStyle {
    /// Centred bold title line
    Heading,
    /// Justified running text
    Body,
    /// Property schedule entry, indented
    Schedule,
    /// Right-aligned signature or attribution line
    Signature,
}

/// One block of deed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub style: ParagraphStyle,
    pub text: String,
}

impl Paragraph {
    pub(crate) fn heading(text: impl Into<String>) -> Self {
        Self {
            style: ParagraphStyle::Heading,
            text: text.into(),
        }
    }

    pub(crate) fn body(text: impl Into<String>) -> Self {
        Self {
            style: ParagraphStyle::Body,
            text: text.into(),
        }
    }

    pub(crate) fn schedule(text: impl Into<String>) -> Self {
        Self {
            style: ParagraphStyle::Schedule,
            text: text.into(),
        }
    }

    pub(crate) fn signature(text: impl Into<String>) -> Self {
        Self {
            style: ParagraphStyle::Signature,
            text: text.into(),
        }
    }
}

/// A fully interpolated deed, ready for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub title: String,
    pub paragraphs: Vec<Paragraph>,
}

impl RenderedDocument {
    /// All paragraph text joined by blank lines
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|paragraph| paragraph.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Renders any document form.
#[must_use]
pub fn render_document(form: &DocumentForm) -> RenderedDocument {
    match form {
        DocumentForm::MortgageDeed(deed) => render_mortgage_deed(deed),
        DocumentForm::SaleAgreement(agreement) => render_sale_agreement(agreement),
        DocumentForm::SaleDeed(deed) => render_sale_deed(deed),
    }
}

/// Display form of a date field, or the raw text when it does not parse.
pub(crate) fn display_date(value: &str) -> String {
    parse_form_date(value).map_or_else(|| value.trim().to_string(), format_display_date)
}

/// `ரூ. 2,50,000.00/-` for a parseable amount, raw text otherwise.
pub(crate) fn figures(value: &str) -> String {
    parse_amount(value).map_or_else(
        || value.trim().to_string(),
        |amount| format!("ரூ. {}/-", format_indian_grouping(amount)),
    )
}

/// Amount in figures followed by words; typed words win over computed ones.
/// Amounts that cannot be spelled print in figures only.
pub(crate) fn amount_phrase(value: &str, typed_words: &str) -> String {
    let words = if typed_words.trim().is_empty() {
        parse_amount(value)
            .map(rupees_in_words)
            .filter(|words| words.as_str() != Tamil.fallback())
            .unwrap_or_default()
    } else {
        typed_words.trim().to_string()
    };

    if words.is_empty() {
        figures(value)
    } else {
        format!("{} ({words})", figures(value))
    }
}

fn non_empty(parts: &[&str]) -> Vec<String> {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Recital of one party: relation, name, age, address and identity details.
pub(crate) fn describe_party(party: &Party) -> String {
    let mut text = String::new();
    if !party.relation_name.trim().is_empty() {
        text.push_str(&format!(
            "{} அவர்களின் {} ",
            party.relation_name.trim(),
            party.relation_type.tamil()
        ));
    }
    text.push_str(party.name.trim());
    if !party.age.trim().is_empty() {
        text.push_str(&format!(" (வயது {})", party.age.trim()));
    }

    let mut address = non_empty(&[
        &party.address_line1,
        &party.address_line2,
        &party.address_line3,
    ]);
    if !party.taluk.trim().is_empty() {
        address.push(format!("{} வட்டம்", party.taluk.trim()));
    }
    if !party.district.trim().is_empty() {
        address.push(format!("{} மாவட்டம்", party.district.trim()));
    }
    if !party.pincode.trim().is_empty() {
        address.push(format!("அஞ்சல் குறியீடு {}", party.pincode.trim()));
    }
    if !address.is_empty() {
        text.push_str(&format!(", {} என்ற முகவரியில் வசிப்பவர்", address.join(", ")));
    }

    if !party.aadhaar_number.trim().is_empty() {
        text.push_str(&format!(", ஆதார் எண்: {}", party.aadhaar_number.trim()));
    }
    if !party.phone.trim().is_empty() {
        text.push_str(&format!(", கைபேசி: {}", party.phone.trim()));
    }
    text
}

/// Numbered recital of a list of parties under a role heading.
pub(crate) fn party_paragraphs(heading: &str, parties: &[Party]) -> Vec<Paragraph> {
    let mut paragraphs = vec![Paragraph::body(format!("{heading}:"))];
    paragraphs.extend(
        parties
            .iter()
            .enumerate()
            .map(|(index, party)| Paragraph::body(format!("{}. {}", index + 1, describe_party(party)))),
    );
    paragraphs
}

/// Title chain recital, one sentence per prior registered document.
pub(crate) fn prior_document_paragraphs(documents: &[PriorDocument]) -> Vec<Paragraph> {
    documents
        .iter()
        .map(|document| {
            let mut reference = Vec::new();
            if !document.sro_office.trim().is_empty() {
                reference.push(format!("{} சார்பதிவாளர் அலுவலகத்தில்", document.sro_office.trim()));
            }
            if !document.year.trim().is_empty() {
                reference.push(format!("{} ஆம் ஆண்டு", document.year.trim()));
            }
            if !document.book_number.trim().is_empty() {
                reference.push(format!("{} ஆம் புத்தகத்தில்", document.book_number.trim()));
            }
            reference.push(format!("{} ஆம் எண்ணாக", document.document_number.trim()));
            Paragraph::body(format!(
                "மேற்படி சொத்தானது {} பதிவு செய்யப்பட்ட ஆவணத்தின்படி பாத்தியப்பட்டு வருகிறது.",
                reference.join(" ")
            ))
        })
        .collect()
}

/// Property schedule: heading, free-text description and one entry per row.
pub(crate) fn schedule_paragraphs(body: &DocumentBody) -> Vec<Paragraph> {
    let mut paragraphs = vec![Paragraph::heading("சொத்து விவரம்")];
    if !body.property_description.trim().is_empty() {
        paragraphs.push(Paragraph::schedule(body.property_description.trim()));
    }
    paragraphs.extend(
        body.properties
            .iter()
            .enumerate()
            .map(|(index, property)| Paragraph::schedule(describe_property(index + 1, property))),
    );
    paragraphs
}

fn describe_property(number: usize, property: &Property) -> String {
    let mut location = Vec::new();
    if !property.district.trim().is_empty() {
        location.push(format!("{} மாவட்டம்", property.district.trim()));
    }
    if !property.taluk.trim().is_empty() {
        location.push(format!("{} வட்டம்", property.taluk.trim()));
    }
    location.push(format!("{} கிராமம்", property.village.trim()));

    let survey = if property.subdivision.trim().is_empty() {
        property.survey_number.trim().to_string()
    } else {
        format!("{}/{}", property.survey_number.trim(), property.subdivision.trim())
    };

    let mut text = format!("{number}. {}, சர்வே எண் {survey}", location.join(", "));
    if !property.extent.trim().is_empty() {
        text.push_str(&format!(", விஸ்தீரணம் {}", property.extent.trim()));
    }

    let boundaries: Vec<String> = [
        ("வடக்கு", &property.north),
        ("தெற்கு", &property.south),
        ("கிழக்கு", &property.east),
        ("மேற்கு", &property.west),
    ]
    .iter()
    .filter(|(_, value)| !value.trim().is_empty())
    .map(|(direction, value)| format!("{direction}: {}", value.trim()))
    .collect();
    if !boundaries.is_empty() {
        text.push_str(&format!(". எல்லைகள் - {}", boundaries.join(", ")));
    }

    if !property.guide_value.trim().is_empty() {
        text.push_str(&format!(". வழிகாட்டு மதிப்பு {}", figures(&property.guide_value)));
    }
    text.push('.');
    text
}

/// Signature block: principal signatures, witnesses and the typist line.
pub(crate) fn signature_paragraphs(
    signers: &[(&str, &[Party])],
    witnesses: &[Party],
    attribution: &Attribution,
) -> Vec<Paragraph> {
    let mut paragraphs: Vec<Paragraph> = signers
        .iter()
        .flat_map(|(label, parties)| {
            parties
                .iter()
                .map(move |party| Paragraph::signature(format!("{label}: {}", party.name.trim())))
        })
        .collect();

    if !witnesses.is_empty() {
        paragraphs.push(Paragraph::body("சாட்சிகள்:"));
        paragraphs.extend(witnesses.iter().enumerate().map(|(index, witness)| {
            Paragraph::body(format!("{}. {}", index + 1, describe_party(witness)))
        }));
    }

    let typist = non_empty(&[&attribution.typist_name, &attribution.typist_office]);
    if !typist.is_empty() {
        paragraphs.push(Paragraph::signature(format!(
            "கணினியில் தட்டச்சு செய்தவர்: {}",
            typist.join(", ")
        )));
    }
    if !attribution.sro_office.trim().is_empty() {
        paragraphs.push(Paragraph::signature(format!(
            "பதிவு அலுவலகம்: {} சார்பதிவாளர் அலுவலகம்",
            attribution.sro_office.trim()
        )));
    }
    paragraphs
}
