use super::{
    Paragraph, RenderedDocument, amount_phrase, display_date, figures, party_paragraphs,
    prior_document_paragraphs, schedule_paragraphs, signature_paragraphs,
};
use crate::core::{
    amounts::{format_amount, parse_amount},
    model::SaleAgreement,
};

const TITLE: &str = "கிரைய ஒப்பந்தப் பத்திரம்";

/// Renders an agreement to sell.
#[must_use]
pub fn render_sale_agreement(agreement: &SaleAgreement) -> RenderedDocument {
    let body = &agreement.body;
    let date = display_date(&body.document_date);

    let mut paragraphs = vec![Paragraph::heading(TITLE)];
    paragraphs.push(Paragraph::body(format!(
        "{date} ஆம் தேதியில் எழுதிக் கொண்ட கிரைய ஒப்பந்தம்."
    )));
    paragraphs.extend(party_paragraphs("விற்பவர்(கள்)", &agreement.sellers));
    paragraphs.extend(party_paragraphs("வாங்குபவர்(கள்)", &agreement.buyers));

    paragraphs.push(Paragraph::body(
        "மேற்படி இருதரப்பினரும் சேர்ந்து எழுதிக் கொண்ட கிரைய ஒப்பந்தம் என்னவென்றால்:",
    ));
    paragraphs.extend(prior_document_paragraphs(&body.prior_documents));

    paragraphs.push(Paragraph::body(format!(
        "கீழ்க்கண்ட சொத்தை {} க்கு விற்பனை செய்வதாக இருதரப்பினரும் ஒப்புக் கொண்டுள்ளோம்.",
        amount_phrase(&body.amount, &body.amount_in_words)
    )));

    let completion = display_date(&agreement.completion_date);
    match (
        parse_amount(&body.amount),
        parse_amount(&agreement.advance_amount),
    ) {
        (Some(total), Some(advance)) => {
            let balance = format_amount(total - advance);
            paragraphs.push(Paragraph::body(format!(
                "இன்றைய தேதியில் முன்பணமாக {} பெற்றுக் கொள்ளப்பட்டது. மீதத் தொகை {} ஐ {completion} ஆம் தேதிக்குள் செலுத்தி, வாங்குபவர் பெயருக்குக் கிரையம் செய்து கொள்ள வேண்டியது.",
                amount_phrase(&agreement.advance_amount, ""),
                amount_phrase(&balance, ""),
            )));
        }
        _ => paragraphs.push(Paragraph::body(format!(
            "முழுத் தொகை {} ஐ {completion} ஆம் தேதிக்குள் செலுத்தி, வாங்குபவர் பெயருக்குக் கிரையம் செய்து கொள்ள வேண்டியது.",
            figures(&body.amount)
        ))),
    }

    paragraphs.push(Paragraph::body(
        "குறித்த தேதிக்குள் வாங்குபவர் மீதத் தொகையைச் செலுத்தத் தவறினால் முன்பணம் திருப்பித் தரப்பட மாட்டாது. விற்பவர் கிரையம் செய்து கொடுக்கத் தவறினால் முன்பணத்தை இரு மடங்காகத் திருப்பித் தர வேண்டியது.",
    ));

    paragraphs.extend(schedule_paragraphs(body));
    paragraphs.extend(signature_paragraphs(
        &[
            ("விற்பவர் கையொப்பம்", agreement.sellers.as_slice()),
            ("வாங்குபவர் கையொப்பம்", agreement.buyers.as_slice()),
        ],
        &body.witnesses,
        &body.attribution,
    ));

    RenderedDocument {
        title: TITLE.to_string(),
        paragraphs,
    }
}
