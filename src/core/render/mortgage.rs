use super::{
    Paragraph, RenderedDocument, amount_phrase, display_date, party_paragraphs,
    prior_document_paragraphs, schedule_paragraphs, signature_paragraphs,
};
use crate::core::model::MortgageDeed;

const TITLE: &str = "அடமானப் பத்திரம்";

/// Renders a mortgage deed.
#[must_use]
pub fn render_mortgage_deed(deed: &MortgageDeed) -> RenderedDocument {
    let body = &deed.body;
    let date = display_date(&body.document_date);

    let mut paragraphs = vec![Paragraph::heading(TITLE)];
    paragraphs.push(Paragraph::body(format!(
        "{date} ஆம் தேதியில் எழுதிக் கொடுக்கப்பட்ட அடமானப் பத்திரம்."
    )));
    paragraphs.extend(party_paragraphs("அடமானம் வைப்பவர்(கள்)", &deed.borrowers));
    paragraphs.extend(party_paragraphs("அடமானம் பெறுபவர்(கள்)", &deed.lenders));

    paragraphs.push(Paragraph::body(
        "அடமானம் வைப்பவர்கள் அடமானம் பெறுபவர்களுக்கு எழுதிக் கொடுத்த அடமானப் பத்திரம் என்னவென்றால்:",
    ));
    paragraphs.extend(prior_document_paragraphs(&body.prior_documents));

    paragraphs.push(Paragraph::body(format!(
        "எங்களது குடும்பச் செலவுகளுக்காக உங்களிடம் {} கடனாகப் பெற்றுக் கொண்டு, கீழ்க்கண்ட சொத்தை உங்களுக்கு அடமானம் செய்து கொடுக்கிறோம்.",
        amount_phrase(&body.amount, &body.amount_in_words)
    )));
    paragraphs.push(Paragraph::body(format!(
        "மேற்படி கடன் தொகைக்கு நூறு ரூபாய்க்கு மாதம் ஒன்றுக்கு {} ரூபாய் வீதம் வட்டி செலுத்துவதுடன், இன்று முதல் {} மாதங்களுக்குள் அசலையும் வட்டியையும் முழுமையாகச் செலுத்தி அடமானத்தை மீட்டுக் கொள்கிறோம்.",
        deed.interest_rate.trim(),
        deed.tenure_months.trim()
    )));
    paragraphs.push(Paragraph::body(
        "குறித்த காலத்திற்குள் தொகையைச் செலுத்தத் தவறினால், மேற்படி சொத்தைக் கொண்டு உங்கள் தொகையைச் சட்டப்படி வசூலித்துக் கொள்ள உங்களுக்கு முழு உரிமை உண்டு. மேற்படி சொத்தின் பேரில் வேறு எவ்வித வில்லங்கமும் இல்லை என்று உறுதி கூறுகிறோம்.",
    ));

    paragraphs.extend(schedule_paragraphs(body));
    paragraphs.extend(signature_paragraphs(
        &[("அடமானம் வைப்பவர் கையொப்பம்", deed.borrowers.as_slice())],
        &body.witnesses,
        &body.attribution,
    ));

    RenderedDocument {
        title: TITLE.to_string(),
        paragraphs,
    }
}
