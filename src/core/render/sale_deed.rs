use super::{
    Paragraph, RenderedDocument, amount_phrase, display_date, figures, party_paragraphs,
    prior_document_paragraphs, schedule_paragraphs, signature_paragraphs,
};
use crate::core::model::{Payment, PaymentMethod, SaleDeed};

const TITLE: &str = "கிரைய சாசனம்";

/// Renders an absolute sale deed.
#[must_use]
pub fn render_sale_deed(deed: &SaleDeed) -> RenderedDocument {
    let body = &deed.body;
    let date = display_date(&body.document_date);

    let mut paragraphs = vec![Paragraph::heading(TITLE)];
    paragraphs.push(Paragraph::body(format!(
        "{date} ஆம் தேதியில் எழுதிக் கொடுக்கப்பட்ட சுத்தக் கிரைய சாசனம்."
    )));
    paragraphs.extend(party_paragraphs("எழுதிக் கொடுப்பவர்(கள்)", &deed.sellers));
    paragraphs.extend(party_paragraphs("எழுதி வாங்குபவர்(கள்)", &deed.buyers));

    paragraphs.push(Paragraph::body(
        "எழுதிக் கொடுப்பவர்கள் எழுதி வாங்குபவர்களுக்கு எழுதிக் கொடுத்த சுத்தக் கிரைய சாசனம் என்னவென்றால்:",
    ));
    paragraphs.extend(prior_document_paragraphs(&body.prior_documents));

    paragraphs.push(Paragraph::body(format!(
        "மேற்படி சொத்தை உங்களுக்கு {} க்குக் கிரையம் பேசி, அத்தொகையைக் கீழ்க்கண்டவாறு முழுமையாகப் பெற்றுக் கொண்டோம்:",
        amount_phrase(&body.amount, &body.amount_in_words)
    )));
    paragraphs.extend(
        deed.payments
            .iter()
            .enumerate()
            .map(|(index, payment)| Paragraph::body(format!("{}. {}", index + 1, describe_payment(payment)))),
    );

    paragraphs.push(Paragraph::body(
        "இன்று முதல் மேற்படி சொத்தை நீங்களே சர்வ சுதந்திர பாத்தியத்துடன் தானாதி வினிமய யோக்கியங்களுடன் ஆண்டு அனுபவித்துக் கொள்ள வேண்டியது. மேற்படி சொத்தின் பேரில் எவ்வித வில்லங்கமும் இல்லை என்றும், பின்னர் ஏதேனும் வில்லங்கம் ஏற்பட்டால் அதை எங்கள் சொந்தச் செலவில் சரி செய்து தருவோம் என்றும் உறுதி கூறுகிறோம்.",
    ));

    paragraphs.extend(schedule_paragraphs(body));
    paragraphs.extend(signature_paragraphs(
        &[("எழுதிக் கொடுப்பவர் கையொப்பம்", deed.sellers.as_slice())],
        &body.witnesses,
        &body.attribution,
    ));

    RenderedDocument {
        title: TITLE.to_string(),
        paragraphs,
    }
}

fn describe_payment(payment: &Payment) -> String {
    let amount = figures(&payment.amount);
    match &payment.method {
        PaymentMethod::Cash => format!("ரொக்கமாக {amount}"),
        PaymentMethod::Cheque(details) | PaymentMethod::DemandDraft(details) => {
            let instrument = if matches!(payment.method, PaymentMethod::Cheque(_)) {
                "காசோலை"
            } else {
                "வரைவோலை"
            };
            let branch = if details.branch.trim().is_empty() {
                String::new()
            } else {
                format!(" {} கிளை", details.branch.trim())
            };
            format!(
                "{}{branch} {instrument} எண் {}, நாள் {} மூலம் {amount}",
                details.bank_name.trim(),
                details.instrument_number.trim(),
                display_date(&details.instrument_date),
            )
        }
        PaymentMethod::Upi(details)
        | PaymentMethod::Neft(details)
        | PaymentMethod::Rtgs(details)
        | PaymentMethod::Imps(details) => format!(
            "{} மூலம் {} பரிவர்த்தனை எண் {}, நாள் {} வழியாக {amount}",
            details.bank_name.trim(),
            payment.method.label(),
            details.transaction_reference.trim(),
            display_date(&details.transaction_date),
        ),
    }
}
