//! Currency amounts in words for deed boilerplate ("Rupees ___ only").
//!
//! Both languages use the Indian numbering system (crore, lakh, thousand,
//! hundred). The output is shown live while the user types, so every input
//! yields a string: zero renders as the zero word, and negative, non-finite or
//! non-numeric input renders as the language's fallback. Bare words cover whole
//! numbers only; the currency phrase also spells paise.

use crate::core::amounts::parse_amount;

/// Largest amount rendered in words; beyond this the fallback is returned.
pub const MAX_WORDS_AMOUNT: f64 = 999_999_999_999_999.0;

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;

/// Indian numbering scales above hundreds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Thousand,
    Lakh,
    Crore,
}

/// A language that can spell whole rupee amounts.
pub trait NumberWords {
    /// Word for zero
    fn zero(&self) -> &'static str;

    /// Returned for input that cannot be spelled
    fn fallback(&self) -> &'static str;

    /// Spells `1..=999`.
    fn below_thousand(&self, n: u64) -> String;

    /// Spells `count` units of `scale`, in combining form when more words follow.
    fn scale(&self, scale: Scale, count: u64, followed: bool) -> String;

    /// Wraps spelled words in the currency phrase.
    fn rupees(&self, words: &str) -> String;

    /// Currency phrase for rupees followed by paise.
    fn rupees_and_paise(&self, rupees: &str, paise: &str) -> String;

    /// Spells any positive whole number.
    fn integer(&self, n: u64) -> String {
        let crore = n / CRORE;
        let lakh = (n / LAKH) % 100;
        let thousand = (n / THOUSAND) % 100;
        let rest = n % THOUSAND;

        let mut parts = Vec::new();
        if crore > 0 {
            parts.push(self.scale(Scale::Crore, crore, n % CRORE > 0));
        }
        if lakh > 0 {
            parts.push(self.scale(Scale::Lakh, lakh, n % LAKH > 0));
        }
        if thousand > 0 {
            parts.push(self.scale(Scale::Thousand, thousand, rest > 0));
        }
        if rest > 0 {
            parts.push(self.below_thousand(rest));
        }
        parts.join(" ")
    }
}

/// Tamil number words as used in registered deeds
#[derive(Debug, Clone, Copy, Default)]
pub struct Tamil;

const TA_UNITS: [&str; 10] = [
    "", "ஒன்று", "இரண்டு", "மூன்று", "நான்கு", "ஐந்து", "ஆறு", "ஏழு", "எட்டு", "ஒன்பது",
];
const TA_TEENS: [&str; 10] = [
    "பத்து",
    "பதினொன்று",
    "பன்னிரண்டு",
    "பதின்மூன்று",
    "பதினான்கு",
    "பதினைந்து",
    "பதினாறு",
    "பதினேழு",
    "பதினெட்டு",
    "பத்தொன்பது",
];
const TA_TENS: [&str; 10] = [
    "", "", "இருபது", "முப்பது", "நாற்பது", "ஐம்பது", "அறுபது", "எழுபது", "எண்பது", "தொண்ணூறு",
];
const TA_TENS_JOINED: [&str; 10] = [
    "",
    "",
    "இருபத்து",
    "முப்பத்து",
    "நாற்பத்து",
    "ஐம்பத்து",
    "அறுபத்து",
    "எழுபத்து",
    "எண்பத்து",
    "தொண்ணூற்று",
];
const TA_HUNDREDS: [&str; 10] = [
    "",
    "நூறு",
    "இருநூறு",
    "முந்நூறு",
    "நானூறு",
    "ஐநூறு",
    "அறுநூறு",
    "எழுநூறு",
    "எண்ணூறு",
    "தொள்ளாயிரம்",
];
const TA_HUNDREDS_JOINED: [&str; 10] = [
    "",
    "நூற்று",
    "இருநூற்று",
    "முந்நூற்று",
    "நானூற்று",
    "ஐநூற்று",
    "அறுநூற்று",
    "எழுநூற்று",
    "எண்ணூற்று",
    "தொள்ளாயிரத்து",
];

#[allow(clippy::cast_possible_truncation)] // indices are always < 10
fn tamil_below_hundred(n: u64) -> String {
    match n {
        0..=9 => TA_UNITS[n as usize].to_string(),
        10..=19 => TA_TEENS[(n - 10) as usize].to_string(),
        _ if n % 10 == 0 => TA_TENS[(n / 10) as usize].to_string(),
        _ => format!(
            "{} {}",
            TA_TENS_JOINED[(n / 10) as usize],
            TA_UNITS[(n % 10) as usize]
        ),
    }
}

impl NumberWords for Tamil {
    fn zero(&self) -> &'static str {
        "பூஜ்ஜியம்"
    }

    fn fallback(&self) -> &'static str {
        "தவறான தொகை"
    }

    #[allow(clippy::cast_possible_truncation)]
    fn below_thousand(&self, n: u64) -> String {
        let hundreds = (n / 100) as usize;
        let rest = n % 100;
        match (hundreds, rest) {
            (0, _) => tamil_below_hundred(rest),
            (_, 0) => TA_HUNDREDS[hundreds].to_string(),
            _ => format!("{} {}", TA_HUNDREDS_JOINED[hundreds], tamil_below_hundred(rest)),
        }
    }

    fn scale(&self, scale: Scale, count: u64, followed: bool) -> String {
        let unit = match (scale, followed) {
            (Scale::Thousand, false) => "ஆயிரம்",
            (Scale::Thousand, true) => "ஆயிரத்து",
            (Scale::Lakh, false) => "லட்சம்",
            (Scale::Lakh, true) => "லட்சத்து",
            (Scale::Crore, false) => "கோடி",
            (Scale::Crore, true) => "கோடியே",
        };

        match (scale, count) {
            (Scale::Thousand, 1) => unit.to_string(),
            (_, 1) => format!("ஒரு {unit}"),
            _ => format!("{} {unit}", self.integer(count)),
        }
    }

    fn rupees(&self, words: &str) -> String {
        format!("ரூபாய் {words} மட்டும்")
    }

    fn rupees_and_paise(&self, rupees: &str, paise: &str) -> String {
        format!("ரூபாய் {rupees} {paise} பைசா மட்டும்")
    }
}

/// English words in the Indian numbering system
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

const EN_UNITS: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];
const EN_TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

impl NumberWords for English {
    fn zero(&self) -> &'static str {
        "Zero"
    }

    fn fallback(&self) -> &'static str {
        "Invalid amount"
    }

    #[allow(clippy::cast_possible_truncation)]
    fn below_thousand(&self, n: u64) -> String {
        let hundreds = (n / 100) as usize;
        let rest = (n % 100) as usize;

        let mut parts = Vec::new();
        if hundreds > 0 {
            parts.push(format!("{} Hundred", EN_UNITS[hundreds]));
        }
        match rest {
            0 => {}
            1..=19 => parts.push(EN_UNITS[rest].to_string()),
            _ if rest % 10 == 0 => parts.push(EN_TENS[rest / 10].to_string()),
            _ => parts.push(format!("{} {}", EN_TENS[rest / 10], EN_UNITS[rest % 10])),
        }
        parts.join(" ")
    }

    fn scale(&self, scale: Scale, count: u64, _followed: bool) -> String {
        let unit = match scale {
            Scale::Thousand => "Thousand",
            Scale::Lakh => "Lakh",
            Scale::Crore => "Crore",
        };
        format!("{} {unit}", self.integer(count))
    }

    fn rupees(&self, words: &str) -> String {
        format!("Rupees {words} Only")
    }

    fn rupees_and_paise(&self, rupees: &str, paise: &str) -> String {
        format!("Rupees {rupees} and {paise} Paise Only")
    }
}

/// Whole rupees for `amount`, or `None` when it cannot be spelled.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_rupees(amount: f64) -> Option<u64> {
    if !amount.is_finite() || amount < 0.0 || amount > MAX_WORDS_AMOUNT || amount.fract() != 0.0 {
        return None;
    }
    Some(amount as u64)
}

/// Rupees and paise of `amount`, rounded to the nearest paisa.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn rupees_and_paise(amount: f64) -> Option<(u64, u64)> {
    if !amount.is_finite() || amount < 0.0 || amount > MAX_WORDS_AMOUNT {
        return None;
    }
    let paise = (amount * 100.0).round() as u64;
    Some((paise / 100, paise % 100))
}

fn spell<L: NumberWords>(language: &L, n: u64) -> String {
    if n == 0 {
        language.zero().to_string()
    } else {
        language.integer(n)
    }
}

/// Spells `amount` in `language`.
#[must_use]
pub fn words_for<L: NumberWords>(language: &L, amount: f64) -> String {
    whole_rupees(amount).map_or_else(|| language.fallback().to_string(), |n| spell(language, n))
}

/// Spells `amount` inside the currency phrase, paise included; invalid input
/// yields the bare fallback.
#[must_use]
pub fn rupees_for<L: NumberWords>(language: &L, amount: f64) -> String {
    match rupees_and_paise(amount) {
        None => language.fallback().to_string(),
        Some((rupees, 0)) => language.rupees(&spell(language, rupees)),
        Some((rupees, paise)) => {
            language.rupees_and_paise(&spell(language, rupees), &language.below_thousand(paise))
        }
    }
}

/// Tamil words for `amount`.
#[must_use]
pub fn amount_in_words(amount: f64) -> String {
    words_for(&Tamil, amount)
}

/// Tamil words for an amount as typed into a form.
#[must_use]
pub fn amount_in_words_str(value: &str) -> String {
    parse_amount(value).map_or_else(|| Tamil.fallback().to_string(), amount_in_words)
}

/// Tamil currency phrase, e.g. `ரூபாய் ஐநூறு மட்டும்`.
#[must_use]
pub fn rupees_in_words(amount: f64) -> String {
    rupees_for(&Tamil, amount)
}

/// English currency phrase, e.g. `Rupees Five Hundred Only`.
#[must_use]
pub fn english_rupees_in_words(amount: f64) -> String {
    rupees_for(&English, amount)
}
