//! Live number-to-words endpoint used while the amount field is typed.

use crate::{
    api::{AppState, extract::Query, response::ApiResponse},
    core::{
        amounts::parse_amount,
        words::{English, NumberWords, Tamil, rupees_for, words_for},
    },
};
use axum::{
    Router,
    response::Json as ResponseJson,
    routing::get,
};
use serde::{Deserialize, Serialize};

/// `?amount=` as typed
#[derive(Debug, Deserialize)]
pub struct WordsQuery {
    #[serde(default)]
    pub amount: String,
}

/// Spelled forms of one amount
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountWords {
    pub amount: String,
    pub tamil: String,
    pub english: String,
    /// `ரூபாய் … மட்டும்`
    pub tamil_rupees: String,
    /// `Rupees … Only`
    pub english_rupees: String,
}

fn spell<L: NumberWords>(language: &L, amount: Option<f64>, phrase: bool) -> String {
    match amount {
        None => language.fallback().to_string(),
        Some(amount) if phrase => rupees_for(language, amount),
        Some(amount) => words_for(language, amount),
    }
}

/// GET /api/words?amount=
/// Never fails: unusable input comes back as each language's fallback
pub async fn amount_words(Query(query): Query<WordsQuery>) -> ResponseJson<ApiResponse<AmountWords>> {
    let parsed = parse_amount(&query.amount);
    ResponseJson(ApiResponse::success(AmountWords {
        tamil: spell(&Tamil, parsed, false),
        english: spell(&English, parsed, false),
        tamil_rupees: spell(&Tamil, parsed, true),
        english_rupees: spell(&English, parsed, true),
        amount: query.amount,
    }))
}

/// Routes under `/api/words`
pub fn router() -> Router<AppState> {
    Router::new().route("/words", get(amount_words))
}
