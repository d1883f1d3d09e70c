//! Shared test utilities for `DeedDrafter`.
//!
//! This module provides the in-memory database setup and sample forms with
//! sensible defaults. Every sample validates cleanly against a `today` of
//! 20/06/2024, so a test only needs to change the field it is about.

use crate::{
    config::reference::{DistrictConfig, ReferenceConfig, SubRegistrarOfficeConfig, TalukConfig},
    core::model::{
        Attribution, DocumentBody, MortgageDeed, Party, Payment, PaymentMethod, Property,
        RelationType, SaleAgreement, SaleDeed,
    },
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Installs a test subscriber once so `tracing` output shows up with `--nocapture`.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("deed_drafter=debug")
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a valid party.
///
/// # Defaults
/// * `relation_type`: son of
/// * `relation_name`: "சுப்பிரமணியன்"
/// * address in Madurai, pincode 625001
/// * `phone`: "9876543210"
/// * `aadhaar_number`: empty
pub fn sample_party(name: &str, age: &str) -> Party {
    Party {
        name: name.to_string(),
        age: age.to_string(),
        relation_type: RelationType::SonOf,
        relation_name: "சுப்பிரமணியன்".to_string(),
        address_line1: "12, மேலமாசி வீதி".to_string(),
        address_line2: String::new(),
        address_line3: String::new(),
        taluk: "மதுரை வடக்கு".to_string(),
        district: "மதுரை".to_string(),
        pincode: "625001".to_string(),
        aadhaar_number: String::new(),
        phone: "9876543210".to_string(),
    }
}

fn sample_property() -> Property {
    Property {
        district: "மதுரை".to_string(),
        taluk: "மதுரை வடக்கு".to_string(),
        village: "ஆனையூர்".to_string(),
        survey_number: "112".to_string(),
        subdivision: "3B".to_string(),
        extent: "0.25 ஏக்கர்".to_string(),
        north: "ராஜன் நிலம்".to_string(),
        south: "பொதுப் பாதை".to_string(),
        east: "கால்வாய்".to_string(),
        west: "சர்வே எண் 113".to_string(),
        guide_value: String::new(),
    }
}

/// Shared document fields dated `date` for `amount`.
///
/// # Defaults
/// * one schedule row (survey 112/3B) plus a free-text description
/// * one witness
/// * typist "செல்வி" of "மதுரை ஆவண எழுத்தர் அலுவலகம்"
/// * no prior documents
pub fn sample_body(date: &str, amount: &str) -> DocumentBody {
    DocumentBody {
        document_date: date.to_string(),
        amount: amount.to_string(),
        amount_in_words: String::new(),
        property_description: "ஆனையூர் கிராமத்தில் உள்ள புன்செய் நிலம்".to_string(),
        prior_documents: vec![],
        properties: vec![sample_property()],
        witnesses: vec![sample_party("கண்ணன்", "52")],
        attribution: Attribution {
            typist_name: "செல்வி".to_string(),
            typist_office: "மதுரை ஆவண எழுத்தர் அலுவலகம்".to_string(),
            sro_office: "தல்லாகுளம்".to_string(),
        },
    }
}

/// Creates a valid sale deed: 15/06/2024, ₹2,50,000 paid in one cash payment.
pub fn sample_sale_deed() -> SaleDeed {
    SaleDeed {
        body: sample_body("15/06/2024", "250000"),
        sellers: vec![sample_party("முருகன்", "45")],
        buyers: vec![sample_party("சரவணன்", "38")],
        payments: vec![Payment {
            amount: "250000".to_string(),
            method: PaymentMethod::Cash,
        }],
    }
}

/// Creates a valid mortgage deed: 10/06/2024, ₹1,00,000 at 1.5 for 12 months.
pub fn sample_mortgage_deed() -> MortgageDeed {
    MortgageDeed {
        body: sample_body("10/06/2024", "100000"),
        borrowers: vec![sample_party("ராமசாமி", "50")],
        lenders: vec![sample_party("பாண்டியன்", "60")],
        interest_rate: "1.5".to_string(),
        tenure_months: "12".to_string(),
    }
}

/// Creates a valid sale agreement: 15/06/2024, ₹5,00,000 with ₹1,00,000
/// advance, to be completed by 15/09/2024.
pub fn sample_sale_agreement() -> SaleAgreement {
    SaleAgreement {
        body: sample_body("15/06/2024", "500000"),
        sellers: vec![sample_party("முருகன்", "45")],
        buyers: vec![sample_party("சரவணன்", "38")],
        advance_amount: "100000".to_string(),
        completion_date: "15/09/2024".to_string(),
    }
}

/// Two districts, three taluks, four villages and two offices.
pub fn sample_reference_config() -> ReferenceConfig {
    ReferenceConfig {
        districts: vec![
            DistrictConfig {
                name: "Madurai".to_string(),
                taluks: vec![
                    TalukConfig {
                        name: "Madurai North".to_string(),
                        villages: vec!["Koodal Nagar".to_string(), "Anaiyur".to_string()],
                    },
                    TalukConfig {
                        name: "Melur".to_string(),
                        villages: vec![],
                    },
                ],
            },
            DistrictConfig {
                name: "Theni".to_string(),
                taluks: vec![TalukConfig {
                    name: "Periyakulam".to_string(),
                    villages: vec!["Vadugapatti".to_string(), "Thamaraikulam".to_string()],
                }],
            },
        ],
        sub_registrar_offices: vec![
            SubRegistrarOfficeConfig {
                name: "Thallakulam".to_string(),
                district: "Madurai".to_string(),
            },
            SubRegistrarOfficeConfig {
                name: "Periyakulam".to_string(),
                district: "Theni".to_string(),
            },
        ],
    }
}
