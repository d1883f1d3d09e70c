//! Reference data lookups - the cascading district → taluk → village lists
//! behind the address and property dropdowns, plus Sub-Registrar Offices.
//!
//! Seeding copies the hierarchy declared in config.toml into the lookup
//! tables. It is idempotent: names that already exist at a level are reused
//! and only missing rows are inserted, so it runs safely on every start.

use crate::{
    config::ReferenceConfig,
    entities::{
        District, SubRegistrarOffice, Taluk, Village, district, sub_registrar_office, taluk,
        village,
    },
    errors::Result,
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{debug, info};

/// Counts of rows inserted by [`seed_reference_data`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub districts: usize,
    pub taluks: usize,
    pub villages: usize,
    pub offices: usize,
}

/// All districts, alphabetically.
pub async fn list_districts(db: &DatabaseConnection) -> Result<Vec<district::Model>> {
    District::find()
        .order_by_asc(district::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Taluks of one district, alphabetically.
pub async fn list_taluks(db: &DatabaseConnection, district_id: i64) -> Result<Vec<taluk::Model>> {
    debug!(district_id, "Listing taluks");
    Taluk::find()
        .filter(taluk::Column::DistrictId.eq(district_id))
        .order_by_asc(taluk::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Villages of one taluk, alphabetically.
pub async fn list_villages(db: &DatabaseConnection, taluk_id: i64) -> Result<Vec<village::Model>> {
    debug!(taluk_id, "Listing villages");
    Village::find()
        .filter(village::Column::TalukId.eq(taluk_id))
        .order_by_asc(village::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Sub-Registrar Offices, optionally limited to one district, alphabetically.
pub async fn list_sub_registrar_offices(
    db: &DatabaseConnection,
    district_id: Option<i64>,
) -> Result<Vec<sub_registrar_office::Model>> {
    let mut query = SubRegistrarOffice::find();
    if let Some(district_id) = district_id {
        query = query.filter(sub_registrar_office::Column::DistrictId.eq(district_id));
    }
    query
        .order_by_asc(sub_registrar_office::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Inserts any reference rows from `config` that are not in the database yet.
pub async fn seed_reference_data(
    db: &DatabaseConnection,
    config: &ReferenceConfig,
) -> Result<SeedSummary> {
    let txn = db.begin().await?;
    let mut summary = SeedSummary::default();

    for district_config in &config.districts {
        let name = district_config.name.trim();
        let district_id = match District::find()
            .filter(district::Column::Name.eq(name))
            .one(&txn)
            .await?
        {
            Some(existing) => existing.id,
            None => {
                let inserted = district::ActiveModel {
                    name: Set(name.to_string()),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
                summary.districts += 1;
                info!("Seeded district '{}'", name);
                inserted.id
            }
        };

        for taluk_config in &district_config.taluks {
            let taluk_name = taluk_config.name.trim();
            let taluk_id = match Taluk::find()
                .filter(taluk::Column::DistrictId.eq(district_id))
                .filter(taluk::Column::Name.eq(taluk_name))
                .one(&txn)
                .await?
            {
                Some(existing) => existing.id,
                None => {
                    summary.taluks += 1;
                    taluk::ActiveModel {
                        district_id: Set(district_id),
                        name: Set(taluk_name.to_string()),
                        ..Default::default()
                    }
                    .insert(&txn)
                    .await?
                    .id
                }
            };

            for village_name in &taluk_config.villages {
                let village_name = village_name.trim();
                let exists = Village::find()
                    .filter(village::Column::TalukId.eq(taluk_id))
                    .filter(village::Column::Name.eq(village_name))
                    .one(&txn)
                    .await?
                    .is_some();
                if !exists {
                    village::ActiveModel {
                        taluk_id: Set(taluk_id),
                        name: Set(village_name.to_string()),
                        ..Default::default()
                    }
                    .insert(&txn)
                    .await?;
                    summary.villages += 1;
                }
            }
        }
    }

    for office_config in &config.sub_registrar_offices {
        // The district was declared (checked at config load) and seeded above.
        let Some(office_district) = District::find()
            .filter(district::Column::Name.eq(office_config.district.trim()))
            .one(&txn)
            .await?
        else {
            continue;
        };

        let exists = SubRegistrarOffice::find()
            .filter(sub_registrar_office::Column::DistrictId.eq(office_district.id))
            .filter(sub_registrar_office::Column::Name.eq(office_config.name.trim()))
            .one(&txn)
            .await?
            .is_some();
        if !exists {
            sub_registrar_office::ActiveModel {
                district_id: Set(office_district.id),
                name: Set(office_config.name.trim().to_string()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            summary.offices += 1;
        }
    }

    txn.commit().await?;
    info!(
        districts = summary.districts,
        taluks = summary.taluks,
        villages = summary.villages,
        offices = summary.offices,
        "Reference data seeded"
    );
    Ok(summary)
}
