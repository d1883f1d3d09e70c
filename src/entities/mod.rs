//! Entity module - Contains all SeaORM entity definitions for the database.
//! Document tables hold drafted deeds; reference tables hold the district,
//! taluk, village and Sub-Registrar Office lists that feed the form dropdowns.

pub mod district;
pub mod document;
pub mod party;
pub mod payment;
pub mod prior_document;
pub mod property;
pub mod sub_registrar_office;
pub mod taluk;
pub mod village;

// Re-export specific types to avoid conflicts
pub use district::{Column as DistrictColumn, Entity as District, Model as DistrictModel};
pub use document::{Column as DocumentColumn, Entity as Document, Model as DocumentModel};
pub use party::{Column as PartyColumn, Entity as Party, Model as PartyModel};
pub use payment::{Column as PaymentColumn, Entity as Payment, Model as PaymentModel};
pub use prior_document::{
    Column as PriorDocumentColumn, Entity as PriorDocument, Model as PriorDocumentModel,
};
pub use property::{Column as PropertyColumn, Entity as Property, Model as PropertyModel};
pub use sub_registrar_office::{
    Column as SubRegistrarOfficeColumn, Entity as SubRegistrarOffice,
    Model as SubRegistrarOfficeModel,
};
pub use taluk::{Column as TalukColumn, Entity as Taluk, Model as TalukModel};
pub use village::{Column as VillageColumn, Entity as Village, Model as VillageModel};
