/// Currency parsing, reconciliation tolerance and display formatting
pub mod amounts;
/// Form date parsing and `dd/mm/yyyy` display
pub mod dates;
/// Save, update, fetch, list and delete drafted documents
pub mod documents;
/// Print view HTML and Word export
pub mod export;
/// Form data types for the three document kinds
pub mod model;
/// District, taluk, village and Sub-Registrar Office lookups
pub mod reference;
/// Tamil deed templates
pub mod render;
/// Cross-field form validation
pub mod validation;
/// Amounts in Tamil and English words
pub mod words;
