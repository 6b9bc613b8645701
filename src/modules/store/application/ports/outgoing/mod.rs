mod document_store;

pub use document_store::{validate_field_name, DocumentStore, StoreError};
