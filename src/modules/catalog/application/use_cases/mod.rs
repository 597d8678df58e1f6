pub mod get_catalog_entry_by_isbn;
pub mod update_catalog_entry;
