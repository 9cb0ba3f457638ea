pub mod schemaextension_remove;
