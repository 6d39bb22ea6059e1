pub mod dispatcher;
pub mod name_enricher;
pub mod quotation_builder;
