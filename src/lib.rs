pub mod ingest;
pub mod responder;
pub mod store;
pub mod types;
pub mod ui;
pub mod views;
