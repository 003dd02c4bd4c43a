pub mod analyzers;
pub mod config;
pub mod error;
pub mod ledger;
pub mod output;
pub mod session;
