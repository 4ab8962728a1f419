//! Personal bookkeeping ledger: debit/credit entries against named parties,
//! derived running totals, and local JSON persistence. No network, no server.
//!
//! The crate is the application model behind an interactive front end. All
//! state lives in [`app::App`]; a UI drives it by feeding
//! [`common::action::Action`] values to [`app::App::apply`] and rendering the
//! returned [`common::action::Outcome`] together with the accessors.

pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod worker;
