pub mod action;
pub mod error;
pub mod ids;
pub mod money;
