pub mod analysis;
pub mod catalog;
pub mod config;
pub mod consts;
pub mod error;
pub mod measurements;
pub mod session;
pub mod site;
pub mod viewport;
