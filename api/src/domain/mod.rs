//! Domain layer
//!
//! - `entities`: the recipe records read from the table store
//! - `ports`: the store query capability the feed is built on

pub mod entities;
pub mod ports;
