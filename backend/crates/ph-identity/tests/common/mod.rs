#![allow(dead_code)]

mod delivery;
mod harness;
mod test_db;

pub use delivery::*;
pub use harness::*;
pub use test_db::*;
