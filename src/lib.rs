//! This crate drives a smoke test against a local Candlepin `test` resource.
//!
//! The sequence creates one object with a JSON POST and then reads three resources
//! back with GET requests, printing what the server answers. Requests go through
//! `attohttpc`, one blocking connection per request.
//!
//! # Quick start
//! ```no_run
//! fn main() -> testapi_smoke::Result {
//!     testapi_smoke::SmokeTest::new().run(std::io::stdout())
//! }
//! ```

#[macro_use]
extern crate log;

pub mod fixture;
pub mod smoke;

pub use attohttpc::{Error, ErrorKind, Result};

pub use crate::fixture::{ChildRecord, ParentRecord};
pub use crate::smoke::{SmokeTest, Step, StepKind};
