//! Shared list-query contract: every list endpoint accepts the same
//! declarative filter/sort/pagination request and answers with the same
//! paginated envelope.

pub mod entities;
pub mod errors;
pub mod normalizer;
pub mod ports;
pub mod schema;
pub mod services;
