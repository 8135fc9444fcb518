//! GraphQL transport and wire documents for the IPLM API

mod client;
mod mutations;
mod queries;
mod transport;

pub use client::*;
pub use mutations::*;
pub use queries::*;
pub use transport::*;
