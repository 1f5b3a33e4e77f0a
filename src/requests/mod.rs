//! Per-customer service requests and the two-party handshake channel.

mod rendezvous;
mod request;

pub use rendezvous::Rendezvous;
pub use request::{CustomerRequest, Transaction};
