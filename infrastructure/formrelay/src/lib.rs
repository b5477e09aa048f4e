pub mod client;
pub mod relay;

pub use client::FormRelayClient;
pub use relay::EnquiryRelayFormRelay;
