pub mod links;

pub use links::WhatsAppLinks;
