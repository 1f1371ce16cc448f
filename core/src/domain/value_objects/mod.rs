//! Value objects shared between the domain and the API layer

pub mod session;

pub use session::SessionTokens;
