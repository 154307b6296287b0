//! APIクライアント

pub mod roster;

pub use roster::FetchRosterSource;
