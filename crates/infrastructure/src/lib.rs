//! Ferrous TXT Infrastructure Layer
pub mod dns;
