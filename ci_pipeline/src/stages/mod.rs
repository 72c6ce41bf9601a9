//! Pipeline stages, one per CI gate.

pub mod check;
pub mod integration;
pub mod lint;
pub mod security;
pub mod test;
