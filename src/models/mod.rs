//! Domain models for examination data
//!
//! The whole pipeline shares a single [`ExaminationTable`]: one Arrow record
//! batch with one row per examined subject.

pub mod examination;

pub use examination::ExaminationTable;
