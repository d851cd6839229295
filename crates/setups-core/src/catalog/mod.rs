//! Static reference data: the license allow-list and classifier catalogs.

pub mod classifiers;
pub mod licenses;

pub use classifiers::{ClassifierCategory, ClassifierSelection};
pub use licenses::{License, UnknownLicense, VALID_LICENSES};
