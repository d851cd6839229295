//! License allow-list.

use std::fmt;
use std::str::FromStr;

/// Accepted license identifiers, in the order they are shown to the user.
pub const VALID_LICENSES: [&str; 13] = [
    "MIT",
    "Apache-2.0",
    "GPL-3.0",
    "LGPL-3.0",
    "BSD-2-Clause",
    "BSD-3-Clause",
    "CC0-1.0",
    "MPL-2.0",
    "EPL-2.0",
    "AGPL-3.0",
    "MIT-0",
    "ISC",
    "Unlicense",
];

/// A license identifier that is guaranteed to be on the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum License {
    #[default]
    Mit,
    Apache2,
    Gpl3,
    Lgpl3,
    Bsd2Clause,
    Bsd3Clause,
    Cc0,
    Mpl2,
    Epl2,
    Agpl3,
    Mit0,
    Isc,
    Unlicense,
}

impl License {
    pub const ALL: [License; 13] = [
        License::Mit,
        License::Apache2,
        License::Gpl3,
        License::Lgpl3,
        License::Bsd2Clause,
        License::Bsd3Clause,
        License::Cc0,
        License::Mpl2,
        License::Epl2,
        License::Agpl3,
        License::Mit0,
        License::Isc,
        License::Unlicense,
    ];

    /// The identifier as typed by the user and written into `setup.py`.
    pub fn as_str(self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Apache2 => "Apache-2.0",
            License::Gpl3 => "GPL-3.0",
            License::Lgpl3 => "LGPL-3.0",
            License::Bsd2Clause => "BSD-2-Clause",
            License::Bsd3Clause => "BSD-3-Clause",
            License::Cc0 => "CC0-1.0",
            License::Mpl2 => "MPL-2.0",
            License::Epl2 => "EPL-2.0",
            License::Agpl3 => "AGPL-3.0",
            License::Mit0 => "MIT-0",
            License::Isc => "ISC",
            License::Unlicense => "Unlicense",
        }
    }

    /// Comma-separated allow-list, as shown in the retry message.
    pub fn allow_list() -> String {
        VALID_LICENSES.join(", ")
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not an allow-listed identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Invalid license type '{0}'. Please choose one of the valid licenses: {allowed}",
    allowed = License::allow_list()
)]
pub struct UnknownLicense(pub String);

impl FromStr for License {
    type Err = UnknownLicense;

    /// Exact, case-sensitive match against the allow-list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        License::ALL
            .into_iter()
            .find(|license| license.as_str() == s)
            .ok_or_else(|| UnknownLicense(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_LICENSE;

    #[test]
    fn all_matches_identifier_table() {
        let names: Vec<&str> = License::ALL.iter().map(|l| l.as_str()).collect();
        assert_eq!(names, VALID_LICENSES);
    }

    #[test]
    fn default_is_the_default_license_constant() {
        assert_eq!(License::default().as_str(), DEFAULT_LICENSE);
        assert_eq!(DEFAULT_LICENSE.parse::<License>(), Ok(License::default()));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!("Apache-2.0".parse::<License>(), Ok(License::Apache2));
        assert!("mit".parse::<License>().is_err());
        assert!(" MIT".parse::<License>().is_err());
    }

    #[test]
    fn unknown_license_message_lists_allow_list() {
        let err = "GPL".parse::<License>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid license type 'GPL'."));
        assert!(msg.ends_with("MIT-0, ISC, Unlicense"));
    }
}
