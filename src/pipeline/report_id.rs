//! Short report identifiers.

use crate::model::UserProfile;
use chrono::{DateTime, Utc};
use xxhash_rust::xxh3::xxh3_64;

/// Prefix of every report identifier.
pub const REPORT_ID_PREFIX: &str = "TRX-";

/// Number of base-36 digits after the prefix.
const ID_DIGITS: u32 = 9;

const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Derive the identifier shown on a report, e.g. `TRX-0K3P9ZQ1M`.
///
/// Stable for the same respondent and submission time.
#[must_use]
pub fn report_id(profile: &UserProfile, submitted_at: DateTime<Utc>) -> String {
    let key = format!(
        "{}\u{1f}{}\u{1f}{}\u{1f}{}",
        profile.company,
        profile.name,
        profile.email,
        submitted_at.timestamp_millis()
    );
    let mut value = xxh3_64(key.as_bytes()) % 36u64.pow(ID_DIGITS);

    let mut digits = [b'0'; ID_DIGITS as usize];
    for slot in digits.iter_mut().rev() {
        *slot = ALPHABET[(value % 36) as usize];
        value /= 36;
    }

    let mut id = String::with_capacity(REPORT_ID_PREFIX.len() + digits.len());
    id.push_str(REPORT_ID_PREFIX);
    id.extend(digits.iter().map(|&b| char::from(b)));
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn profile(company: &str) -> UserProfile {
        UserProfile {
            company: company.to_string(),
            name: "Jane".to_string(),
            email: "jane@acme.example".to_string(),
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_shape() {
        let at = Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap();
        let id = report_id(&profile("Acme"), at);
        assert!(id.starts_with("TRX-"));
        assert_eq!(id.len(), 4 + ID_DIGITS as usize);
        assert!(id[4..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_stable_and_distinct() {
        let at = Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap();
        assert_eq!(report_id(&profile("Acme"), at), report_id(&profile("Acme"), at));
        assert_ne!(report_id(&profile("Acme"), at), report_id(&profile("Globex"), at));

        let later = at + chrono::Duration::milliseconds(1);
        assert_ne!(report_id(&profile("Acme"), at), report_id(&profile("Acme"), later));
    }
}
