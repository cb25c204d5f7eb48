//! Mailbox identifiers and random address generation.
//!
//! temp-mail.org looks mailboxes up by the MD5 digest of the full address, and
//! addresses are an arbitrary alphanumeric local part followed by one of the
//! service's domain suffixes (which already carry the leading `@`).

use crate::{Error, Result};
use md5::{Digest, Md5};
use rand::Rng;
use rand::distr::Alphanumeric;
use rand::seq::IndexedRandom;

/// Local-part length used by [`Client::generate_email`](crate::Client::generate_email).
pub const DEFAULT_LOCAL_PART_LEN: usize = 7;

/// Compute the mailbox identifier for an email address.
///
/// Returns the lowercase hex MD5 digest of the address bytes, always 32 characters.
///
/// # Examples
/// ```
/// use tempmail_client::mailbox_id;
///
/// assert_eq!(mailbox_id("a@example.com"), mailbox_id("a@example.com"));
/// assert_eq!(mailbox_id("a@example.com").len(), 32);
/// ```
pub fn mailbox_id(email: &str) -> String {
    hex::encode(Md5::digest(email.as_bytes()))
}

/// Build a random address from a list of domain suffixes.
///
/// `len` characters are drawn uniformly from `A-Z`, `a-z` and `0-9`, then one domain
/// is drawn uniformly from `domains` and appended as-is.
///
/// # Errors
/// Returns [`Error::NoDomains`] when `domains` is empty.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tempmail_client::random_address;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let email = random_address(&mut rng, &["@example.com"], 10).unwrap();
/// assert!(email.ends_with("@example.com"));
/// assert_eq!(email.len(), 10 + "@example.com".len());
/// ```
pub fn random_address<R, D>(rng: &mut R, domains: &[D], len: usize) -> Result<String>
where
    R: Rng + ?Sized,
    D: AsRef<str>,
{
    let domain = domains.choose(rng).ok_or(Error::NoDomains)?.as_ref();

    let mut address = String::with_capacity(len + domain.len());
    address.extend((0..len).map(|_| char::from(rng.sample(Alphanumeric))));
    address.push_str(domain);

    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn mailbox_id_matches_known_digest() {
        // md5("") and md5("abc") from RFC 1321.
        assert_eq!(mailbox_id(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(mailbox_id("abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn mailbox_id_is_lowercase_hex() {
        for email in ["user@example.com", "MiXeD@Example.COM", "ünïcode@example.org"] {
            let id = mailbox_id(email);
            assert_eq!(id.len(), 32);
            assert!(
                id.chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
                "unexpected id {id}"
            );
            assert_eq!(id, mailbox_id(email));
        }
    }

    #[test]
    fn random_address_has_requested_shape() {
        let domains = ["@one.test", "@two.test", "@three.test"];
        let mut rng = StdRng::seed_from_u64(42);

        for len in [1, 7, 20] {
            let email = random_address(&mut rng, &domains, len).unwrap();
            let (local, domain) = email.split_at(len);
            assert!(local.chars().all(|c| c.is_ascii_alphanumeric()));
            assert!(domains.contains(&domain), "unexpected domain {domain}");
        }
    }

    #[test]
    fn random_address_is_deterministic_for_seeded_rng() {
        let domains = vec!["@a.test".to_string(), "@b.test".to_string()];
        let first = random_address(&mut StdRng::seed_from_u64(1), &domains, 12).unwrap();
        let second = random_address(&mut StdRng::seed_from_u64(1), &domains, 12).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn random_address_draws_every_domain_eventually() {
        let domains = ["@a.test", "@b.test"];
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 2];

        for _ in 0..200 {
            let email = random_address(&mut rng, &domains, 4).unwrap();
            if email.ends_with("@a.test") {
                seen[0] = true;
            } else {
                seen[1] = true;
            }
        }

        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn random_address_with_zero_length_is_just_the_domain() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            random_address(&mut rng, &["@only.test"], 0).unwrap(),
            "@only.test"
        );
    }

    #[test]
    fn random_address_rejects_empty_domain_list() {
        let mut rng = StdRng::seed_from_u64(0);
        let domains: [&str; 0] = [];
        let err = random_address(&mut rng, &domains, 7).unwrap_err();
        assert!(matches!(err, Error::NoDomains));
    }
}
