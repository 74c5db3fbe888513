//! Random fixture helpers for tests. Every helper takes an explicit
//! randomness source so runs are reproducible from a seed.

use crate::store::User;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

const PROVIDERS: &[&str] = &[
    "gmail.com",
    "google.com",
    "microsoft.com",
    "youtube.com",
    "facebook.com",
];

const COUNTRIES: &[&str] = &["UK", "DE", "NL", "PL", "ET", "LT", "LV", "EE"];

pub(crate) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub(crate) fn random_word<R: Rng>(rng: &mut R, n: usize) -> String {
    (0..n)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

pub(crate) fn random_email<R: Rng>(rng: &mut R) -> String {
    let provider = PROVIDERS.choose(rng).copied().unwrap_or(PROVIDERS[0]);
    format!("{}@{}", random_word(rng, 10), provider)
}

pub(crate) fn random_country<R: Rng>(rng: &mut R) -> String {
    COUNTRIES.choose(rng).copied().unwrap_or(COUNTRIES[0]).into()
}

pub(crate) fn random_user<R: Rng>(rng: &mut R) -> User {
    User {
        id: Uuid::new_v4(),
        first_name: random_word(rng, 10),
        last_name: random_word(rng, 10),
        nickname: random_word(rng, 10),
        password: random_word(rng, 10),
        email: random_email(rng),
        country: random_country(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_alpha, validate_country, validate_email};

    #[test]
    fn fixtures_pass_request_validation() {
        let mut rng = seeded_rng(42);
        for _ in 0..20 {
            let user = random_user(&mut rng);
            validate_alpha("first_name", &user.first_name).unwrap();
            validate_alpha("last_name", &user.last_name).unwrap();
            validate_email("email", &user.email).unwrap();
            validate_country("country", &user.country).unwrap();
        }
    }

    #[test]
    fn same_seed_yields_same_words() {
        let mut a = seeded_rng(7);
        let mut b = seeded_rng(7);
        assert_eq!(random_word(&mut a, 10), random_word(&mut b, 10));
    }
}
