//! Join codes and game ids

use rand::Rng;

/// Letters in a join code
pub const CODE_LENGTH: usize = 4;

const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const ID_LENGTH: usize = 20;

/// A random join code of uppercase letters
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| char::from(CODE_CHARSET[rng.random_range(0..CODE_CHARSET.len())]))
        .collect()
}

/// A join code for which `exists` returns false
pub fn generate_unique_code<R, F>(rng: &mut R, exists: F) -> String
where
    R: Rng + ?Sized,
    F: Fn(&str) -> bool,
{
    loop {
        let code = generate_code(rng);
        if !exists(&code) {
            return code;
        }
    }
}

/// A random alphanumeric game id
pub fn generate_game_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LENGTH)
        .map(|_| char::from(ID_CHARSET[rng.random_range(0..ID_CHARSET.len())]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::Cell;

    #[test]
    fn generates_four_uppercase_letters() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let code = generate_code(&mut rng);
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn retries_on_collision() {
        let mut rng = StdRng::seed_from_u64(2);
        let attempts = Cell::new(0);

        // Reject the first two candidates no matter what they are
        let code = generate_unique_code(&mut rng, |_| {
            attempts.set(attempts.get() + 1);
            attempts.get() <= 2
        });

        assert_eq!(attempts.get(), 3);
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn returns_immediately_when_no_collision() {
        let mut rng = StdRng::seed_from_u64(3);
        let code = generate_unique_code(&mut rng, |_| false);
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn game_ids_are_alphanumeric() {
        let mut rng = StdRng::seed_from_u64(4);
        let id = generate_game_id(&mut rng);
        assert_eq!(id.len(), ID_LENGTH);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(id, generate_game_id(&mut rng));
    }
}
