use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, Params, PasswordHasher, Version,
};

use crate::error::SeedError;

fn hasher() -> Argon2<'static> {
    Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, Params::default())
}

/// Hashes a plain text password with a fresh random salt.
///
/// The result is a PHC string (`$argon2id$v=19$m=...`) that embeds the salt and
/// cost parameters, so it can be verified without any other state.
///
/// # Errors
///
/// Returns [`SeedError::Hash`] when argon2 rejects the input.
pub fn hash_password(email: &str, pass: &str) -> Result<String, SeedError> {
    let salt = SaltString::generate(&mut OsRng);

    Ok(hasher()
        .hash_password(pass.as_bytes(), &salt)
        .map_err(|err| SeedError::Hash {
            email: email.to_string(),
            message: err.to_string(),
        })?
        .to_string())
}

/// Verifies a plain text password against a stored hash.
#[cfg(test)]
#[must_use]
pub fn verify_password(pass: &str, hashed_password: &str) -> bool {
    use argon2::{PasswordHash, PasswordVerifier};

    let Ok(hash) = PasswordHash::new(hashed_password) else {
        return false;
    };
    hasher().verify_password(pass.as_bytes(), &hash).is_ok()
}
