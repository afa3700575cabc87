use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

// Argon2id password flow. The stored value is the full PHC-encoded hash;
// verification re-parses it, so parameter upgrades only affect new hashes.

/// hash_password
///
/// Hashes a plaintext password with a fresh random salt. The plaintext is
/// dropped at the end of this call and is never logged.
pub fn hash_password(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| e.to_string())
}

/// verify_password
///
/// Checks a plaintext candidate against a stored PHC hash. An unparsable
/// stored hash counts as a failed verification, not an error — the login
/// handler treats both identically as bad credentials.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::error!("stored password hash is unparsable: {:?}", e);
            false
        }
    }
}
