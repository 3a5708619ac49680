//! Password hashing and verification.
//!
//! Credentials are stored as salted PBKDF2 hashes in PHC string format. No
//! other module touches raw passwords or stored hashes.

use pbkdf2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use pbkdf2::Pbkdf2;
use rand_core::OsRng;

use crate::server::error::AppError;

/// Hashes a password with a freshly generated salt.
pub fn hash(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Pbkdf2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC hash string.
///
/// An unparseable stored hash counts as a failed verification rather than an
/// error; the caller cannot do anything more useful with it.
pub fn verify(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Pbkdf2.verify_password(password.as_bytes(), &parsed).is_ok()
}
