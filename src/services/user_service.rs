use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

use crate::error::{Error, Result};
use crate::models::user::User;
use crate::repository::user::UserRepository;

#[derive(Clone)]
pub struct UserService {
    users: Arc<UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<UserRepository>) -> Self {
        Self { users }
    }

    pub async fn register(&self, email: String, name: String, password: String) -> Result<User> {
        let user = User {
            id: 0,
            email,
            name,
            password: hash_password(&password)?,
        };
        self.users
            .save(user)
            .ok_or_else(|| Error::BadRequest("A user with this email already exists".into()))
    }

    /// One failure message covers both an unknown email and a wrong password,
    /// so login probes cannot tell registered emails apart.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let user = self
            .users
            .find_by_email(email)
            .ok_or_else(login_rejected)?;
        if !verify_password(password, &user.password)? {
            return Err(login_rejected());
        }
        Ok(user)
    }
}

fn login_rejected() -> Error {
    Error::Unauthorized("Email or password is incorrect".into())
}

fn hash_password(plain: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::Internal(format!("Password hashing failed: {}", e)))
}

fn verify_password(plain: &str, hashed: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hashed)
        .map_err(|e| Error::Internal(format!("Stored password hash is invalid: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed_hash)
        .is_ok())
}
