//! Password hashing for seeded credentials

pub mod password;

pub use password::{hash_password, verify_password, BCRYPT_COST};
