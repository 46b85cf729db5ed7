//! Sample resource served by the demo routes.

use envelope_core::ValidationErrors;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

/// Body of `POST /users`. Missing fields deserialize as empty strings so they
/// surface as validation messages instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl CreateUser {
    /// Collect every field problem; an empty result means the input is valid.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push("name", "El nombre es requerido");
        } else if name.chars().count() < 2 {
            errors.push("name", "El nombre debe tener al menos 2 caracteres");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push("email", "El email es requerido");
        } else if !is_plausible_email(email) {
            errors.push("email", "El formato del email no es válido");
        }

        errors
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

/// Seed data: `count` users with ids starting at 1.
pub fn sample_users(count: u32) -> Vec<User> {
    (1..=count)
        .map(|id| User {
            id,
            name: format!("User{id}"),
            email: format!("user{id}@example.com"),
        })
        .collect()
}
