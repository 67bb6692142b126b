//! Repository implementations for Accounts domain

pub mod memory;
pub mod users;

use sqlx::PgPool;

pub use memory::InMemoryAccountStore;
pub use users::UserRepository;

/// Combined repository access for the Accounts domain
#[derive(Clone)]
pub struct AccountsRepositories {
    pub users: UserRepository,
}

impl AccountsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }
}
