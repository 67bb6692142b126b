//! Repository implementations for Collections domain

pub mod memberships;
pub mod memory;

use sqlx::PgPool;

pub use memberships::MembershipRepository;
pub use memory::InMemoryCollectionStore;

/// Combined repository access for the Collections domain
#[derive(Clone)]
pub struct CollectionsRepositories {
    pub memberships: MembershipRepository,
}

impl CollectionsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            memberships: MembershipRepository::new(pool),
        }
    }
}
