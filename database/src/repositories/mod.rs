// Repository pattern for database operations

pub mod admin_user;
pub mod facility;
pub mod inquiry;
pub mod media;
pub mod property;

pub use admin_user::AdminUserRepository;
pub use facility::FacilityRepository;
pub use inquiry::InquiryRepository;
pub use media::MediaRepository;
pub use property::PropertyRepository;

use sqlx::PgPool;

/// Repository manager that provides access to all repositories
pub struct RepositoryManager {
    pool: PgPool,
}

impl RepositoryManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn properties(&self) -> PropertyRepository {
        PropertyRepository::new(self.pool.clone())
    }

    pub fn media(&self) -> MediaRepository {
        MediaRepository::new(self.pool.clone())
    }

    pub fn facilities(&self) -> FacilityRepository {
        FacilityRepository::new(self.pool.clone())
    }

    pub fn inquiries(&self) -> InquiryRepository {
        InquiryRepository::new(self.pool.clone())
    }

    pub fn admin_users(&self) -> AdminUserRepository {
        AdminUserRepository::new(self.pool.clone())
    }
}
