use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlSslMode};
use tracing::debug;

use crate::config::Config;
use crate::models::{NewSchool, School};

/// Upper bound on concurrent database connections. Excess acquisitions wait
/// for a free connection instead of failing.
const MAX_CONNECTIONS: u32 = 12;

const CREATE_SCHOOLS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS schools (
        id INT AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        address VARCHAR(255) NOT NULL,
        latitude DOUBLE NOT NULL,
        longitude DOUBLE NOT NULL
    )
";

const INSERT_SCHOOL: &str = "
    INSERT INTO schools (name, address, latitude, longitude)
    VALUES (?, ?, ?, ?)
";

// Spherical law of cosines on a 6371 km Earth. Binds: ref_lat, ref_lng,
// ref_lat.
const LIST_SCHOOLS_BY_DISTANCE: &str = "
    SELECT id, name, address, latitude, longitude
    FROM schools
    ORDER BY (
        6371 * ACOS(
            COS(RADIANS(?)) * COS(RADIANS(latitude))
                * COS(RADIANS(longitude) - RADIANS(?))
            + SIN(RADIANS(?)) * SIN(RADIANS(latitude))
        )
    )
";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Backend(#[from] sqlx::Error),
}

/// Persistence layer for school records, backed by a bounded MySQL
/// connection pool.
#[derive(Clone)]
pub struct SchoolStore {
    pool: MySqlPool,
}

impl SchoolStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool against the configured database. When CA
    /// material is configured the server certificate is verified against it;
    /// otherwise the driver's default (TLS preferred) applies.
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        let mut options = MySqlConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .username(&config.db_user)
            .password(&config.db_password)
            .database(&config.db_name);

        if let Some(ca_pem) = config.ca_pem()? {
            options = options
                .ssl_mode(MySqlSslMode::VerifyCa)
                .ssl_ca_from_pem(ca_pem);
        }

        let pool = MySqlPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Idempotently ensure the schools table exists. Called once at startup;
    /// the process must not serve traffic if this fails.
    pub async fn init_schema(&self) -> anyhow::Result<()> {
        sqlx::query(CREATE_SCHOOLS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert a validated school and return its generated id.
    pub async fn insert(&self, school: &NewSchool) -> Result<u64, StoreError> {
        let result = sqlx::query(INSERT_SCHOOL)
            .bind(&school.name)
            .bind(&school.address)
            .bind(school.latitude)
            .bind(school.longitude)
            .execute(&self.pool)
            .await?;

        let id = result.last_insert_id();
        debug!("inserted school {} with id {}", school.name, id);
        Ok(id)
    }

    /// Every stored school, nearest to (ref_lat, ref_lng) first. The full
    /// result set is materialized; ordering between equidistant rows is
    /// unspecified.
    pub async fn list_by_distance(
        &self,
        ref_lat: f64,
        ref_lng: f64,
    ) -> Result<Vec<School>, StoreError> {
        let schools = sqlx::query_as::<_, School>(LIST_SCHOOLS_BY_DISTANCE)
            .bind(ref_lat)
            .bind(ref_lng)
            .bind(ref_lat)
            .fetch_all(&self.pool)
            .await?;

        Ok(schools)
    }
}
