embed_migrations!("migrations/");

use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel::PgConnection;

use crate::errors::ServiceError;

pub type Pool = r2d2::Pool<ConnectionManager<PgConnection>>;
pub type Conn = PgConnection;
pub type PooledConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

fn connect(database_url: &str) -> diesel::ConnectionResult<PgConnection> {
    PgConnection::establish(database_url)
}

pub fn migrate(database_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let connection = connect(database_url)?;
    embedded_migrations::run_with_output(&connection, &mut std::io::stdout())?;

    Ok(())
}

pub fn build_connection_pool(
    database_url: &str,
    max_size: u32,
) -> Result<Pool, Box<dyn std::error::Error>> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool: Pool = r2d2::Pool::builder().max_size(max_size).build(manager)?;

    Ok(pool)
}

/// PgStore implements every store trait on top of a postgres connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: Pool,
}

impl PgStore {
    pub fn new(pool: Pool) -> Self {
        PgStore { pool }
    }

    pub fn connection(&self) -> Result<PooledConnection, ServiceError> {
        let conn = self.pool.get()?;
        Ok(conn)
    }
}
