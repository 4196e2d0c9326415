//! Database Config

use clap::Args;

/// Connection settings for the charge store.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string for the database holding `t_charge`
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
}
