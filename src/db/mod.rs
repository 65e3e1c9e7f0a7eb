pub mod schema;

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::debug;

use crate::config::Config;
use crate::error::SeedError;
use crate::models::{Customer, Invoice, Revenue, User};

type Result<T> = std::result::Result<T, SeedError>;

/// Name the seeder reports to Postgres, visible in `pg_stat_activity`.
pub const APPLICATION_NAME: &str = "dashboard-seeder";

/// The four seeded tables, in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Users,
    Customers,
    Invoices,
    Revenue,
}

impl Table {
    pub const ALL: [Table; 4] = [Table::Users, Table::Customers, Table::Invoices, Table::Revenue];

    pub fn name(&self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::Customers => "customers",
            Table::Invoices => "invoices",
            Table::Revenue => "revenue",
        }
    }
}

/// Single-connection pool scoped to one seed run
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Open the pool and its one connection.
    ///
    /// The statement cache is disabled so every query goes out unprepared, which keeps
    /// the seeder usable behind transaction-mode poolers.
    pub async fn connect(config: &Config) -> Result<Self> {
        let ssl_mode = config
            .ssl_mode()
            .map_err(|err| SeedError::Config(format!("{err:#}")))?;

        let options = PgConnectOptions::from_str(config.database_url())?
            .ssl_mode(ssl_mode)
            .statement_cache_capacity(0)
            .application_name(APPLICATION_NAME);

        let pool = PgPoolOptions::new()
            .max_connections(1)
            .idle_timeout(config.idle_timeout())
            .acquire_timeout(config.acquire_timeout())
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close the pool, waiting for the connection to be returned and shut down.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    // Schema operations
    pub async fn create_schema(&self) -> Result<()> {
        for statement in schema::STATEMENTS {
            sqlx::query(statement).execute(self.get_pool()).await?;
        }
        debug!("schema is in place");

        Ok(())
    }

    // Insert operations. Each returns whether a row was written; an existing key is skipped.
    pub async fn insert_user(&self, user: &User, password_hash: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(password_hash)
        .execute(self.get_pool())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn insert_customer(&self, customer: &Customer) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, image_url)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(customer.id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.image_url)
        .execute(self.get_pool())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn insert_invoice(&self, invoice: &Invoice) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO invoices (id, customer_id, amount, status, date)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(invoice.id)
        .bind(invoice.customer_id)
        .bind(invoice.amount)
        .bind(&invoice.status)
        .bind(invoice.date)
        .execute(self.get_pool())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn insert_revenue(&self, revenue: &Revenue) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO revenue (month, revenue)
            VALUES ($1, $2)
            ON CONFLICT (month) DO NOTHING
            "#,
        )
        .bind(&revenue.month)
        .bind(revenue.revenue)
        .execute(self.get_pool())
        .await?;

        Ok(result.rows_affected() == 1)
    }
}

// Reads used to check what a seed run left behind
#[cfg(test)]
impl Database {
    pub async fn get_users(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password FROM users ORDER BY email ASC",
        )
        .fetch_all(self.get_pool())
        .await?;

        Ok(users)
    }

    pub async fn get_customers(&self) -> Result<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT id, name, email, image_url FROM customers ORDER BY name ASC",
        )
        .fetch_all(self.get_pool())
        .await?;

        Ok(customers)
    }

    pub async fn get_invoices(&self) -> Result<Vec<Invoice>> {
        let invoices = sqlx::query_as::<_, Invoice>(
            "SELECT id, customer_id, amount, status, date FROM invoices ORDER BY date DESC",
        )
        .fetch_all(self.get_pool())
        .await?;

        Ok(invoices)
    }

    pub async fn get_revenue(&self) -> Result<Vec<Revenue>> {
        let revenue = sqlx::query_as::<_, Revenue>("SELECT month, revenue FROM revenue")
            .fetch_all(self.get_pool())
            .await?;

        Ok(revenue)
    }

    pub async fn count_rows(&self, table: Table) -> Result<i64> {
        // table names come from the closed `Table` enum, never from input
        let sql = format!("SELECT COUNT(*) FROM {}", table.name());
        let count = sqlx::query_scalar::<_, i64>(&sql)
            .fetch_one(self.get_pool())
            .await?;

        Ok(count)
    }
}
