//! Schema creation and data loading for the dashboard demo database.

pub mod data;

use std::fmt;

use tracing::{error, info, instrument};

use crate::config::Config;
use crate::db::{Database, Table};
use crate::error::SeedError;
use crate::hash;

/// Rows written and rows skipped for one table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TableSummary {
    pub inserted: u64,
    pub skipped: u64,
}

impl TableSummary {
    fn record(&mut self, inserted: bool) {
        if inserted {
            self.inserted += 1;
        } else {
            self.skipped += 1;
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: TableSummary,
    pub customers: TableSummary,
    pub invoices: TableSummary,
    pub revenue: TableSummary,
}

impl SeedSummary {
    pub fn table(&self, table: Table) -> TableSummary {
        match table {
            Table::Users => self.users,
            Table::Customers => self.customers,
            Table::Invoices => self.invoices,
            Table::Revenue => self.revenue,
        }
    }

    pub fn total_inserted(&self) -> u64 {
        Table::ALL.iter().map(|&table| self.table(table).inserted).sum()
    }
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Table::ALL
            .iter()
            .map(|&table| {
                let summary = self.table(table);
                format!(
                    "{} {} inserted/{} skipped",
                    table.name(),
                    summary.inserted,
                    summary.skipped
                )
            })
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Connect, create the schema, load the data, and close the connection.
///
/// The pool is closed on every path once it has been opened; an error in either
/// phase stops the remaining work.
#[instrument(skip_all)]
pub async fn run(config: &Config) -> Result<SeedSummary, SeedError> {
    let db = Database::connect(config).await?;

    let result = seed(&db).await;
    db.close().await;

    result
}

/// [`run`], with a failure logged at `error` before it is handed back.
pub async fn run_logged(config: &Config) -> Result<SeedSummary, SeedError> {
    let result = run(config).await;
    if let Err(err) = &result {
        error!(error = %err, "seeding error");
    }
    result
}

/// Both phases against an already open database.
pub async fn seed(db: &Database) -> Result<SeedSummary, SeedError> {
    seed_tables(db).await?;
    seed_data(db).await
}

pub async fn seed_tables(db: &Database) -> Result<(), SeedError> {
    db.create_schema().await
}

/// Insert the fixed dataset one row at a time, users first.
pub async fn seed_data(db: &Database) -> Result<SeedSummary, SeedError> {
    let mut summary = SeedSummary::default();

    for user in data::users() {
        let password_hash = hash::hash_password(&user.email, &user.password)?;
        summary.users.record(db.insert_user(&user, &password_hash).await?);
    }

    for customer in data::customers() {
        summary.customers.record(db.insert_customer(&customer).await?);
    }

    for invoice in data::invoices() {
        summary.invoices.record(db.insert_invoice(&invoice).await?);
    }

    for revenue in data::revenue() {
        summary.revenue.record(db.insert_revenue(&revenue).await?);
    }

    info!(%summary, "seed data loaded");

    Ok(summary)
}
