//! Seeds the dashboard demo database: schema creation followed by an idempotent,
//! row-by-row load of users, customers, invoices and revenue.

pub mod config;
pub mod db;
pub mod error;
pub mod hash;
pub mod http;
pub mod models;
pub mod seed;

#[cfg(test)]
mod tests_cfg;
