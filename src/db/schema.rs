//! DDL for the dashboard tables.
//!
//! Every statement is guarded with `IF NOT EXISTS`, so the whole list can be
//! replayed against a database that is already initialized.

pub const CREATE_UUID_EXTENSION: &str = r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#;

pub const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )
"#;

pub const CREATE_CUSTOMERS: &str = r#"
    CREATE TABLE IF NOT EXISTS customers (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        image_url VARCHAR(255) NOT NULL
    )
"#;

// customer_id is deliberately not a foreign key
pub const CREATE_INVOICES: &str = r#"
    CREATE TABLE IF NOT EXISTS invoices (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        customer_id UUID NOT NULL,
        amount INT NOT NULL,
        status VARCHAR(255) NOT NULL,
        date DATE NOT NULL
    )
"#;

pub const CREATE_REVENUE: &str = r#"
    CREATE TABLE IF NOT EXISTS revenue (
        month VARCHAR(4) NOT NULL UNIQUE,
        revenue INT NOT NULL
    )
"#;

/// Statements in execution order. The extension must come before any table
/// that calls `uuid_generate_v4()`.
pub const STATEMENTS: [&str; 5] = [
    CREATE_UUID_EXTENSION,
    CREATE_USERS,
    CREATE_CUSTOMERS,
    CREATE_INVOICES,
    CREATE_REVENUE,
];
