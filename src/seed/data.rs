//! The fixed demo dataset for the dashboard.
//!
//! Every row carries a stable key so that replaying the load is a no-op.

use chrono::NaiveDate;
use uuid::{uuid, Uuid};

use crate::models::{Customer, Invoice, InvoiceStatus, Revenue, User};

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date in seed data"),
    }
}

const EVIL_RABBIT: Uuid = uuid!("d6e15727-9fe1-4961-8c5b-ea44a9bd81aa");
const DELBA_DE_OLIVEIRA: Uuid = uuid!("3958dc9e-712f-4377-85e9-fec4b6a6442a");
const LEE_ROBINSON: Uuid = uuid!("3958dc9e-742f-4377-85e9-fec4b6a6442a");
const MICHAEL_NOVOTNY: Uuid = uuid!("76d65c26-f784-44a2-ac19-586678f7c2f2");
const AMY_BURNS: Uuid = uuid!("CC27C14A-0ACF-4F4A-A6C9-D45682C144B9");
const BALAZS_ORBAN: Uuid = uuid!("13D07535-C59E-4157-A011-F8D2EF4E0CBB");

// (id, name, email, plaintext password)
static USERS: [(Uuid, &str, &str, &str); 1] = [(
    uuid!("410544b2-4001-4271-9855-fec4b6a6442a"),
    "User",
    "user@nextmail.com",
    "123456",
)];

// (id, name, email, image_url)
static CUSTOMERS: [(Uuid, &str, &str, &str); 6] = [
    (EVIL_RABBIT, "Evil Rabbit", "evil@rabbit.com", "/customers/evil-rabbit.png"),
    (
        DELBA_DE_OLIVEIRA,
        "Delba de Oliveira",
        "delba@oliveira.com",
        "/customers/delba-de-oliveira.png",
    ),
    (LEE_ROBINSON, "Lee Robinson", "lee@robinson.com", "/customers/lee-robinson.png"),
    (
        MICHAEL_NOVOTNY,
        "Michael Novotny",
        "michael@novotny.com",
        "/customers/michael-novotny.png",
    ),
    (AMY_BURNS, "Amy Burns", "amy@burns.com", "/customers/amy-burns.png"),
    (BALAZS_ORBAN, "Balazs Orban", "balazs@orban.com", "/customers/balazs-orban.png"),
];

// (id, customer_id, amount in cents, status, date)
#[rustfmt::skip]
static INVOICES: [(Uuid, Uuid, i32, InvoiceStatus, NaiveDate); 13] = [
    (uuid!("5b66fe87-e8aa-42da-960d-348201c870e8"), EVIL_RABBIT, 15795, InvoiceStatus::Pending, ymd(2022, 12, 6)),
    (uuid!("3dd5abd7-2214-4926-9add-e884c6aa8c34"), DELBA_DE_OLIVEIRA, 20348, InvoiceStatus::Pending, ymd(2022, 11, 14)),
    (uuid!("ee78e109-7435-40fd-9c03-0f7521e2aee4"), AMY_BURNS, 3040, InvoiceStatus::Paid, ymd(2022, 10, 29)),
    (uuid!("5a1cfbe6-3082-4828-8910-4a1d9ccc87ef"), MICHAEL_NOVOTNY, 44800, InvoiceStatus::Paid, ymd(2023, 9, 10)),
    (uuid!("14b5842a-84ab-4ddb-8aa3-5960ee88dd45"), BALAZS_ORBAN, 34577, InvoiceStatus::Pending, ymd(2023, 8, 5)),
    (uuid!("696612d9-9d85-4775-ac46-5e5b18b9f45e"), LEE_ROBINSON, 54246, InvoiceStatus::Pending, ymd(2023, 7, 16)),
    (uuid!("a50fdece-ca11-4b89-b0d3-563433c32853"), EVIL_RABBIT, 666, InvoiceStatus::Pending, ymd(2023, 6, 27)),
    (uuid!("765ecd18-c99e-46de-a3eb-3e698b7cfeb2"), MICHAEL_NOVOTNY, 32545, InvoiceStatus::Paid, ymd(2023, 6, 9)),
    (uuid!("061e176a-0011-4edf-add4-530fd7c1def5"), AMY_BURNS, 1250, InvoiceStatus::Paid, ymd(2023, 6, 17)),
    (uuid!("3d2677f2-6c72-4809-b4d2-add2c9c46276"), BALAZS_ORBAN, 8546, InvoiceStatus::Paid, ymd(2023, 6, 7)),
    (uuid!("93a52e49-2a39-4764-b81a-3f17653f2bae"), DELBA_DE_OLIVEIRA, 500, InvoiceStatus::Paid, ymd(2023, 8, 19)),
    (uuid!("b7428827-9ddd-4985-b3ef-f020a506af0f"), BALAZS_ORBAN, 8945, InvoiceStatus::Paid, ymd(2023, 6, 3)),
    (uuid!("085d512f-77b4-4d38-b46c-d22066ea6b49"), LEE_ROBINSON, 1000, InvoiceStatus::Paid, ymd(2022, 6, 5)),
];

static REVENUE: [(&str, i32); 12] = [
    ("Jan", 2000),
    ("Feb", 1800),
    ("Mar", 2200),
    ("Apr", 2500),
    ("May", 2300),
    ("Jun", 3200),
    ("Jul", 3500),
    ("Aug", 3700),
    ("Sep", 2500),
    ("Oct", 2800),
    ("Nov", 3000),
    ("Dec", 4800),
];

pub fn users() -> Vec<User> {
    USERS
        .iter()
        .map(|&(id, name, email, password)| User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .collect()
}

pub fn customers() -> Vec<Customer> {
    CUSTOMERS
        .iter()
        .map(|&(id, name, email, image_url)| Customer {
            id,
            name: name.to_string(),
            email: email.to_string(),
            image_url: image_url.to_string(),
        })
        .collect()
}

pub fn invoices() -> Vec<Invoice> {
    INVOICES
        .iter()
        .map(|&(id, customer_id, amount, status, date)| Invoice {
            id,
            customer_id,
            amount,
            status: status.as_str().to_string(),
            date,
        })
        .collect()
}

pub fn revenue() -> Vec<Revenue> {
    REVENUE
        .iter()
        .map(|&(month, revenue)| Revenue {
            month: month.to_string(),
            revenue,
        })
        .collect()
}
