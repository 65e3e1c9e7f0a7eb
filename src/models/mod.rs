mod user;
mod customer;
mod invoice;
mod revenue;

pub use user::User;
pub use customer::Customer;
pub use invoice::{Invoice, InvoiceStatus};
pub use revenue::Revenue;
