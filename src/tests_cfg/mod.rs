pub mod logs;
pub mod postgres;
