//! Handler modules for the HTTP endpoints.

pub mod customer;
pub mod health;
pub mod lookup;

pub use customer::{
    create_customer, delete_customer, get_customer, list_customers, replace_customer,
    update_customer,
};
pub use health::health_check;
pub use lookup::{lookup_joined_futures, lookup_task_per_call};
