//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層の trait を通してデータにアクセスします。

pub mod check_upstream_health;
pub mod create_customer;
pub mod delete_customer;
pub mod error;
pub mod fetch_lookup;
pub mod get_customer;
pub mod replace_customer;
pub mod update_customer;

pub use check_upstream_health::{CheckUpstreamHealthUseCase, UpstreamHealth};
pub use create_customer::CreateCustomerUseCase;
pub use delete_customer::DeleteCustomerUseCase;
pub use error::{CustomerError, FetchLookupError};
pub use fetch_lookup::FetchLookupUseCase;
pub use get_customer::{GetCustomerUseCase, ListCustomersUseCase};
pub use replace_customer::{ReplaceCustomerUseCase, ReplaceOutcome};
pub use update_customer::UpdateCustomerUseCase;
