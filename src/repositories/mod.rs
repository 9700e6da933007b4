mod store_customer_repository;
mod traits;

pub use store_customer_repository::StoreCustomerRepository;
pub use traits::CustomerRepository;
