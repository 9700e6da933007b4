//! Application service layer.
//!
//! Services hold business state and orchestrate interactions between the form
//! and the repository. The console front end drives them.

mod customer_list;

pub use customer_list::CustomerList;
