//! The customer form: draft state, validation gate, and lookup orchestration.

mod customer_form;
mod fields;
mod session;

pub use customer_form::{Autofill, CustomerForm, FormPhase, PanLookup, PostcodeLookup, RowId};
pub use fields::{AddressDraft, AddressField, CustomerField, UnknownField};
pub use session::FormSession;
