//! Editable customer form state.
//!
//! The form holds a draft customer (plain strings, possibly invalid) and gates
//! the transition to a validated [`Customer`] behind [`CustomerForm::save`].
//! Remote lookups are not performed here: editing a PAN or postcode into a
//! valid shape hands back a ticket, the caller runs the lookup, and the result
//! is fed back through `resolve_*`. A result only lands if the field still
//! holds the value the ticket was issued for.

use super::fields::{AddressDraft, AddressField, CustomerField};
use crate::domain::{
    is_valid_full_name, is_valid_pan, is_valid_postcode, pan, EmailAddress, MobileNumber, Pan,
    Postcode,
};
use crate::error::{FormError, FormResult, LookupResult};
use crate::models::{Address, Customer, PanVerification, PostcodeDetails, MAX_ADDRESSES};

/// Stable identity of an address row.
///
/// Row positions shift when earlier rows are removed; ids do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(u64);

/// Lifecycle of a form.
///
/// A rejected save leaves the form in `Editing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Committed,
}

/// Ticket for a PAN verification lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanLookup {
    pub pan: String,
    generation: u64,
}

/// Ticket for a postcode lookup on one address row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostcodeLookup {
    pub row: RowId,
    pub postcode: String,
    generation: u64,
}

/// What happened to a lookup result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Autofill {
    /// At least one field was overwritten
    Applied,
    /// The lookup answered but had nothing to fill in
    NoMatch,
    /// The field changed (or the form closed) after the lookup was issued
    Stale,
    /// The lookup itself failed
    Failed,
}

#[derive(Debug, Clone)]
struct AddressRow {
    id: RowId,
    draft: AddressDraft,
    postcode_generation: u64,
}

/// Draft customer with validation-gated save.
#[derive(Debug, Clone)]
pub struct CustomerForm {
    pan: String,
    full_name: String,
    email: String,
    mobile: String,
    rows: Vec<AddressRow>,
    next_row_id: u64,
    pan_generation: u64,
    pending_lookups: usize,
    phase: FormPhase,
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerForm {
    /// A blank form with a single empty address row.
    pub fn new() -> Self {
        let mut form = Self::empty();
        form.push_row(AddressDraft::default());
        form
    }

    /// A form seeded with a copy of an existing customer.
    pub fn from_customer(customer: &Customer) -> Self {
        let mut form = Self::empty();
        form.pan = customer.pan.as_str().to_string();
        form.full_name = customer.full_name.clone();
        form.email = customer.email.as_str().to_string();
        form.mobile = customer.mobile.as_str().to_string();
        for address in &customer.addresses {
            form.push_row(AddressDraft::from(address));
        }
        form
    }

    fn empty() -> Self {
        Self {
            pan: String::new(),
            full_name: String::new(),
            email: String::new(),
            mobile: String::new(),
            rows: Vec::new(),
            next_row_id: 0,
            pan_generation: 0,
            pending_lookups: 0,
            phase: FormPhase::Editing,
        }
    }

    fn push_row(&mut self, draft: AddressDraft) -> RowId {
        let id = RowId(self.next_row_id);
        self.next_row_id += 1;
        self.rows.push(AddressRow {
            id,
            draft,
            postcode_generation: 0,
        });
        id
    }

    fn ensure_editing(&self) -> FormResult<()> {
        match self.phase {
            FormPhase::Editing => Ok(()),
            FormPhase::Committed => Err(FormError::Closed),
        }
    }

    fn check_index(&self, index: usize) -> FormResult<()> {
        if index >= self.rows.len() {
            return Err(FormError::AddressIndexOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        Ok(())
    }

    pub fn pan(&self) -> &str {
        &self.pan
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn field(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::Pan => &self.pan,
            CustomerField::FullName => &self.full_name,
            CustomerField::Email => &self.email,
            CustomerField::Mobile => &self.mobile,
        }
    }

    pub fn address(&self, index: usize) -> Option<&AddressDraft> {
        self.rows.get(index).map(|row| &row.draft)
    }

    pub fn addresses(&self) -> impl Iterator<Item = &AddressDraft> {
        self.rows.iter().map(|row| &row.draft)
    }

    pub fn address_count(&self) -> usize {
        self.rows.len()
    }

    /// Current position of a row, if it still exists.
    pub fn row_index(&self, row: RowId) -> Option<usize> {
        self.rows.iter().position(|r| r.id == row)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// True while any issued lookup has not been resolved.
    pub fn is_loading(&self) -> bool {
        self.pending_lookups > 0
    }

    /// Overwrite a top-level field.
    ///
    /// The PAN is stored uppercased. When the stored PAN is well-formed a
    /// verification ticket is returned; any earlier PAN ticket becomes stale.
    pub fn set_field(&mut self, field: CustomerField, value: &str) -> FormResult<Option<PanLookup>> {
        self.ensure_editing()?;

        match field {
            CustomerField::Pan => {
                self.pan = pan::normalize(value);
                self.pan_generation += 1;
                if is_valid_pan(&self.pan) {
                    self.pending_lookups += 1;
                    return Ok(Some(PanLookup {
                        pan: self.pan.clone(),
                        generation: self.pan_generation,
                    }));
                }
            }
            CustomerField::FullName => self.full_name = value.to_string(),
            CustomerField::Email => self.email = value.to_string(),
            CustomerField::Mobile => self.mobile = value.to_string(),
        }

        Ok(None)
    }

    /// Append a blank address row and return its position.
    pub fn add_address_row(&mut self) -> FormResult<usize> {
        self.ensure_editing()?;
        if self.rows.len() >= MAX_ADDRESSES {
            return Err(FormError::AddressLimitReached { max: MAX_ADDRESSES });
        }
        self.push_row(AddressDraft::default());
        Ok(self.rows.len() - 1)
    }

    /// Remove the address row at `index`, returning its contents.
    pub fn remove_address_row(&mut self, index: usize) -> FormResult<AddressDraft> {
        self.ensure_editing()?;
        self.check_index(index)?;
        Ok(self.rows.remove(index).draft)
    }

    /// Overwrite one field of one address row.
    ///
    /// Setting a well-formed postcode returns a lookup ticket for that row.
    pub fn set_address_field(
        &mut self,
        index: usize,
        field: AddressField,
        value: &str,
    ) -> FormResult<Option<PostcodeLookup>> {
        self.ensure_editing()?;
        self.check_index(index)?;

        let row = &mut self.rows[index];
        row.draft.set(field, value.to_string());

        if field != AddressField::Postcode {
            return Ok(None);
        }

        row.postcode_generation += 1;
        if !is_valid_postcode(&row.draft.postcode) {
            return Ok(None);
        }

        let ticket = PostcodeLookup {
            row: row.id,
            postcode: row.draft.postcode.clone(),
            generation: row.postcode_generation,
        };
        self.pending_lookups += 1;
        Ok(Some(ticket))
    }

    /// Feed back the result of a PAN verification.
    ///
    /// On a verified PAN the full name is overwritten with the registered name.
    pub fn resolve_pan_lookup(
        &mut self,
        ticket: &PanLookup,
        result: LookupResult<PanVerification>,
    ) -> Autofill {
        self.pending_lookups = self.pending_lookups.saturating_sub(1);

        let verification = match result {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("PAN verification for {} failed: {}", ticket.pan, e);
                return Autofill::Failed;
            }
        };

        if self.phase != FormPhase::Editing || ticket.generation != self.pan_generation {
            tracing::debug!("Discarding stale PAN verification for {}", ticket.pan);
            return Autofill::Stale;
        }

        match verification.verified_name() {
            Some(name) => {
                self.full_name = name.to_string();
                Autofill::Applied
            }
            None => Autofill::NoMatch,
        }
    }

    /// Feed back the result of a postcode lookup.
    ///
    /// City and state are overwritten independently; a missing array in the
    /// response leaves that field as it was.
    pub fn resolve_postcode_lookup(
        &mut self,
        ticket: &PostcodeLookup,
        result: LookupResult<PostcodeDetails>,
    ) -> Autofill {
        self.pending_lookups = self.pending_lookups.saturating_sub(1);

        let details = match result {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!("Postcode lookup for {} failed: {}", ticket.postcode, e);
                return Autofill::Failed;
            }
        };

        let editing = self.phase == FormPhase::Editing;
        let row = match self.rows.iter_mut().find(|r| r.id == ticket.row) {
            Some(row) if editing && row.postcode_generation == ticket.generation => row,
            _ => {
                tracing::debug!("Discarding stale postcode details for {}", ticket.postcode);
                return Autofill::Stale;
            }
        };

        if details.is_empty() {
            return Autofill::NoMatch;
        }
        if let Some(city) = details.city() {
            row.draft.city = city.to_string();
        }
        if let Some(state) = details.state() {
            row.draft.state = state.to_string();
        }
        Autofill::Applied
    }

    /// Validate the draft and, if every check passes, commit it.
    ///
    /// Checks run in order (PAN, full name, email, mobile, addresses) and the
    /// first failure is returned. A rejected form stays editable.
    pub fn save(&mut self) -> FormResult<Customer> {
        self.ensure_editing()?;
        let customer = self.validate()?;
        self.phase = FormPhase::Committed;
        Ok(customer)
    }

    /// Run every save-time check without committing.
    pub fn validate(&self) -> FormResult<Customer> {
        let pan = Pan::new(self.pan.as_str()).map_err(|_| FormError::InvalidPan)?;

        if !is_valid_full_name(&self.full_name) {
            return Err(FormError::InvalidFullName);
        }

        let email = EmailAddress::new(self.email.as_str()).map_err(|_| FormError::InvalidEmail)?;
        let mobile =
            MobileNumber::new(self.mobile.as_str()).map_err(|_| FormError::InvalidMobile)?;

        if self.rows.is_empty() {
            return Err(FormError::NoAddresses);
        }
        if self.rows.len() > MAX_ADDRESSES {
            return Err(FormError::AddressLimitReached { max: MAX_ADDRESSES });
        }

        let addresses = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| to_address(index, &row.draft))
            .collect::<FormResult<Vec<_>>>()?;

        Ok(Customer {
            pan,
            full_name: self.full_name.clone(),
            email,
            mobile,
            addresses,
        })
    }
}

fn to_address(index: usize, draft: &AddressDraft) -> FormResult<Address> {
    if draft.line1.trim().is_empty() {
        return Err(FormError::InvalidAddress { index });
    }
    let postcode =
        Postcode::new(draft.postcode.as_str()).map_err(|_| FormError::InvalidAddress { index })?;

    Ok(Address {
        line1: draft.line1.clone(),
        line2: draft.line2.clone(),
        postcode,
        city: draft.city.clone(),
        state: draft.state.clone(),
    })
}
