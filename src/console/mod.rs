//! Line-oriented terminal front end.
//!
//! Plays the part of the form page and the list page: one form can be open at
//! a time, either for a new customer or for editing a stored one.

mod command;

pub use command::{Command, CommandError};

use crate::client::AsyncLookupClient;
use crate::error::FormError;
use crate::form::{AddressField, CustomerField, CustomerForm, FormSession};
use crate::metrics::Metrics;
use crate::models::Customer;
use crate::services::CustomerList;
use std::fmt::Write as _;
use std::sync::Arc;

/// Result of handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the user (may be empty)
    Text(String),
    /// The user asked to leave
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormMode {
    Create,
    Edit(usize),
}

struct OpenForm {
    session: FormSession,
    mode: FormMode,
}

/// Console state: the customer list and at most one open form.
pub struct Console {
    list: CustomerList,
    lookups: Arc<dyn AsyncLookupClient>,
    metrics: Metrics,
    open: Option<OpenForm>,
}

const HELP: &str = "\
Commands:
  list                         show stored customers
  new                          open a blank customer form
  edit <n>                     open customer <n> for editing
  delete <n>                   delete customer <n>
  quit                         leave
In an open form:
  pan|name|email|mobile <value>
  addr add                     add an address (max 10)
  addr rm <n>                  remove address <n>
  addr <n> <line1|line2|postcode|city|state> <value>
  show                         show the form
  save                         validate and store
  cancel                       close the form without saving";

impl Console {
    pub fn new(list: CustomerList, lookups: Arc<dyn AsyncLookupClient>, metrics: Metrics) -> Self {
        Self {
            list,
            lookups,
            metrics,
            open: None,
        }
    }

    pub fn list(&self) -> &CustomerList {
        &self.list
    }

    pub fn has_open_form(&self) -> bool {
        self.open.is_some()
    }

    /// Wait for the open form's outstanding lookups, if any.
    pub async fn settle(&self) {
        if let Some(open) = &self.open {
            open.session.settle().await;
        }
    }

    /// Handle one input line.
    pub async fn handle_line(&mut self, line: &str) -> Reply {
        match Command::parse(line) {
            Ok(Some(command)) => self.handle(command).await,
            Ok(None) => Reply::Text(String::new()),
            Err(e) => Reply::Text(e.to_string()),
        }
    }

    pub async fn handle(&mut self, command: Command) -> Reply {
        let text = match command {
            Command::Quit => return Reply::Quit,
            Command::Help => HELP.to_string(),
            Command::List => render_list(self.list.records()),
            Command::New => self.open_form(CustomerForm::new(), FormMode::Create),
            Command::Edit(index) => {
                if self.open.is_some() {
                    return Reply::Text(FORM_ALREADY_OPEN.to_string());
                }
                match self.list.edit(index) {
                    Ok(form) => self.open_form(form, FormMode::Edit(index)),
                    Err(e) => e.to_string(),
                }
            }
            Command::Delete(index) => self.delete(index),
            Command::Cancel => match self.open.take() {
                Some(open) => {
                    if let FormMode::Edit(_) = open.mode {
                        self.list.cancel_edit();
                    }
                    "Form closed without saving.".to_string()
                }
                None => NO_FORM.to_string(),
            },
            Command::Save => self.save().await,
            other => self.edit_form(other).await,
        };
        Reply::Text(text)
    }

    fn open_form(&mut self, form: CustomerForm, mode: FormMode) -> String {
        if self.open.is_some() {
            return FORM_ALREADY_OPEN.to_string();
        }
        let text = render_form(&form);
        self.open = Some(OpenForm {
            session: FormSession::new(form, self.lookups.clone(), self.metrics.clone()),
            mode,
        });
        text
    }

    fn delete(&mut self, index: usize) -> String {
        match self.list.delete(index) {
            Ok(removed) => {
                // Keep the open edit pointed at the same record
                if let Some(open) = &mut self.open {
                    if let FormMode::Edit(_) = open.mode {
                        match self.list.editing_index() {
                            Some(i) => open.mode = FormMode::Edit(i),
                            None => open.mode = FormMode::Create,
                        }
                    }
                }
                format!("Deleted customer {} ({}).", index + 1, removed.pan)
            }
            Err(e) => e.to_string(),
        }
    }

    async fn edit_form(&mut self, command: Command) -> String {
        let Some(open) = &self.open else {
            return NO_FORM.to_string();
        };
        let session = &open.session;

        let result: Result<String, FormError> = match command {
            Command::Set(field, value) => session
                .set_field(field, &value)
                .await
                .map(|looking_up| lookup_note(looking_up, "Verifying PAN...")),
            Command::AddAddress => session
                .add_address_row()
                .await
                .map(|index| format!("Added address {}.", index + 1)),
            Command::RemoveAddress(index) => session
                .remove_address_row(index)
                .await
                .map(|_| format!("Removed address {}.", index + 1)),
            Command::SetAddress(index, field, value) => session
                .set_address_field(index, field, &value)
                .await
                .map(|looking_up| lookup_note(looking_up, "Looking up postcode...")),
            Command::Show => Ok(render_form(&session.snapshot().await)),
            _ => Ok(String::new()),
        };

        result.unwrap_or_else(|e| e.to_string())
    }

    async fn save(&mut self) -> String {
        let Some(open) = self.open.take() else {
            return NO_FORM.to_string();
        };

        let customer = match open.session.save().await {
            Ok(customer) => customer,
            Err(e) => {
                let message = e.to_string();
                self.open = Some(open);
                return message;
            }
        };

        let stored = match open.mode {
            FormMode::Create => self.list.create(customer.clone()),
            FormMode::Edit(_) => self.list.save_edit(customer.clone()),
        };

        match stored {
            Ok(index) => format!("Saved customer {} ({}).", index + 1, customer.pan),
            Err(e) => {
                tracing::error!("Failed to store customer: {}", e);
                // Reopen with the validated values so the save can be retried
                let mode = match (open.mode, self.list.editing_index()) {
                    (FormMode::Edit(_), Some(i)) => FormMode::Edit(i),
                    _ => FormMode::Create,
                };
                self.open = Some(OpenForm {
                    session: FormSession::new(
                        CustomerForm::from_customer(&customer),
                        self.lookups.clone(),
                        self.metrics.clone(),
                    ),
                    mode,
                });
                format!("Could not store the customer: {}", e)
            }
        }
    }
}

const CUSTOMER_FIELDS: [CustomerField; 4] = [
    CustomerField::Pan,
    CustomerField::FullName,
    CustomerField::Email,
    CustomerField::Mobile,
];

const ADDRESS_FIELDS: [AddressField; 5] = [
    AddressField::Line1,
    AddressField::Line2,
    AddressField::Postcode,
    AddressField::City,
    AddressField::State,
];

const NO_FORM: &str = "No form is open. Use 'new' or 'edit <n>'.";
const FORM_ALREADY_OPEN: &str = "A form is already open. 'save' or 'cancel' it first.";

fn lookup_note(looking_up: bool, note: &str) -> String {
    if looking_up {
        note.to_string()
    } else {
        String::new()
    }
}

/// Render the stored list the way the list page shows it.
pub fn render_list(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return "No customers stored.".to_string();
    }
    let mut out = String::new();
    for (index, customer) in customers.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&render_customer(index, customer));
    }
    out
}

/// Render one stored customer with its addresses.
pub fn render_customer(index: usize, customer: &Customer) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] PAN: {}", index + 1, customer.pan);
    let _ = writeln!(out, "    Name: {}", customer.full_name);
    let _ = writeln!(out, "    Email: {}", customer.email);
    let _ = write!(out, "    Mobile: {}", customer.mobile);
    for (n, address) in customer.addresses.iter().enumerate() {
        let _ = write!(
            out,
            "\n    Address {}: {}{}{}, {} {} {}",
            n + 1,
            address.line1,
            if address.line2.is_empty() { "" } else { ", " },
            address.line2,
            address.city,
            address.state,
            address.postcode
        );
    }
    out
}

/// Render an open form, flagging in-flight lookups.
pub fn render_form(form: &CustomerForm) -> String {
    let mut out = String::from("Customer Form");
    if form.is_loading() {
        out.push_str(" (loading...)");
    }
    for field in CUSTOMER_FIELDS {
        let _ = write!(out, "\n  {}: {}", field, form.field(field));
    }
    for (n, address) in form.addresses().enumerate() {
        let _ = write!(out, "\n  Address {}", n + 1);
        for field in ADDRESS_FIELDS {
            let _ = write!(out, "\n    {}: {}", field, address.get(field));
        }
    }
    out
}
