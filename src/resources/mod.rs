//! Resource clients
//!
//! One client type per Content Management API resource. Each owns an
//! [`Accumulator`](crate::Accumulator) seeded with the headers of its parent
//! (the stack `api_key` and `branch`), so headers added on a [`Stack`] flow
//! down to every resource created from it afterwards.
//!
//! Operation methods never touch the network: they return a
//! [`PendingRequest`](crate::PendingRequest) describing the call. Methods that
//! address a single resource check its UID first and fail with
//! [`Error::InvalidState`](crate::Error::InvalidState) when the client was
//! created without one.

mod asset;
mod audit_log;
mod branch;
mod bulk_operation;
mod content_type;
mod entry;
mod environment;
mod extension;
mod label;
mod locale;
mod organization;
mod publish_queue;
mod release;
mod role;
mod stack;
mod taxonomy;
mod token;
mod user;
mod webhook;
mod workflow;

pub use asset::{Asset, AssetUpload};
pub use audit_log::AuditLog;
pub use branch::{Alias, Branch};
pub use bulk_operation::BulkOperation;
pub use content_type::{ContentType, GlobalField};
pub use entry::Entry;
pub use environment::Environment;
pub use extension::{Extension, ExtensionUpload};
pub use label::Label;
pub use locale::Locale;
pub use organization::Organization;
pub use publish_queue::PublishQueue;
pub use release::{Release, ReleaseItem};
pub use role::Role;
pub use stack::Stack;
pub use taxonomy::{Taxonomy, Term};
pub use token::{DeliveryToken, ManagementToken};
pub use user::User;
pub use webhook::Webhook;
pub use workflow::Workflow;

use crate::errors::{Error, Result};

/// Return a non-blank argument or fail with `InvalidArgument`
pub(crate) fn non_empty<'a>(value: &'a str, message: &str) -> Result<&'a str> {
    if value.trim().is_empty() {
        Err(Error::InvalidArgument(message.to_string()))
    } else {
        Ok(value)
    }
}
