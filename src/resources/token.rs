use crate::{
    client::Client,
    errors::{messages, Result},
    request::{require, Accumulator, PendingRequest},
    util::encode_path,
};
use http::Method;
use serde_json::Value;
use std::collections::BTreeMap;

// Delivery and management tokens share one shape under different collections.
#[derive(Debug, Clone)]
struct Tokens {
    client: Client,
    options: Accumulator,
    collection: &'static str,
    uid: Option<String>,
}

impl Tokens {
    fn path(&self) -> Result<String> {
        let uid = require(&self.uid, messages::TOKEN_UID_REQUIRED)?;
        Ok(format!("{}/{}", self.collection, encode_path(uid)))
    }

    fn find(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, self.collection)
    }

    fn fetch(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, self.path()?)
    }

    fn create(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::POST, self.collection)?
            .json(body))
    }

    fn update(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::PUT, self.path()?)?
            .json(body))
    }

    fn delete(&self) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::DELETE, self.path()?)?
            .with_param("force", true))
    }
}

macro_rules! token_client {
    ($(#[$meta:meta])* $name:ident, $collection:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            inner: Tokens,
        }

        impl $crate::request::RequestOptions for $name {
            fn accumulator(&self) -> &Accumulator {
                &self.inner.options
            }

            fn accumulator_mut(&mut self) -> &mut Accumulator {
                &mut self.inner.options
            }
        }

        impl $name {
            pub(crate) fn new(
                client: Client,
                headers: BTreeMap<String, String>,
                uid: Option<String>,
            ) -> Self {
                Self {
                    inner: Tokens {
                        client,
                        options: Accumulator::seeded(headers),
                        collection: $collection,
                        uid,
                    },
                }
            }

            /// List tokens
            pub fn find(&self) -> Result<PendingRequest> {
                self.inner.find()
            }

            /// Fetch this token
            pub fn fetch(&self) -> Result<PendingRequest> {
                self.inner.fetch()
            }

            /// Create a token from `{"token": {...}}`
            pub fn create(&self, body: Value) -> Result<PendingRequest> {
                self.inner.create(body)
            }

            /// Update this token
            pub fn update(&self, body: Value) -> Result<PendingRequest> {
                self.inner.update(body)
            }

            /// Delete this token
            pub fn delete(&self) -> Result<PendingRequest> {
                self.inner.delete()
            }
        }
    };
}

token_client!(
    /// Delivery tokens of a stack
    DeliveryToken,
    "stacks/delivery_tokens"
);

token_client!(
    /// Management tokens of a stack
    ManagementToken,
    "stacks/management_tokens"
);
