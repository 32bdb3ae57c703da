// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};

use http::request::Parts;
use paycor_core::hash::base64_hmac_sha1;
use paycor_core::utils::Redact;
use paycor_core::Result;

use crate::StringToSign;

/// Signer holds the keys of an account and produces tokens with them.
///
/// A token looks like `<public-key>:<base64(HMAC-SHA1(private-key, data))>`.
///
/// Signer never changes after construction, it can be shared between threads
/// freely.
#[derive(Clone)]
pub struct Signer {
    public_key: String,
    private_key: Vec<u8>,
}

impl Signer {
    /// Create a new signer.
    pub fn new(public_key: impl Into<String>, private_key: impl Into<Vec<u8>>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// Sign the given data.
    pub fn sign(&self, data: &[u8]) -> Result<String> {
        let signature = base64_hmac_sha1(&self.private_key, data)?;
        Ok(format!("{}:{}", self.public_key, signature))
    }

    /// Sign a request at the given http date.
    ///
    /// The request is not modified, see [`StringToSign`] for the signed fields.
    pub fn sign_request(&self, parts: &Parts, http_date: &str) -> Result<String> {
        let string_to_sign = StringToSign::from_parts(parts, http_date).build()?;
        self.sign(string_to_sign.as_bytes())
    }
}

impl Debug for Signer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("public_key", &self.public_key)
            .field("private_key", &Redact::secret(&self.private_key))
            .finish()
    }
}
