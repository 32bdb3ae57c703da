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
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use http::header::{AUTHORIZATION, DATE};
use http::request::Parts;
use http::HeaderValue;
use log::debug;
use paycor_core::time::{format_http_date, now, DateTime};
use paycor_core::{HttpSend, Result};

use crate::constants::AUTHORIZATION_SCHEME;
use crate::Signer;

/// SigningHttpSend signs every request before handing it to the inner [`HttpSend`].
///
/// For each request it
///
/// - formats the current UTC time as an http date,
/// - signs the request with [`Signer::sign_request`],
/// - sets `Authorization: paycorapi <token>` and `Date: <http date>`, replacing
///   any previous values,
/// - forwards the request to the inner transport and returns its result as is.
///
/// A request that fails to sign is never forwarded. Responses are not
/// inspected, a non-2xx response is still a successful round trip.
#[derive(Clone)]
pub struct SigningHttpSend {
    signer: Signer,
    inner: Arc<dyn HttpSend>,
}

impl SigningHttpSend {
    /// Create a new SigningHttpSend over the given transport.
    pub fn new(signer: Signer, inner: Arc<dyn HttpSend>) -> Self {
        Self { signer, inner }
    }

    /// Sign the request in place with the current time.
    pub fn sign(&self, parts: &mut Parts) -> Result<()> {
        self.sign_at(parts, now())
    }

    fn sign_at(&self, parts: &mut Parts, now: DateTime) -> Result<()> {
        let http_date = format_http_date(now);
        let token = self.signer.sign_request(parts, &http_date)?;

        let mut authorization: HeaderValue = format!("{AUTHORIZATION_SCHEME} {token}").parse()?;
        authorization.set_sensitive(true);
        let date: HeaderValue = http_date.parse()?;

        parts.headers.insert(AUTHORIZATION, authorization);
        parts.headers.insert(DATE, date);
        Ok(())
    }
}

impl Debug for SigningHttpSend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningHttpSend")
            .field("signer", &self.signer)
            .field("inner", &self.inner)
            .finish()
    }
}

#[async_trait]
impl HttpSend for SigningHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (mut parts, body) = req.into_parts();
        self.sign(&mut parts)?;
        debug!("signed request: {} {}", parts.method, parts.uri);

        self.inner
            .http_send(http::Request::from_parts(parts, body))
            .await
    }
}
