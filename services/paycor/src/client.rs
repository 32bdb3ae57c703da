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

use bytes::Bytes;
use http::{Method, StatusCode};
use log::debug;
use paycor_core::{Context, Error, HttpSend, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::CUSTOM_REPORT_DOCUMENT_TYPE;
use crate::{Config, Signer, SigningHttpSend};

/// Characters kept as is in a path segment, everything else is percent-encoded.
///
/// Unreserved characters and the sub-delims `$&+:=@` stay; `/`, `;`, `,` and
/// `?` are escaped so a value always stays inside one segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// A document entry returned by the document listing api.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Id of the document.
    #[serde(rename = "Id", default)]
    pub id: Option<String>,
    /// Display name of the document.
    #[serde(rename = "DocumentName", default)]
    pub name: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The documents available for one document type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentListing {
    /// Documents in this listing.
    #[serde(rename = "Items", default)]
    pub items: Vec<Document>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Client for the Paycor document api.
///
/// All requests are signed by a [`SigningHttpSend`] wrapping the transport of
/// the given [`Context`].
#[derive(Debug, Clone)]
pub struct Client {
    host: String,
    http: SigningHttpSend,
}

impl Client {
    /// Create a new client.
    ///
    /// Both keys must be present in `config`.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        let host = config.host().to_string();
        let public_key = config
            .public_key
            .ok_or_else(|| Error::config_invalid("public key is required"))?;
        let private_key = config
            .private_key
            .ok_or_else(|| Error::config_invalid("private key is required"))?;

        let signer = Signer::new(public_key, private_key.into_bytes());
        Ok(Self {
            host,
            http: SigningHttpSend::new(signer, ctx.http_send_handle()),
        })
    }

    /// The host requests are sent to.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Send a signed request to `path` and return the response body.
    ///
    /// `query` is form-url-encoded and sorted by key. Any status other than
    /// `200 OK` is returned as an [`ErrorKind::UnexpectedStatus`](paycor_core::ErrorKind::UnexpectedStatus) error.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Bytes> {
        let mut url = format!("https://{}{}", self.host, path);
        if !query.is_empty() {
            let mut query = query.to_vec();
            query.sort_by_key(|(k, _)| *k);

            url.push('?');
            url.push_str(
                &form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(query)
                    .finish(),
            );
        }

        let req = http::Request::builder()
            .method(method.clone())
            .uri(url.as_str())
            .body(Bytes::new())?;
        let resp = self.http.http_send(req).await?;
        debug!("{method} {url} returned {}", resp.status());

        if resp.status() != StatusCode::OK {
            return Err(Error::unexpected_status(format!(
                "{method} call to {url} returned status code {}",
                resp.status().as_u16()
            )));
        }

        Ok(resp.into_body())
    }

    /// List the document types the caller can request.
    pub async fn get_document_types(&self) -> Result<Vec<String>> {
        let bs = self
            .request(Method::GET, "/documents/api/documenttypes", &[])
            .await?;

        Ok(serde_json::from_slice(&bs)?)
    }

    /// List the available documents of `document_type`.
    pub async fn get_document_listing(&self, document_type: &str) -> Result<DocumentListing> {
        let path = format!(
            "/documents/api/documents/{}",
            encode_segment(document_type)
        );
        let bs = self.request(Method::GET, &path, &[]).await?;

        Ok(serde_json::from_slice(&bs)?)
    }

    /// Fetch the report identified by `document_type` and `document_id`.
    pub async fn get_live_or_saved_report(
        &self,
        document_type: &str,
        document_id: &str,
    ) -> Result<Bytes> {
        let path = format!(
            "/documents/api/documents/{}/{}",
            encode_segment(document_type),
            encode_segment(document_id)
        );

        self.request(Method::GET, &path, &[]).await
    }

    /// Fetch the custom report named `report_name`.
    ///
    /// The first custom report with a matching name wins.
    pub async fn get_report_by_name(&self, report_name: &str) -> Result<Bytes> {
        let listing = self
            .get_document_listing(CUSTOM_REPORT_DOCUMENT_TYPE)
            .await?;

        let report_id = listing
            .items
            .iter()
            .find(|doc| doc.name.as_deref() == Some(report_name))
            .and_then(|doc| doc.id.as_deref())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::not_found(format!("could not find report {report_name}")))?;
        debug!("report {report_name} resolved to {report_id}");

        self.get_live_or_saved_report(CUSTOM_REPORT_DOCUMENT_TYPE, report_id)
            .await
    }
}

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}
