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

//! Signing and client support for the Paycor document API.
//!
//! Every request sent through this crate carries
//!
//! ```text
//! Authorization: paycorapi <public-key>:<base64(HMAC-SHA1(private-key, string-to-sign))>
//! Date: <RFC 2616 date>
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use paycor::{Client, Config};
//! use paycor_core::{Context, OsEnv};
//! use paycor_http_send_reqwest::ReqwestHttpSend;
//!
//! # async fn example() -> paycor_core::Result<()> {
//! let ctx = Context::new()
//!     .with_http_send(ReqwestHttpSend::default())
//!     .with_env(OsEnv);
//! let config = Config::new().from_env(&ctx);
//!
//! let client = Client::new(ctx, config)?;
//! for document_type in client.get_document_types().await? {
//!     println!("{document_type}");
//! }
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::*;

mod config;
pub use config::Config;

mod string_to_sign;
pub use string_to_sign::StringToSign;

mod signer;
pub use signer::Signer;

mod sign_request;
pub use sign_request::SigningHttpSend;

mod client;
pub use client::{Client, Document, DocumentListing};
