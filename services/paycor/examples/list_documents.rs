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

//! List document types and custom reports of a Paycor account.
//!
//! ```shell
//! PAYCOR_PUBLIC_KEY=... PAYCOR_PRIVATE_KEY=... cargo run --example list_documents
//! ```

use anyhow::Result;
use paycor::{Client, Config, CUSTOM_REPORT_DOCUMENT_TYPE};
use paycor_core::{Context, OsEnv};
use paycor_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let _ = dotenv::dotenv();

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::new().from_env(&ctx);
    println!("Using config: {config:?}");

    let client = Client::new(ctx, config)?;

    println!("Document types:");
    for document_type in client.get_document_types().await? {
        println!("  - {document_type}");
    }

    let listing = client
        .get_document_listing(CUSTOM_REPORT_DOCUMENT_TYPE)
        .await?;
    println!("\nCustom reports:");
    for doc in &listing.items {
        println!(
            "  - {} ({})",
            doc.name.as_deref().unwrap_or("<unnamed>"),
            doc.id.as_deref().unwrap_or("<no id>")
        );
    }

    Ok(())
}
