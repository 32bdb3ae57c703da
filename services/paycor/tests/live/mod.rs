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

use std::env;

use log::warn;
use paycor::{Client, Config};
use paycor_core::{Context, ErrorKind, OsEnv};
use paycor_http_send_reqwest::ReqwestHttpSend;

/// Build a client against the real service.
///
/// Keys and host come from `PAYCOR_PUBLIC_KEY`, `PAYCOR_PRIVATE_KEY` and
/// `PAYCOR_HOST`, tests only run with `PAYCOR_TEST=on`.
fn init_live_client() -> Option<Client> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("PAYCOR_TEST").is_err() || env::var("PAYCOR_TEST").unwrap() != "on" {
        return None;
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::new().from_env(&ctx);

    let client =
        Client::new(ctx, config).expect("PAYCOR_PUBLIC_KEY and PAYCOR_PRIVATE_KEY must be set");
    Some(client)
}

#[tokio::test]
async fn test_live_get_document_types() {
    let Some(client) = init_live_client() else {
        warn!("PAYCOR_TEST is not set, skipped");
        return;
    };

    let types = client
        .get_document_types()
        .await
        .expect("get document types must succeed");
    assert!(!types.is_empty());
}

#[tokio::test]
async fn test_live_get_document_listing() {
    let Some(client) = init_live_client() else {
        warn!("PAYCOR_TEST is not set, skipped");
        return;
    };

    client
        .get_document_listing("customreport")
        .await
        .expect("list custom reports must succeed");

    let err = client
        .get_document_listing("bad-type")
        .await
        .expect_err("unknown document type must fail");
    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
}

#[tokio::test]
async fn test_live_get_report_by_name() {
    let Some(client) = init_live_client() else {
        warn!("PAYCOR_TEST is not set, skipped");
        return;
    };
    let Ok(name) = env::var("PAYCOR_REPORT_NAME") else {
        warn!("PAYCOR_REPORT_NAME is not set, skipped");
        return;
    };

    let report = client
        .get_report_by_name(&name)
        .await
        .expect("get report by name must succeed");
    assert!(!report.is_empty());

    let err = client
        .get_report_by_name("bad-name")
        .await
        .expect_err("unknown report must fail");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
