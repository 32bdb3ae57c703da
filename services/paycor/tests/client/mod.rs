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

use http::{Method, StatusCode};
use paycor_core::time::parse_http_date;
use paycor_core::ErrorKind;
use pretty_assertions::assert_eq;

use super::*;

const LISTING: &str = r#"{
    "Items": [
        {"Id": "report-1", "DocumentName": "Quarterly Payroll"},
        {"Id": "report-2", "DocumentName": "Headcount"},
        {"Id": "report-3", "DocumentName": "Headcount"}
    ]
}"#;

#[tokio::test]
async fn test_get_document_types() -> anyhow::Result<()> {
    let mock = MockPaycor::new([(
        "/documents/api/documenttypes",
        StatusCode::OK,
        r#"["customreport", "paystub"]"#,
    )]);
    let client = init_client(mock.clone());

    let types = client.get_document_types().await?;
    assert_eq!(types, vec!["customreport", "paystub"]);

    let seen = mock.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, Method::GET);
    assert_eq!(
        seen[0].uri,
        "https://test.paycor.com/documents/api/documenttypes"
    );
    Ok(())
}

#[tokio::test]
async fn test_every_request_is_signed() -> anyhow::Result<()> {
    let mock = MockPaycor::new([
        (
            "/documents/api/documents/customreport",
            StatusCode::OK,
            LISTING,
        ),
        (
            "/documents/api/documents/customreport/report-2",
            StatusCode::OK,
            "report body",
        ),
    ]);
    let client = init_client(mock.clone());

    client.get_report_by_name("Headcount").await?;

    let seen = mock.seen();
    assert_eq!(seen.len(), 2);
    for req in seen {
        let date = req.headers["date"].to_str()?;
        parse_http_date(date)?;

        let authorization = req.headers["authorization"].to_str()?;
        assert!(authorization.starts_with("paycorapi public-key:"));
        assert_eq!(authorization, req.expected_authorization());
    }
    Ok(())
}

#[tokio::test]
async fn test_get_document_listing() -> anyhow::Result<()> {
    let mock = MockPaycor::new([(
        "/documents/api/documents/customreport",
        StatusCode::OK,
        LISTING,
    )]);
    let client = init_client(mock);

    let listing = client.get_document_listing("customreport").await?;
    let names: Vec<_> = listing
        .items
        .iter()
        .filter_map(|doc| doc.name.as_deref())
        .collect();
    assert_eq!(names, vec!["Quarterly Payroll", "Headcount", "Headcount"]);
    Ok(())
}

#[tokio::test]
async fn test_get_document_listing_invalid_type() {
    let client = init_client(MockPaycor::default());

    let err = client.get_document_listing("bad-type").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    assert_eq!(
        err.to_string(),
        "GET call to https://test.paycor.com/documents/api/documents/bad-type returned status code 404"
    );
}

#[tokio::test]
async fn test_get_live_or_saved_report() -> anyhow::Result<()> {
    let mock = MockPaycor::new([(
        "/documents/api/documents/customreport/report%201",
        StatusCode::OK,
        "a,b,c\n1,2,3\n",
    )]);
    let client = init_client(mock.clone());

    let report = client
        .get_live_or_saved_report("customreport", "report 1")
        .await?;
    assert_eq!(report.as_ref(), b"a,b,c\n1,2,3\n");

    // The path is signed in its decoded form.
    let seen = mock.seen();
    let date = seen[0].headers["date"].to_str()?;
    let string_to_sign = format!(
        "GET\r\n\r\n\r\n{date}\r\n/documents/api/documents/customreport/report 1\r\n"
    );
    let token = Signer::new(TEST_PUBLIC_KEY, TEST_PRIVATE_KEY)
        .sign(string_to_sign.as_bytes())?;
    assert_eq!(
        seen[0].headers["authorization"].to_str()?,
        format!("paycorapi {token}")
    );
    Ok(())
}

#[tokio::test]
async fn test_get_report_by_name_picks_first_match() -> anyhow::Result<()> {
    let mock = MockPaycor::new([
        (
            "/documents/api/documents/customreport",
            StatusCode::OK,
            LISTING,
        ),
        (
            "/documents/api/documents/customreport/report-2",
            StatusCode::OK,
            "first headcount",
        ),
        (
            "/documents/api/documents/customreport/report-3",
            StatusCode::OK,
            "second headcount",
        ),
    ]);
    let client = init_client(mock);

    let report = client.get_report_by_name("Headcount").await?;
    assert_eq!(report.as_ref(), b"first headcount");
    Ok(())
}

#[tokio::test]
async fn test_get_report_by_name_not_found() {
    let mock = MockPaycor::new([(
        "/documents/api/documents/customreport",
        StatusCode::OK,
        LISTING,
    )]);
    let client = init_client(mock.clone());

    let err = client.get_report_by_name("bad-name").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "could not find report bad-name");
    // Only the listing was requested.
    assert_eq!(mock.seen().len(), 1);
}

#[tokio::test]
async fn test_request_with_query() -> anyhow::Result<()> {
    let mock = MockPaycor::new([("/documents/api/search?a=x+y&z=1", StatusCode::OK, "[]")]);
    let client = init_client(mock.clone());

    let body = client
        .request(
            Method::GET,
            "/documents/api/search",
            &[("z", "1"), ("a", "x y")],
        )
        .await?;
    assert_eq!(body.as_ref(), b"[]");

    let seen = mock.seen();
    assert_eq!(
        seen[0].headers["authorization"].to_str()?,
        seen[0].expected_authorization()
    );
    Ok(())
}

#[tokio::test]
async fn test_empty_body_is_returned() -> anyhow::Result<()> {
    let mock = MockPaycor::new([(
        "/documents/api/documents/customreport/empty",
        StatusCode::OK,
        "",
    )]);
    let client = init_client(mock);

    let report = client
        .get_live_or_saved_report("customreport", "empty")
        .await?;
    assert!(report.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_invalid_json() {
    let mock = MockPaycor::new([(
        "/documents/api/documenttypes",
        StatusCode::OK,
        "<html>maintenance</html>",
    )]);
    let client = init_client(mock);

    let err = client.get_document_types().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
}

#[tokio::test]
async fn test_transport_error_is_passed_through() {
    let client = init_client(UnreachablePaycor);

    let err = client.get_document_types().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.to_string(), DNS_ERROR);
}
