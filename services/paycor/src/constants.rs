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

// Env values used by paycor.
/// Env name of the public key.
pub const PAYCOR_PUBLIC_KEY: &str = "PAYCOR_PUBLIC_KEY";
/// Env name of the private key.
pub const PAYCOR_PRIVATE_KEY: &str = "PAYCOR_PRIVATE_KEY";
/// Env name of the api host.
pub const PAYCOR_HOST: &str = "PAYCOR_HOST";

/// Host used when none is configured.
pub const DEFAULT_HOST: &str = "secure.paycor.com";

/// Scheme name placed in front of the token in the `Authorization` header.
pub const AUTHORIZATION_SCHEME: &str = "paycorapi";

/// Document type holding custom reports.
pub const CUSTOM_REPORT_DOCUMENT_TYPE: &str = "customreport";
