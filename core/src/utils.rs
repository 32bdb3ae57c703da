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

//! Utility functions and types.

use std::fmt::Debug;

/// Redacts a value for `Debug` output.
///
/// - Empty values are shown as `EMPTY`.
/// - Values with fewer than 12 bytes are entirely redacted.
/// - Values with 12 or more bytes keep only the first three and the last three.
/// - Values built with [`Redact::secret`] are always entirely redacted.
///
/// This design is to allow users to distinguish between different identifiers
/// but avoid leaking sensitive information.
pub struct Redact<'a> {
    value: &'a [u8],
    reveal_edges: bool,
}

impl<'a> Redact<'a> {
    /// Redact a secret, nothing but its emptiness is ever shown.
    pub fn secret(value: &'a (impl AsRef<[u8]> + ?Sized)) -> Self {
        Redact {
            value: value.as_ref(),
            reveal_edges: false,
        }
    }
}

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact {
            value: value.as_bytes(),
            reveal_edges: true,
        }
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact::from(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        match value {
            None => Redact::from(""),
            Some(v) => Redact::from(v),
        }
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let length = self.value.len();
        if length == 0 {
            f.write_str("EMPTY")
        } else if length < 12 || !self.reveal_edges {
            f.write_str("***")
        } else {
            f.write_str(&String::from_utf8_lossy(&self.value[..3]))?;
            f.write_str("***")?;
            f.write_str(&String::from_utf8_lossy(&self.value[length - 3..]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact() {
        let cases = vec![
            ("Short", "***"),
            ("Hello World!", "Hel***ld!"),
            ("This is a longer string", "Thi***ing"),
            ("", "EMPTY"),
            ("HelloWorld", "***"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                format!("{:?}", Redact::from(input)),
                expected,
                "Failed on input: {}",
                input
            );
        }
    }

    #[test]
    fn test_redact_secret() {
        assert_eq!(format!("{:?}", Redact::secret("")), "EMPTY");
        assert_eq!(
            format!("{:?}", Redact::secret("a-very-long-private-key")),
            "***"
        );
        assert_eq!(format!("{:?}", Redact::secret(&vec![1u8; 32])), "***");
    }
}
