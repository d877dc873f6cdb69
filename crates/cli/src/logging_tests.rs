// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    absent  = { None,                 "warn" },
    level   = { Some("debug"),        "debug" },
    target  = { Some("gsh_core=trace"), "gsh_core=trace" },
    garbage = { Some("gsh=notalevel"), "warn" },
)]
fn filter_selection(directives: Option<&str>, expected: &str) {
    assert_eq!(filter_from(directives).to_string(), expected);
}
