// Copyright (c) Till contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Error taxonomy of the ledger core. Every failure is surfaced to the
/// immediate caller synchronously; a failed validation performs no store
/// mutation.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Rejected input on a store mutation (empty description, negative
    /// amount).
    #[error("{0}")]
    Validation(String),

    /// Unparseable user-facing text: dates, currency amounts, or entry
    /// kind / payment method tokens.
    #[error("{0}")]
    Format(String),

    /// Operation addressed an id that is not in the ledger.
    #[error("entry #{0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Db(#[from] rusqlite::Error),
}

pub type Result<T, E = LedgerError> = std::result::Result<T, E>;
