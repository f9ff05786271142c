// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// MockID — document lifecycle session, input record construction, and async
// photo decoding.

pub mod input;
pub mod photo;
pub mod session;

pub use input::CardInput;
pub use session::{DocumentSession, ExportOutcome, SessionState};
