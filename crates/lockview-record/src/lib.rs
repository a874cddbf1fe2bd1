// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// lockview-record — Locked record previews.
//
// Replaces every leaf of a nested record with fixed placeholder content while
// keeping its shape: the same keys at every level and the same list lengths.
// Which placeholder a field gets is decided by a static schema mapping field
// names to semantic roles, and each role to a replacement rule.

pub mod redactor;
pub mod schema;
pub mod shape;

pub use redactor::{RecordRedactor, redact};
pub use schema::{ContactKind, FieldRole, FieldSpec, RESUME_SCHEMA, Rule, TextValue};
pub use shape::Shape;
