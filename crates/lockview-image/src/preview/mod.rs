// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Preview module — band layout, gradient mask, compositing stages, and the
// fail-soft redactor that chains them.

pub mod layout;
pub mod mask;
pub mod redactor;
pub mod stages;

pub use redactor::ImageRedactor;
