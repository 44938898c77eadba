// Copyright 2026 The Matrix.org Foundation C.I.C.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The snapshot document model.
//!
//! [`Document`] is an immutable value: every mutating operation returns a
//! new snapshot with structural sharing through cloning, never editing
//! shared state in place.  It implements [`DocumentModelInterface`], so
//! the autoformat engine runs against it out of the box; a host editor
//! may substitute its own implementation of the trait.
//!
//! [`DocumentModelInterface`]: crate::DocumentModelInterface

mod base;
mod block_ops;
mod formatting;
mod text_ops;
mod trait_impl;

pub use base::{Block, Document, StyleSpan};
