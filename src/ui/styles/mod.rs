// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the grid and the demo window.

pub mod container;
