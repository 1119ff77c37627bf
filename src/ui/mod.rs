// SPDX-License-Identifier: MPL-2.0
//! UI modules for the gallery screen.

pub mod controls;
pub mod design_tokens;
pub mod gallery;
pub mod styles;
pub mod theming;
