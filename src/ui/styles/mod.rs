// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the application chrome.

pub mod button;
pub mod container;
