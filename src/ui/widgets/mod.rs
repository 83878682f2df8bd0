// SPDX-License-Identifier: MPL-2.0
pub mod split_clip;

pub use split_clip::{split_clip, SplitClip};
