//! Widgets for **mselect**.
//!
//! Every widget implements [`mselect_core::Component`], so it can be embedded
//! in any [`mselect_core::Model`] and placed with ordinary [`ratatui`]
//! layouts. Widgets that react to the pointer remember where they were last
//! drawn and resolve clicks against that area in `update`.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`checklist`] | Scrollable two-row checkbox list reporting scroll metrics |
//! | [`chips`] | Wrapping row of removable chips |
//! | [`info_board`] | Centered title and description panel |
//! | [`spinner`] | Animated indeterminate spinner |
//! | [`text_input`] | Single-line text input field |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`chrome`] | Shared border blocks |
//! | [`highlight`] | Case-insensitive match segmentation for labels |
//! | [`selection`] | Cursor and row-offset bookkeeping for multi-row items |

pub mod checklist;
pub mod chips;
pub mod chrome;
pub mod highlight;
pub mod info_board;
pub mod selection;
pub mod spinner;
pub mod text_input;
