#![doc = "statblock: render Roll20 compendium monster pages as terminal stat blocks."]

//! The core is pure and synchronous:
//! [`normalize`] (text clean-up passes), [`render`] (document subtree to text),
//! [`attributes`] (stat list items to record fields) and [`record`] (record to
//! stat block text).
//!
//! Around it, [`page`] extracts a record from page HTML, [`fetch`] supplies
//! pages over HTTP or from disk, and [`cli`] wires everything to the terminal.

pub mod attributes;
pub mod cli;
pub mod config;
pub mod contract;
pub mod fetch;
pub mod load_config;
pub mod normalize;
pub mod page;
pub mod record;
pub mod render;

pub use cli::{run, Cli};
pub use record::{format_record, MonsterRecord};
pub use render::{render, DomNode};
