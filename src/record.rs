//! # record: the monster stat record and its text rendering
//!
//! [`MonsterRecord`] is filled in while a page is traversed (name, rendered
//! description, attribute items) and then turned into the final stat block by
//! [`format_record`].
//!
//! Layout of the stat block:
//!
//! ~~~text
//! <description>
//!
//! # Stats
//! <size> <type> <alignment>
//! ```
//! Armor Class <ac>
//! Hit Points <hp>
//! Speed <speed>
//! STR <str>  (one line each for DEX, CON, INT, WIS, CHA)
//! ```
//! *Skills* <skills>        (only when present)
//! *Senses* <senses>        (only when present)
//! *Languages* <languages>  (only when present)
//! *Challenge* <challenge>
//! ~~~
//!
//! The block has no trailing newline.

use std::fmt::{self, Write};

/// All fields default to the empty string, meaning "not found on the page".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonsterRecord {
    pub name: String,
    pub description: String,

    pub size: String,
    /// Creature type, e.g. "dragon".
    pub kind: String,
    pub alignment: String,

    pub armor_class: String,
    pub hit_points: String,
    pub speed: String,

    pub str: String,
    pub dex: String,
    pub con: String,
    pub int: String,
    pub wis: String,
    pub cha: String,

    pub skills: String,
    pub saves: String,
    pub senses: String,
    pub languages: String,
    pub challenge: String,
    pub proficiency: String,
}

const FENCE: &str = "```";

impl MonsterRecord {
    /// Whether a title was found for this record.
    pub fn is_found(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Serialize a completed record into the stat block text.
pub fn format_record(record: &MonsterRecord) -> String {
    let mut out = String::with_capacity(record.description.len() + 256);
    // Writing into a String cannot fail.
    let _ = write_record(&mut out, record);
    out
}

fn write_record(out: &mut impl Write, m: &MonsterRecord) -> fmt::Result {
    write!(out, "{}\n\n", m.description)?;

    out.write_str("# Stats\n")?;
    writeln!(out, "{} {} {}", m.size, m.kind, m.alignment)?;

    writeln!(out, "{FENCE}")?;
    let block = [
        ("Armor Class", &m.armor_class),
        ("Hit Points", &m.hit_points),
        ("Speed", &m.speed),
        ("STR", &m.str),
        ("DEX", &m.dex),
        ("CON", &m.con),
        ("INT", &m.int),
        ("WIS", &m.wis),
        ("CHA", &m.cha),
    ];
    for (label, value) in block {
        writeln!(out, "{label} {value}")?;
    }
    writeln!(out, "{FENCE}")?;

    let optional = [
        ("Skills", &m.skills),
        ("Senses", &m.senses),
        ("Languages", &m.languages),
    ];
    for (label, value) in optional {
        if !value.is_empty() {
            writeln!(out, "*{label}* {value}")?;
        }
    }

    write!(out, "*Challenge* {}", m.challenge)
}

impl fmt::Display for MonsterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_record(f, self)
    }
}
