//! # attributes: fold stat list items into a [`MonsterRecord`]
//!
//! Every item of the page's attribute list is a `(label, value)` pair. Labels
//! are matched exactly against [`AttributeField::from_label`]; unmatched labels
//! leave the record untouched. A repeated label overwrites the earlier value.

use crate::record::MonsterRecord;
use tracing::debug;

/// The record field a source label maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeField {
    Size,
    Type,
    Alignment,
    ArmorClass,
    HitPoints,
    Speed,
    Str,
    Dex,
    Con,
    Int,
    Wis,
    Cha,
    Skills,
    Saves,
    Senses,
    Languages,
    Challenge,
    Proficiency,
}

const LABELS: &[(&str, AttributeField)] = &[
    ("Size", AttributeField::Size),
    ("Type", AttributeField::Type),
    ("Alignment", AttributeField::Alignment),
    ("AC", AttributeField::ArmorClass),
    ("HP", AttributeField::HitPoints),
    ("Speed", AttributeField::Speed),
    ("STR", AttributeField::Str),
    ("DEX", AttributeField::Dex),
    ("CON", AttributeField::Con),
    ("INT", AttributeField::Int),
    ("WIS", AttributeField::Wis),
    ("CHA", AttributeField::Cha),
    ("Skills", AttributeField::Skills),
    ("Saving Throws", AttributeField::Saves),
    ("Passive Perception", AttributeField::Senses),
    ("Languages", AttributeField::Languages),
    ("Challenge Rating", AttributeField::Challenge),
    ("Proficiency", AttributeField::Proficiency),
];

const PASSIVE_PERCEPTION_PREFIX: &str = "passive Perception ";

impl AttributeField {
    /// Exact, case-sensitive lookup of a source label.
    pub fn from_label(label: &str) -> Option<Self> {
        LABELS
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, field)| *field)
    }

    fn slot(self, record: &mut MonsterRecord) -> &mut String {
        match self {
            AttributeField::Size => &mut record.size,
            AttributeField::Type => &mut record.kind,
            AttributeField::Alignment => &mut record.alignment,
            AttributeField::ArmorClass => &mut record.armor_class,
            AttributeField::HitPoints => &mut record.hit_points,
            AttributeField::Speed => &mut record.speed,
            AttributeField::Str => &mut record.str,
            AttributeField::Dex => &mut record.dex,
            AttributeField::Con => &mut record.con,
            AttributeField::Int => &mut record.int,
            AttributeField::Wis => &mut record.wis,
            AttributeField::Cha => &mut record.cha,
            AttributeField::Skills => &mut record.skills,
            AttributeField::Saves => &mut record.saves,
            AttributeField::Senses => &mut record.senses,
            AttributeField::Languages => &mut record.languages,
            AttributeField::Challenge => &mut record.challenge,
            AttributeField::Proficiency => &mut record.proficiency,
        }
    }

    fn store(self, record: &mut MonsterRecord, value: &str) {
        let stored = match self {
            AttributeField::Senses => format!("{PASSIVE_PERCEPTION_PREFIX}{value}"),
            _ => value.to_string(),
        };
        *self.slot(record) = stored;
    }
}

impl MonsterRecord {
    /// Apply one attribute item. Label and value are expected pre-trimmed.
    pub fn apply_attribute(&mut self, label: &str, value: &str) {
        match AttributeField::from_label(label) {
            Some(field) => field.store(self, value),
            None => debug!(label, "Ignoring unknown attribute label"),
        }
    }

    /// Apply a sequence of attribute items in order.
    pub fn apply_attributes<'a, I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (label, value) in pairs {
            self.apply_attribute(label, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_armor_hit_points_and_senses() {
        let mut record = MonsterRecord::default();
        record.apply_attributes([("AC", "15"), ("HP", "30"), ("Passive Perception", "12")]);

        assert_eq!(record.armor_class, "15");
        assert_eq!(record.hit_points, "30");
        assert_eq!(record.senses, "passive Perception 12");
        assert!(record.skills.is_empty());
        assert!(record.saves.is_empty());
        assert!(record.languages.is_empty());
    }

    #[test]
    fn every_label_reaches_its_own_field() {
        let mut record = MonsterRecord::default();
        for (label, _) in LABELS {
            record.apply_attribute(label, label);
        }
        let expected = MonsterRecord {
            name: String::new(),
            description: String::new(),
            size: "Size".into(),
            kind: "Type".into(),
            alignment: "Alignment".into(),
            armor_class: "AC".into(),
            hit_points: "HP".into(),
            speed: "Speed".into(),
            str: "STR".into(),
            dex: "DEX".into(),
            con: "CON".into(),
            int: "INT".into(),
            wis: "WIS".into(),
            cha: "CHA".into(),
            skills: "Skills".into(),
            saves: "Saving Throws".into(),
            senses: "passive Perception Passive Perception".into(),
            languages: "Languages".into(),
            challenge: "Challenge Rating".into(),
            proficiency: "Proficiency".into(),
        };
        assert_eq!(record, expected);
    }

    #[test]
    fn unknown_labels_leave_record_unchanged() {
        let mut record = MonsterRecord::default();
        record.apply_attributes([("AC", "12"), ("Size", "Tiny")]);
        let before = record.clone();

        record.apply_attribute("Foo", "Bar");
        record.apply_attribute("ac", "99");
        record.apply_attribute("Saves", "Dex +3");
        assert_eq!(record, before);
    }

    #[test]
    fn order_does_not_matter_without_duplicates() {
        let pairs = [
            ("STR", "18"),
            ("Languages", "Common, Draconic"),
            ("Challenge Rating", "10"),
            ("Saving Throws", "Dex +4"),
        ];
        let mut forward = MonsterRecord::default();
        forward.apply_attributes(pairs);
        let mut backward = MonsterRecord::default();
        backward.apply_attributes(pairs.iter().rev().copied());
        assert_eq!(forward, backward);
    }

    #[test]
    fn every_rotation_of_all_labels_builds_the_same_record() {
        let pairs: Vec<(&str, String)> = LABELS
            .iter()
            .enumerate()
            .map(|(i, (label, _))| (*label, format!("value {i}")))
            .collect();
        let build = |order: &[(&str, String)]| {
            let mut record = MonsterRecord::default();
            record.apply_attributes(order.iter().map(|(l, v)| (*l, v.as_str())));
            record
        };
        let expected = build(&pairs);

        for shift in 1..pairs.len() {
            let mut rotated = pairs.clone();
            rotated.rotate_left(shift);
            assert_eq!(build(&rotated), expected, "rotation by {shift}");
        }

        // Interleave even and odd positions for an order that is not a rotation.
        let mut interleaved: Vec<_> = pairs.iter().step_by(2).cloned().collect();
        interleaved.extend(pairs.iter().skip(1).step_by(2).cloned());
        interleaved.reverse();
        assert_eq!(build(&interleaved), expected);
    }

    #[test]
    fn duplicate_label_last_write_wins() {
        let mut record = MonsterRecord::default();
        record.apply_attributes([("HP", "10"), ("Speed", "30 ft."), ("HP", "45")]);
        assert_eq!(record.hit_points, "45");

        record.apply_attributes([("Passive Perception", "10"), ("Passive Perception", "14")]);
        assert_eq!(record.senses, "passive Perception 14");
    }
}
