//! The immutable 64-entry reference table.

use std::collections::{HashMap, HashSet};

use crate::auspice::Auspice;
use crate::error::{CoreError, CoreResult};
use crate::hexagram::Hexagram;
use crate::line::Line;
use crate::query::QueryBuilder;

/// One embedded source record, pattern as raw bits bottom-to-top.
#[derive(Clone, Copy)]
struct Record {
    id: u8,
    name: &'static str,
    pinyin: &'static str,
    english: &'static str,
    pattern: [u8; 6],
    auspice: Auspice,
}

const fn rec(
    id: u8,
    name: &'static str,
    pinyin: &'static str,
    english: &'static str,
    pattern: [u8; 6],
    auspice: Auspice,
) -> Record {
    Record {
        id,
        name,
        pinyin,
        english,
        pattern,
        auspice,
    }
}

/// The King Wen sequence. Lower trigram is bits 0-2, upper is bits 3-5.
#[rustfmt::skip]
const RECORDS: [Record; 64] = [
    rec(1,  "乾",   "Qian",      "The Creative",               [1, 1, 1, 1, 1, 1], Auspice::Supreme),
    rec(2,  "坤",   "Kun",       "The Receptive",              [0, 0, 0, 0, 0, 0], Auspice::Supreme),
    rec(3,  "屯",   "Zhun",      "Difficulty at the Beginning", [1, 0, 0, 0, 1, 0], Auspice::Unfavorable),
    rec(4,  "蒙",   "Meng",      "Youthful Folly",             [0, 1, 0, 0, 0, 1], Auspice::Neutral),
    rec(5,  "需",   "Xu",        "Waiting",                    [1, 1, 1, 0, 1, 0], Auspice::Favorable),
    rec(6,  "讼",   "Song",      "Conflict",                   [0, 1, 0, 1, 1, 1], Auspice::Unfavorable),
    rec(7,  "师",   "Shi",       "The Army",                   [0, 1, 0, 0, 0, 0], Auspice::Neutral),
    rec(8,  "比",   "Bi",        "Holding Together",           [0, 0, 0, 0, 1, 0], Auspice::Favorable),
    rec(9,  "小畜", "Xiao Chu",  "Small Taming",               [1, 1, 1, 0, 1, 1], Auspice::Neutral),
    rec(10, "履",   "Lu",        "Treading",                   [1, 1, 0, 1, 1, 1], Auspice::Neutral),
    rec(11, "泰",   "Tai",       "Peace",                      [1, 1, 1, 0, 0, 0], Auspice::Supreme),
    rec(12, "否",   "Pi",        "Standstill",                 [0, 0, 0, 1, 1, 1], Auspice::Dire),
    rec(13, "同人", "Tong Ren",  "Fellowship",                 [1, 0, 1, 1, 1, 1], Auspice::Favorable),
    rec(14, "大有", "Da You",    "Great Possession",           [1, 1, 1, 1, 0, 1], Auspice::Supreme),
    rec(15, "谦",   "Qian",      "Modesty",                    [0, 0, 1, 0, 0, 0], Auspice::Favorable),
    rec(16, "豫",   "Yu",        "Enthusiasm",                 [0, 0, 0, 1, 0, 0], Auspice::Favorable),
    rec(17, "随",   "Sui",       "Following",                  [1, 0, 0, 1, 1, 0], Auspice::Favorable),
    rec(18, "蛊",   "Gu",        "Work on the Decayed",        [0, 1, 1, 0, 0, 1], Auspice::Unfavorable),
    rec(19, "临",   "Lin",       "Approach",                   [1, 1, 0, 0, 0, 0], Auspice::Favorable),
    rec(20, "观",   "Guan",      "Contemplation",              [0, 0, 0, 0, 1, 1], Auspice::Neutral),
    rec(21, "噬嗑", "Shi He",    "Biting Through",             [1, 0, 0, 1, 0, 1], Auspice::Neutral),
    rec(22, "贲",   "Bi",        "Grace",                      [1, 0, 1, 0, 0, 1], Auspice::Neutral),
    rec(23, "剥",   "Bo",        "Splitting Apart",            [0, 0, 0, 0, 0, 1], Auspice::Dire),
    rec(24, "复",   "Fu",        "Return",                     [1, 0, 0, 0, 0, 0], Auspice::Favorable),
    rec(25, "无妄", "Wu Wang",   "Innocence",                  [1, 0, 0, 1, 1, 1], Auspice::Neutral),
    rec(26, "大畜", "Da Chu",    "Great Taming",               [1, 1, 1, 0, 0, 1], Auspice::Favorable),
    rec(27, "颐",   "Yi",        "Nourishment",                [1, 0, 0, 0, 0, 1], Auspice::Neutral),
    rec(28, "大过", "Da Guo",    "Great Excess",               [0, 1, 1, 1, 1, 0], Auspice::Unfavorable),
    rec(29, "坎",   "Kan",       "The Abysmal",                [0, 1, 0, 0, 1, 0], Auspice::Dire),
    rec(30, "离",   "Li",        "The Clinging",               [1, 0, 1, 1, 0, 1], Auspice::Neutral),
    rec(31, "咸",   "Xian",      "Influence",                  [0, 0, 1, 1, 1, 0], Auspice::Favorable),
    rec(32, "恒",   "Heng",      "Duration",                   [0, 1, 1, 1, 0, 0], Auspice::Favorable),
    rec(33, "遁",   "Dun",       "Retreat",                    [0, 0, 1, 1, 1, 1], Auspice::Unfavorable),
    rec(34, "大壮", "Da Zhuang", "Great Power",                [1, 1, 1, 1, 0, 0], Auspice::Favorable),
    rec(35, "晋",   "Jin",       "Progress",                   [0, 0, 0, 1, 0, 1], Auspice::Favorable),
    rec(36, "明夷", "Ming Yi",   "Darkening of the Light",     [1, 0, 1, 0, 0, 0], Auspice::Dire),
    rec(37, "家人", "Jia Ren",   "The Family",                 [1, 0, 1, 0, 1, 1], Auspice::Favorable),
    rec(38, "睽",   "Kui",       "Opposition",                 [1, 1, 0, 1, 0, 1], Auspice::Unfavorable),
    rec(39, "蹇",   "Jian",      "Obstruction",                [0, 0, 1, 0, 1, 0], Auspice::Dire),
    rec(40, "解",   "Xie",       "Deliverance",                [0, 1, 0, 1, 0, 0], Auspice::Favorable),
    rec(41, "损",   "Sun",       "Decrease",                   [1, 1, 0, 0, 0, 1], Auspice::Neutral),
    rec(42, "益",   "Yi",        "Increase",                   [1, 0, 0, 0, 1, 1], Auspice::Favorable),
    rec(43, "夬",   "Guai",      "Breakthrough",               [1, 1, 1, 1, 1, 0], Auspice::Neutral),
    rec(44, "姤",   "Gou",       "Coming to Meet",             [0, 1, 1, 1, 1, 1], Auspice::Unfavorable),
    rec(45, "萃",   "Cui",       "Gathering Together",         [0, 0, 0, 1, 1, 0], Auspice::Favorable),
    rec(46, "升",   "Sheng",     "Pushing Upward",             [0, 1, 1, 0, 0, 0], Auspice::Favorable),
    rec(47, "困",   "Kun",       "Oppression",                 [0, 1, 0, 1, 1, 0], Auspice::Dire),
    rec(48, "井",   "Jing",      "The Well",                   [0, 1, 1, 0, 1, 0], Auspice::Neutral),
    rec(49, "革",   "Ge",        "Revolution",                 [1, 0, 1, 1, 1, 0], Auspice::Neutral),
    rec(50, "鼎",   "Ding",      "The Cauldron",               [0, 1, 1, 1, 0, 1], Auspice::Favorable),
    rec(51, "震",   "Zhen",      "The Arousing",               [1, 0, 0, 1, 0, 0], Auspice::Neutral),
    rec(52, "艮",   "Gen",       "Keeping Still",              [0, 0, 1, 0, 0, 1], Auspice::Neutral),
    rec(53, "渐",   "Jian",      "Gradual Progress",           [0, 0, 1, 0, 1, 1], Auspice::Favorable),
    rec(54, "归妹", "Gui Mei",   "The Marrying Maiden",        [1, 1, 0, 1, 0, 0], Auspice::Unfavorable),
    rec(55, "丰",   "Feng",      "Abundance",                  [1, 0, 1, 1, 0, 0], Auspice::Favorable),
    rec(56, "旅",   "Lu",        "The Wanderer",               [0, 0, 1, 1, 0, 1], Auspice::Unfavorable),
    rec(57, "巽",   "Xun",       "The Gentle",                 [0, 1, 1, 0, 1, 1], Auspice::Neutral),
    rec(58, "兑",   "Dui",       "The Joyous",                 [1, 1, 0, 1, 1, 0], Auspice::Favorable),
    rec(59, "涣",   "Huan",      "Dispersion",                 [0, 1, 0, 0, 1, 1], Auspice::Neutral),
    rec(60, "节",   "Jie",       "Limitation",                 [1, 1, 0, 0, 1, 0], Auspice::Neutral),
    rec(61, "中孚", "Zhong Fu",  "Inner Truth",                [1, 1, 0, 0, 1, 1], Auspice::Favorable),
    rec(62, "小过", "Xiao Guo",  "Small Excess",               [0, 0, 1, 1, 0, 0], Auspice::Unfavorable),
    rec(63, "既济", "Ji Ji",     "After Completion",           [1, 0, 1, 0, 1, 0], Auspice::Favorable),
    rec(64, "未济", "Wei Ji",    "Before Completion",          [0, 1, 0, 1, 0, 1], Auspice::Neutral),
];

/// The read-only reference table, built once and shared for the life of
/// the process.
///
/// Construction validates the embedded data: exactly 64 records, ids
/// 1-64 pairwise distinct, patterns pairwise distinct. 64 distinct
/// six-bit patterns are necessarily exhaustive, so a structurally valid
/// six-line cast always resolves.
#[derive(Debug, Clone)]
pub struct HexagramTable {
    entries: Vec<Hexagram>,
    pattern_index: HashMap<[Line; 6], usize>,
}

impl HexagramTable {
    /// Build and validate the table from the embedded King Wen records.
    pub fn new() -> CoreResult<Self> {
        Self::from_records(&RECORDS)
    }

    fn from_records(records: &[Record]) -> CoreResult<Self> {
        if records.len() != 64 {
            return Err(CoreError::IncompleteTable(records.len()));
        }

        let mut entries: Vec<Hexagram> = Vec::with_capacity(records.len());
        let mut pattern_index: HashMap<[Line; 6], usize> = HashMap::new();
        let mut seen_ids = HashSet::new();

        for record in records {
            if !(1..=64).contains(&record.id) {
                return Err(CoreError::InvalidId(record.id));
            }
            if !seen_ids.insert(record.id) {
                return Err(CoreError::DuplicateId(record.id));
            }

            let mut pattern = [Line::Yin; 6];
            for (slot, bit) in pattern.iter_mut().zip(record.pattern) {
                *slot = Line::from_value(bit)
                    .ok_or(CoreError::InvalidPattern { id: record.id })?;
            }

            if let Some(&index) = pattern_index.get(&pattern) {
                return Err(CoreError::DuplicatePattern {
                    first: entries[index].id,
                    second: record.id,
                });
            }

            pattern_index.insert(pattern, entries.len());
            entries.push(Hexagram {
                id: record.id,
                name: record.name,
                pinyin: record.pinyin,
                english: record.english,
                pattern,
                auspice: record.auspice,
            });
        }

        Ok(Self {
            entries,
            pattern_index,
        })
    }

    /// Exact ordered match of a six-line pattern.
    ///
    /// A miss means the table itself is corrupt and is surfaced as
    /// [`CoreError::NoMatchingHexagram`]; it is never papered over.
    pub fn by_pattern(&self, pattern: [Line; 6]) -> CoreResult<&Hexagram> {
        self.pattern_index
            .get(&pattern)
            .map(|&index| &self.entries[index])
            .ok_or_else(|| CoreError::NoMatchingHexagram {
                pattern: crate::line::values(pattern),
            })
    }

    /// Look up a hexagram by King Wen number.
    pub fn by_id(&self, id: u8) -> Option<&Hexagram> {
        self.entries.iter().find(|h| h.id == id)
    }

    /// Resolve a user-supplied reference: a King Wen number, a Chinese
    /// name, or a pinyin name (case-insensitive; first match by id).
    pub fn find(&self, reference: &str) -> Option<&Hexagram> {
        let reference = reference.trim();
        if let Ok(id) = reference.parse::<u8>() {
            return self.by_id(id);
        }
        if let Some(h) = self.entries.iter().find(|h| h.name == reference) {
            return Some(h);
        }
        self.entries
            .iter()
            .find(|h| h.pinyin.eq_ignore_ascii_case(reference))
    }

    /// All 64 hexagrams in King Wen order.
    pub fn all(&self) -> &[Hexagram] {
        &self.entries
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Start a filtered query over the table.
    pub fn query(&self) -> QueryBuilder<'_> {
        QueryBuilder::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trigram::Trigram;
    use proptest::prelude::*;

    #[test]
    fn table_builds() {
        let table = HexagramTable::new().unwrap();
        assert_eq!(table.len(), 64);
        assert!(!table.is_empty());
    }

    #[test]
    fn ids_are_one_through_sixty_four() {
        let table = HexagramTable::new().unwrap();
        for (index, hexagram) in table.all().iter().enumerate() {
            assert_eq!(hexagram.id as usize, index + 1);
        }
    }

    #[test]
    fn patterns_exhaust_all_combinations() {
        let table = HexagramTable::new().unwrap();
        let patterns: std::collections::HashSet<[u8; 6]> = table
            .all()
            .iter()
            .map(|h| crate::line::values(h.pattern))
            .collect();
        assert_eq!(patterns.len(), 64);
    }

    #[test]
    fn by_pattern_round_trips_every_record() {
        let table = HexagramTable::new().unwrap();
        for hexagram in table.all() {
            let found = table.by_pattern(hexagram.pattern).unwrap();
            assert_eq!(found.id, hexagram.id);
            assert_eq!(found.pattern, hexagram.pattern);
        }
    }

    #[test]
    fn by_id_lookups() {
        let table = HexagramTable::new().unwrap();
        assert_eq!(table.by_id(1).unwrap().name, "乾");
        assert_eq!(table.by_id(64).unwrap().name, "未济");
        assert!(table.by_id(0).is_none());
        assert!(table.by_id(65).is_none());
    }

    #[test]
    fn find_by_reference() {
        let table = HexagramTable::new().unwrap();
        assert_eq!(table.find("11").unwrap().name, "泰");
        assert_eq!(table.find("泰").unwrap().id, 11);
        assert_eq!(table.find("tai").unwrap().id, 11);
        // Duplicate pinyin resolves to the lowest King Wen number.
        assert_eq!(table.find("Qian").unwrap().id, 1);
        assert!(table.find("nonsense").is_none());
    }

    #[test]
    fn known_compositions() {
        let table = HexagramTable::new().unwrap();
        let tai = table.by_id(11).unwrap();
        assert_eq!(tai.lower_trigram(), Trigram::Qian);
        assert_eq!(tai.upper_trigram(), Trigram::Kun);

        let ji_ji = table.by_id(63).unwrap();
        assert_eq!(ji_ji.lower_trigram(), Trigram::Li);
        assert_eq!(ji_ji.upper_trigram(), Trigram::Kan);
        assert_eq!(ji_ji.nature(), "Water over Fire");
    }

    #[test]
    fn truncated_table_rejected() {
        let result = HexagramTable::from_records(&RECORDS[..63]);
        assert!(matches!(result, Err(CoreError::IncompleteTable(63))));
    }

    #[test]
    fn corrupt_pattern_rejected() {
        let mut records = RECORDS;
        records[4].pattern = [1, 1, 2, 0, 1, 0];
        let result = HexagramTable::from_records(&records);
        assert!(matches!(
            result,
            Err(CoreError::InvalidPattern { id: 5 })
        ));
    }

    #[test]
    fn duplicate_pattern_rejected() {
        let mut records = RECORDS;
        records[1].pattern = records[0].pattern;
        let result = HexagramTable::from_records(&records);
        assert!(matches!(
            result,
            Err(CoreError::DuplicatePattern { first: 1, second: 2 })
        ));
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut records = RECORDS;
        records[1].id = 1;
        let result = HexagramTable::from_records(&records);
        assert!(matches!(result, Err(CoreError::DuplicateId(1))));
    }

    proptest! {
        #[test]
        fn every_pattern_resolves(bits in proptest::array::uniform6(0u8..2)) {
            let table = HexagramTable::new().unwrap();
            let mut pattern = [Line::Yin; 6];
            for (slot, bit) in pattern.iter_mut().zip(bits) {
                *slot = Line::from_value(bit).unwrap();
            }
            let hexagram = table.by_pattern(pattern).unwrap();
            prop_assert_eq!(hexagram.pattern, pattern);
        }
    }
}
