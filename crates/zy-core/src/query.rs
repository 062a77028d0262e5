//! Query builder for filtering and searching the table.

use crate::auspice::Auspice;
use crate::hexagram::Hexagram;
use crate::table::HexagramTable;
use crate::trigram::Trigram;

/// A builder for filtering and searching hexagrams.
///
/// Free text matches the Chinese name, pinyin, or English gloss as a
/// case-insensitive substring, or the King Wen number exactly.
pub struct QueryBuilder<'t> {
    table: &'t HexagramTable,
    text: Option<String>,
    auspice: Option<Auspice>,
    trigram: Option<Trigram>,
    limit: Option<usize>,
}

impl<'t> QueryBuilder<'t> {
    pub(crate) fn new(table: &'t HexagramTable) -> Self {
        Self {
            table,
            text: None,
            auspice: None,
            trigram: None,
            limit: None,
        }
    }

    /// Filter by free text.
    pub fn text(mut self, query: impl Into<String>) -> Self {
        self.text = Some(query.into().to_lowercase());
        self
    }

    /// Filter to hexagrams of one auspice rank.
    pub fn auspice(mut self, auspice: Auspice) -> Self {
        self.auspice = Some(auspice);
        self
    }

    /// Filter to hexagrams containing the given trigram (upper or lower).
    pub fn trigram(mut self, trigram: Trigram) -> Self {
        self.trigram = Some(trigram);
        self
    }

    /// Limit the number of results.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Execute the query. Results are sorted by King Wen number.
    pub fn execute(self) -> Vec<&'t Hexagram> {
        let mut results: Vec<&Hexagram> = self
            .table
            .all()
            .iter()
            .filter(|h| self.matches(h))
            .collect();
        results.sort_by_key(|h| h.id);
        if let Some(limit) = self.limit {
            results.truncate(limit);
        }
        results
    }

    /// Count matching hexagrams without collecting them.
    pub fn count(self) -> usize {
        self.table.all().iter().filter(|h| self.matches(h)).count()
    }

    fn matches(&self, hexagram: &Hexagram) -> bool {
        if let Some(ref q) = self.text {
            let hit = hexagram.name.contains(q.as_str())
                || hexagram.pinyin.to_lowercase().contains(q.as_str())
                || hexagram.english.to_lowercase().contains(q.as_str())
                || hexagram.id.to_string() == *q;
            if !hit {
                return false;
            }
        }

        if let Some(auspice) = self.auspice
            && hexagram.auspice != auspice
        {
            return false;
        }

        if let Some(trigram) = self.trigram
            && hexagram.lower_trigram() != trigram
            && hexagram.upper_trigram() != trigram
        {
            return false;
        }

        true
    }
}
