use crate::api::sheet::{Sheet, SheetRecord};
use crate::core::grid::{Level, level1_frames, level2_frames, level3_frames};
use crate::core::zone::Zone;
use crate::util::coord::Transformer;
use crate::util::error::ZukakuError;

/// One generation's worth of sheets at a single level.
///
/// A set is produced whole or not at all: a transform failure aborts the
/// generating call and no partial set is returned. Sheets are ordered
/// row-major from the northwest.
#[derive(Debug, Clone)]
pub struct SheetSet {
    sheets: Vec<Sheet>,
    level: Level,
}

impl SheetSet {
    /// All 160 1:50000 sheets of one zone.
    pub fn level1(zone: &Zone, transformer: &Transformer) -> Result<SheetSet, ZukakuError> {
        let sheets = level1_frames(zone)
            .into_iter()
            .map(|frame| Sheet::from_frame(frame, transformer))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SheetSet {
            sheets,
            level: Level::L50000,
        })
    }

    /// Generate the next finer set below the sheet with the given code.
    ///
    /// Resolves the code in this set (`SheetNotFound` on a stale or unknown
    /// selection), then subdivides: a 1:50000 sheet into its 100 1:5000
    /// sheets, a 1:5000 sheet into its 4 quadrants. 1:2500 sheets cannot be
    /// subdivided.
    pub fn subdivide(
        &self,
        code: &str,
        transformer: &Transformer,
    ) -> Result<SheetSet, ZukakuError> {
        let parent = self.find_by_code(code)?.frame();

        let (level, frames) = match self.level {
            Level::L50000 => (Level::L5000, level2_frames(&parent)),
            Level::L5000 => (Level::L2500, level3_frames(&parent)),
            Level::L2500 => return Err(ZukakuError::FinestLevel),
        };

        let sheets = frames
            .into_iter()
            .map(|frame| Sheet::from_frame(frame, transformer))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SheetSet { sheets, level })
    }

    /// Exact-code lookup within this set.
    pub fn find_by_code(&self, code: &str) -> Result<&Sheet, ZukakuError> {
        self.sheets
            .iter()
            .find(|sheet| sheet.code == code)
            .ok_or_else(|| ZukakuError::SheetNotFound(code.to_string()))
    }

    /// Scale level of every sheet in this set.
    pub fn level(&self) -> Level {
        self.level
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    /// Sheet codes in grid order, e.g. for a selection widget.
    pub fn codes(&self) -> Vec<&str> {
        self.sheets.iter().map(|sheet| sheet.code.as_str()).collect()
    }

    /// Flat renderer records, one per sheet.
    pub fn records(&self) -> Vec<SheetRecord> {
        self.sheets.iter().map(|sheet| sheet.record()).collect()
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&Sheet>
    where
        F: Fn(&Sheet) -> bool,
    {
        self.sheets.iter().filter(|sheet| predicate(sheet)).collect()
    }
}

/// Selection-driven drill-down through the three sheet levels of one zone.
///
/// Owns the zone's transformer and at most one sheet set per level.
/// Selecting a 1:50000 sheet replaces the 1:5000 set and discards any
/// 1:2500 set generated under the previous selection; stale sets are never
/// merged with fresh ones. Changing zone means building a new index.
///
/// # Example
///
/// ```no_run
/// use zukaku_rs::SheetIndex;
///
/// # fn main() -> Result<(), zukaku_rs::ZukakuError> {
/// let mut index = SheetIndex::new(9)?;
/// assert_eq!(index.level1().len(), 160);
///
/// index.select_level1("09AA")?;
/// let quadrants = index.select_level2("09AA00")?;
/// assert_eq!(quadrants.len(), 4);
/// # Ok(())
/// # }
/// ```
pub struct SheetIndex {
    zone: Zone,
    transformer: Transformer,
    level1: SheetSet,
    level2: Option<SheetSet>,
    level3: Option<SheetSet>,
}

impl SheetIndex {
    /// Build the index for one zone and generate its 1:50000 set.
    pub fn new(zone_number: u8) -> Result<Self, ZukakuError> {
        let zone = Zone::lookup(zone_number)?;
        let transformer = Transformer::for_zone(&zone)?;
        let level1 = SheetSet::level1(&zone, &transformer)?;

        Ok(Self {
            zone,
            transformer,
            level1,
            level2: None,
            level3: None,
        })
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    pub fn transformer(&self) -> &Transformer {
        &self.transformer
    }

    pub fn level1(&self) -> &SheetSet {
        &self.level1
    }

    pub fn level2(&self) -> Option<&SheetSet> {
        self.level2.as_ref()
    }

    pub fn level3(&self) -> Option<&SheetSet> {
        self.level3.as_ref()
    }

    /// Select a 1:50000 sheet and generate its 1:5000 set.
    ///
    /// Any 1:2500 set from an earlier selection is discarded.
    pub fn select_level1(&mut self, code: &str) -> Result<&SheetSet, ZukakuError> {
        let set = self.level1.subdivide(code, &self.transformer)?;
        self.level3 = None;
        Ok(self.level2.insert(set))
    }

    /// Select a 1:5000 sheet and generate its four 1:2500 quadrants.
    ///
    /// Fails with `SheetNotFound` if no 1:5000 set is active (e.g. the
    /// selection went stale when the coarser selection changed).
    pub fn select_level2(&mut self, code: &str) -> Result<&SheetSet, ZukakuError> {
        let parent = self
            .level2
            .as_ref()
            .ok_or_else(|| ZukakuError::SheetNotFound(code.to_string()))?;
        let set = parent.subdivide(code, &self.transformer)?;
        Ok(self.level3.insert(set))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone9_level1() -> Result<(Zone, Transformer, SheetSet), ZukakuError> {
        let zone = Zone::lookup(9)?;
        let transformer = Transformer::for_zone(&zone)?;
        let sheets = SheetSet::level1(&zone, &transformer)?;
        Ok((zone, transformer, sheets))
    }

    #[test]
    fn test_level1_set() -> Result<(), ZukakuError> {
        let (_, _, sheets) = zone9_level1()?;

        assert_eq!(sheets.len(), 160);
        assert_eq!(sheets.level(), Level::L50000);
        assert_eq!(sheets.codes()[0], "09AA");
        assert_eq!(sheets.codes()[159], "09TH");
        Ok(())
    }

    #[test]
    fn test_find_by_code() -> Result<(), ZukakuError> {
        let (_, _, sheets) = zone9_level1()?;

        let sheet = sheets.find_by_code("09AA")?;
        assert_eq!(sheet.code, "09AA");

        assert_eq!(
            sheets.find_by_code("09ZZ").unwrap_err(),
            ZukakuError::SheetNotFound("09ZZ".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_subdivide_chain() -> Result<(), ZukakuError> {
        let (_, transformer, level1) = zone9_level1()?;

        let level2 = level1.subdivide("09AA", &transformer)?;
        assert_eq!(level2.len(), 100);
        assert_eq!(level2.level(), Level::L5000);

        let level3 = level2.subdivide("09AA00", &transformer)?;
        assert_eq!(level3.len(), 4);
        assert_eq!(level3.level(), Level::L2500);
        assert_eq!(level3.codes(), vec!["09AA001", "09AA002", "09AA003", "09AA004"]);

        assert_eq!(
            level3.subdivide("09AA001", &transformer).unwrap_err(),
            ZukakuError::FinestLevel
        );
        Ok(())
    }

    #[test]
    fn test_subdivide_unknown_code() -> Result<(), ZukakuError> {
        let (_, transformer, level1) = zone9_level1()?;

        let result = level1.subdivide("08AA", &transformer);
        assert_eq!(
            result.unwrap_err(),
            ZukakuError::SheetNotFound("08AA".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_records_match_sheets() -> Result<(), ZukakuError> {
        let (_, transformer, level1) = zone9_level1()?;
        let level2 = level1.subdivide("09AA", &transformer)?;

        let records = level2.records();
        assert_eq!(records.len(), 100);
        assert!(records.iter().all(|r| r.level == 5000));
        assert!(records.iter().all(|r| r.nw_lat.is_none()));
        Ok(())
    }

    #[test]
    fn test_filter() -> Result<(), ZukakuError> {
        let (_, _, sheets) = zone9_level1()?;

        let eastern = sheets.filter(|sheet| sheet.nw_corner.x() >= 0.0);
        assert_eq!(eastern.len(), 80);
        Ok(())
    }

    #[test]
    fn test_index_drill_down() -> Result<(), ZukakuError> {
        let mut index = SheetIndex::new(9)?;
        assert_eq!(index.zone().number, 9);
        assert_eq!(index.level1().len(), 160);
        assert!(index.level2().is_none());

        index.select_level1("09AA")?;
        assert_eq!(index.level2().map(|s| s.len()), Some(100));

        index.select_level2("09AA00")?;
        assert_eq!(index.level3().map(|s| s.len()), Some(4));
        Ok(())
    }

    #[test]
    fn test_index_discards_stale_finer_sets() -> Result<(), ZukakuError> {
        let mut index = SheetIndex::new(9)?;
        index.select_level1("09AA")?;
        index.select_level2("09AA00")?;

        // Re-selecting at 1:50000 invalidates the old quadrants.
        index.select_level1("09AB")?;
        assert!(index.level3().is_none());
        assert_eq!(index.level2().and_then(|s| s.codes().first().map(|c| c.to_string())),
            Some("09AB00".to_string()));

        // The 1:2500 selection is now stale too.
        let result = index.select_level2("09AA00");
        assert_eq!(
            result.unwrap_err(),
            ZukakuError::SheetNotFound("09AA00".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_index_invalid_zone() {
        assert!(matches!(SheetIndex::new(0), Err(ZukakuError::InvalidZone(0))));
        assert!(matches!(SheetIndex::new(14), Err(ZukakuError::InvalidZone(14))));
    }

    #[test]
    fn test_select_level2_without_level1_selection() -> Result<(), ZukakuError> {
        let mut index = SheetIndex::new(9)?;
        let result = index.select_level2("09AA00");
        assert_eq!(
            result.unwrap_err(),
            ZukakuError::SheetNotFound("09AA00".to_string())
        );
        Ok(())
    }
}
