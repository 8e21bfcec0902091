use crate::crossword::{Crossword, Direction};
use rustc_hash::FxHashMap;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Slot {
    pub(crate) start_row: usize,
    pub(crate) start_col: usize,
    pub(crate) length: usize,
    pub(crate) direction: Direction,
}

impl Slot {
    pub fn cell(&self, index: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.start_row, self.start_col + index),
            Direction::Down => (self.start_row + index, self.start_col),
        }
    }
}

pub(crate) fn parse_slots(crossword: &Crossword) -> Vec<Slot> {
    let mut result = vec![];

    for row in 0..crossword.height() {
        let mut start_col = None;
        let mut length = 0;

        for col in 0..crossword.width() {
            if crossword.fillable(row, col) {
                // found a fillable cell; is it our first?
                if start_col == None {
                    start_col = Some(col);
                }
                length += 1;
            } else {
                // runs of a single cell belong to the crossing direction only
                if length >= 2 {
                    result.push(Slot {
                        start_row: row,
                        start_col: start_col.unwrap(),
                        length,
                        direction: Direction::Across,
                    });
                }
                start_col = None;
                length = 0;
            }
        }
        // have to process end of row
        if length >= 2 {
            result.push(Slot {
                start_row: row,
                start_col: start_col.unwrap(),
                length,
                direction: Direction::Across,
            });
        }
    }

    for col in 0..crossword.width() {
        let mut start_row = None;
        let mut length = 0;

        for row in 0..crossword.height() {
            if crossword.fillable(row, col) {
                if start_row == None {
                    start_row = Some(row);
                }
                length += 1;
            } else {
                if length >= 2 {
                    result.push(Slot {
                        start_row: start_row.unwrap(),
                        start_col: col,
                        length,
                        direction: Direction::Down,
                    });
                }
                start_row = None;
                length = 0;
            }
        }
        // have to process end of column
        if length >= 2 {
            result.push(Slot {
                start_row: start_row.unwrap(),
                start_col: col,
                length,
                direction: Direction::Down,
            });
        }
    }

    result
}

pub(crate) fn compute_overlaps(slots: &[Slot]) -> FxHashMap<(Slot, Slot), (usize, usize)> {
    // index every cell each slot covers, then pair up slots sharing a cell
    let mut cell_lookup: FxHashMap<(usize, usize), Vec<(Slot, usize)>> = FxHashMap::default();

    for slot in slots {
        for index in 0..slot.length {
            cell_lookup
                .entry(slot.cell(index))
                .or_insert_with(Vec::new)
                .push((*slot, index));
        }
    }

    let mut result = FxHashMap::default();

    for entries in cell_lookup.values() {
        for (x, i) in entries {
            for (y, j) in entries {
                // keyed once per unordered pair
                if x < y {
                    result.insert((*x, *y), (*i, *j));
                }
            }
        }
    }

    result
}

pub(crate) fn compute_neighbors(
    slots: &[Slot],
    overlaps: &FxHashMap<(Slot, Slot), (usize, usize)>,
) -> FxHashMap<Slot, Vec<Slot>> {
    let mut result: FxHashMap<Slot, Vec<Slot>> =
        slots.iter().map(|slot| (*slot, vec![])).collect();

    for (x, y) in overlaps.keys() {
        result.get_mut(x).unwrap().push(*y);
        result.get_mut(y).unwrap().push(*x);
    }

    result
}
