use crate::fill::Assignment;
use crate::parse::{compute_neighbors, compute_overlaps, parse_slots, Slot};
use rustc_hash::FxHashMap;
use std::fmt;

#[derive(PartialEq, Debug, Clone)]
pub struct Crossword {
    pub(crate) contents: String,
    pub(crate) width: usize,
    pub(crate) height: usize,
    slots: Vec<Slot>,
    overlaps: FxHashMap<(Slot, Slot), (usize, usize)>,
    neighbors: FxHashMap<Slot, Vec<Slot>>,
}

impl Crossword {
    pub fn new(contents: String) -> Result<Crossword, String> {
        let without_newlines: String = contents.chars().filter(|c| *c != '\n').collect();

        let width = (without_newlines.len() as f64).sqrt() as usize;
        if width * width != without_newlines.len() {
            return Err(String::from("Contents are not a square."));
        }
        Ok(Crossword::build(without_newlines, width, width))
    }

    pub fn rectangle(contents: String, width: usize, height: usize) -> Result<Crossword, String> {
        let without_newlines: String = contents.chars().filter(|c| *c != '\n').collect();

        if width * height != without_newlines.len() {
            return Err(String::from("Contents do not match the given dimensions."));
        }
        Ok(Crossword::build(without_newlines, width, height))
    }

    fn build(contents: String, width: usize, height: usize) -> Crossword {
        let mut result = Crossword {
            contents,
            width,
            height,
            slots: vec![],
            overlaps: FxHashMap::default(),
            neighbors: FxHashMap::default(),
        };

        result.slots = parse_slots(&result);
        result.overlaps = compute_overlaps(&result.slots);
        result.neighbors = compute_neighbors(&result.slots, &result.overlaps);
        result
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn fillable(&self, row: usize, col: usize) -> bool {
        self.contents.as_bytes()[row * self.width + col] as char != '*'
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    // overlaps are stored once per unordered pair; a reversed lookup
    // swaps the offsets back around
    pub fn overlap(&self, x: &Slot, y: &Slot) -> Option<(usize, usize)> {
        if x <= y {
            self.overlaps.get(&(*x, *y)).copied()
        } else {
            self.overlaps.get(&(*y, *x)).map(|&(i, j)| (j, i))
        }
    }

    pub fn neighbors(&self, slot: &Slot) -> &[Slot] {
        self.neighbors.get(slot).map(|n| n.as_slice()).unwrap_or(&[])
    }

    pub fn letters(&self, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
        let mut letters = vec![vec![None; self.width]; self.height];

        for (slot, word) in assignment {
            for (index, c) in word.chars().enumerate() {
                let (row, col) = slot.cell(index);
                letters[row][col] = Some(c);
            }
        }

        letters
    }

    pub fn render(&self, assignment: &Assignment) -> String {
        let letters = self.letters(assignment);
        let mut result = String::new();

        for row in 0..self.height {
            for col in 0..self.width {
                if self.fillable(row, col) {
                    result.push(letters[row][col].unwrap_or(' '));
                } else {
                    result.push('█');
                }
            }
            result.push('\n');
        }

        result
    }
}

impl fmt::Display for Crossword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                write!(
                    f,
                    "{}",
                    self.contents.as_bytes()[row * self.width + col] as char
                )?;
                if col != self.width - 1 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum Direction {
    Across,
    Down,
}
