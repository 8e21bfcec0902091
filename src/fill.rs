use crate::consistency::{ac3, build_domains, enforce_node_consistency, Domains};
use crate::crossword::Crossword;
use crate::order::{order_domain_values, select_unassigned_slot};
use crate::parse::Slot;
use rustc_hash::{FxHashMap, FxHashSet};

pub type Assignment = FxHashMap<Slot, String>;

pub fn solve(crossword: &Crossword, words: &[String]) -> Option<Assignment> {
    let mut domains = build_domains(crossword, words);
    enforce_node_consistency(&mut domains);

    // an empty domain here already proves there is no solution
    if !ac3(&mut domains, crossword, None) {
        return None;
    }

    let mut assignment = Assignment::default();
    if backtrack(crossword, &domains, &mut assignment) {
        Some(assignment)
    } else {
        None
    }
}

pub fn assignment_complete(crossword: &Crossword, assignment: &Assignment) -> bool {
    crossword
        .slots()
        .iter()
        .all(|slot| assignment.contains_key(slot))
}

pub fn consistent(crossword: &Crossword, assignment: &Assignment) -> bool {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for word in assignment.values() {
        if !seen.insert(word) {
            return false;
        }
    }

    for (slot, word) in assignment {
        if word.len() != slot.length {
            return false;
        }
    }

    for (x, x_word) in assignment {
        for y in crossword.neighbors(x) {
            if let Some(y_word) = assignment.get(y) {
                let (i, j) = crossword.overlap(x, y).unwrap();
                if x_word.as_bytes()[i] != y_word.as_bytes()[j] {
                    return false;
                }
            }
        }
    }

    true
}

pub fn backtrack(crossword: &Crossword, domains: &Domains, assignment: &mut Assignment) -> bool {
    if assignment_complete(crossword, assignment) {
        return true;
    }

    let slot = match select_unassigned_slot(crossword, domains, assignment) {
        Some(slot) => slot,
        None => return false,
    };

    for word in order_domain_values(crossword, domains, assignment, &slot) {
        assignment.insert(slot, word);
        if consistent(crossword, assignment) && backtrack(crossword, domains, assignment) {
            // first complete assignment wins
            return true;
        }
        assignment.remove(&slot);
    }

    false
}
