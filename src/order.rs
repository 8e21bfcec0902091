use crate::consistency::Domains;
use crate::crossword::Crossword;
use crate::fill::Assignment;
use crate::parse::Slot;
use std::cmp::Reverse;

pub fn select_unassigned_slot(
    crossword: &Crossword,
    domains: &Domains,
    assignment: &Assignment,
) -> Option<Slot> {
    // fewest remaining candidates wins; ties go to the slot with the
    // most crossings
    crossword
        .slots()
        .iter()
        .filter(|slot| !assignment.contains_key(slot))
        .min_by_key(|slot| (domains[*slot].len(), Reverse(crossword.neighbors(slot).len())))
        .copied()
}

pub fn order_domain_values(
    crossword: &Crossword,
    domains: &Domains,
    assignment: &Assignment,
    slot: &Slot,
) -> Vec<String> {
    let unassigned_neighbors: Vec<&Slot> = crossword
        .neighbors(slot)
        .iter()
        .filter(|neighbor| !assignment.contains_key(*neighbor))
        .collect();

    let mut scored: Vec<(usize, String)> = domains[slot]
        .iter()
        .map(|word| {
            let mut eliminated = 0;
            for &neighbor in &unassigned_neighbors {
                let (i, j) = crossword.overlap(slot, neighbor).unwrap();
                eliminated += domains[neighbor]
                    .iter()
                    .filter(|other| word.as_bytes()[i] != other.as_bytes()[j])
                    .count();
            }
            (eliminated, word.clone())
        })
        .collect();

    // least constraining value first
    scored.sort_by_key(|(eliminated, _)| *eliminated);
    scored.into_iter().map(|(_, word)| word).collect()
}
