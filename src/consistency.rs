use crate::crossword::Crossword;
use crate::parse::Slot;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

pub type Domains = FxHashMap<Slot, FxHashSet<String>>;

pub fn build_domains(crossword: &Crossword, words: &[String]) -> Domains {
    crossword
        .slots()
        .iter()
        .map(|slot| (*slot, words.iter().cloned().collect()))
        .collect()
}

pub fn enforce_node_consistency(domains: &mut Domains) {
    for (slot, candidates) in domains.iter_mut() {
        candidates.retain(|word| word.len() == slot.length);
    }
}

pub fn revise(domains: &mut Domains, crossword: &Crossword, x: &Slot, y: &Slot) -> bool {
    let (i, j) = match crossword.overlap(x, y) {
        Some(offsets) => offsets,
        // non-overlapping slots impose no constraint on each other
        None => return false,
    };

    // collect first, remove after; the scan must not mutate the set it
    // is iterating
    let mut to_remove = vec![];
    {
        let x_domain = &domains[x];
        let y_domain = &domains[y];

        for x_word in x_domain {
            let supported = y_domain
                .iter()
                .any(|y_word| x_word.as_bytes()[i] == y_word.as_bytes()[j]);
            if !supported {
                to_remove.push(x_word.clone());
            }
        }
    }

    let revised = !to_remove.is_empty();
    let x_domain = domains.get_mut(x).unwrap();
    for word in &to_remove {
        x_domain.remove(word);
    }

    revised
}

pub fn ac3(
    domains: &mut Domains,
    crossword: &Crossword,
    arcs: Option<Vec<(Slot, Slot)>>,
) -> bool {
    let mut queue: VecDeque<(Slot, Slot)> = match arcs {
        Some(arcs) => arcs.into_iter().collect(),
        None => {
            let mut initial = VecDeque::new();
            for x in crossword.slots() {
                for y in crossword.neighbors(x) {
                    initial.push_back((*x, *y));
                }
            }
            initial
        }
    };

    while let Some((x, y)) = queue.pop_front() {
        if revise(domains, crossword, &x, &y) {
            if domains[&x].is_empty() {
                return false;
            }
            // x's domain shrank, so every other slot crossing x needs
            // another look
            for z in crossword.neighbors(&x) {
                if *z != y {
                    queue.push_back((*z, x));
                }
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::{ac3, build_domains, enforce_node_consistency, revise};
    use crate::crossword::{Crossword, Direction};
    use crate::parse::Slot;

    fn words(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|w| String::from(*w)).collect()
    }

    fn crossing_grid() -> Crossword {
        Crossword::new(String::from(
            "
___
*_*
*_*
",
        ))
        .unwrap()
    }

    const ACROSS: Slot = Slot {
        start_row: 0,
        start_col: 0,
        length: 3,
        direction: Direction::Across,
    };

    const DOWN: Slot = Slot {
        start_row: 0,
        start_col: 1,
        length: 3,
        direction: Direction::Down,
    };

    #[test]
    fn node_consistency_works() {
        let crossword = crossing_grid();
        let mut domains = build_domains(&crossword, &words(&["CAT", "DOG", "ACE", "PLUM", "BE"]));

        enforce_node_consistency(&mut domains);

        for (slot, candidates) in &domains {
            assert!(!candidates.is_empty());
            for word in candidates {
                assert_eq!(slot.length, word.len());
            }
        }
    }

    #[test]
    fn node_consistency_is_idempotent() {
        let crossword = crossing_grid();
        let mut domains = build_domains(&crossword, &words(&["CAT", "DOG", "ACE", "PLUM"]));

        enforce_node_consistency(&mut domains);
        let once = domains.clone();
        enforce_node_consistency(&mut domains);

        assert_eq!(once, domains);
    }

    #[test]
    fn revise_removes_unsupported_words() {
        let crossword = crossing_grid();
        let mut domains = build_domains(&crossword, &words(&["CAT", "DOG", "ACE"]));
        enforce_node_consistency(&mut domains);
        domains.get_mut(&DOWN).unwrap().remove("CAT");
        domains.get_mut(&DOWN).unwrap().remove("DOG");

        // only ACE remains for the down slot, so the across slot loses
        // every word without an A in the crossing cell
        assert!(revise(&mut domains, &crossword, &ACROSS, &DOWN));
        assert!(domains[&ACROSS].contains("CAT"));
        assert!(!domains[&ACROSS].contains("DOG"));
        assert!(!domains[&ACROSS].contains("ACE"));

        // a second pass has nothing left to remove
        assert!(!revise(&mut domains, &crossword, &ACROSS, &DOWN));
    }

    #[test]
    fn revise_is_a_noop_without_overlap() {
        let crossword = Crossword::new(String::from(
            "
___
***
___
",
        ))
        .unwrap();

        let first = Slot {
            start_row: 0,
            start_col: 0,
            length: 3,
            direction: Direction::Across,
        };
        let second = Slot {
            start_row: 2,
            start_col: 0,
            length: 3,
            direction: Direction::Across,
        };

        let mut domains = build_domains(&crossword, &words(&["CAT", "DOG"]));
        enforce_node_consistency(&mut domains);

        assert!(!revise(&mut domains, &crossword, &first, &second));
        assert_eq!(2, domains[&first].len());
    }

    #[test]
    fn ac3_reaches_a_supported_fixed_point() {
        let crossword = crossing_grid();
        let mut domains = build_domains(&crossword, &words(&["CAT", "DOG", "ACE"]));
        enforce_node_consistency(&mut domains);

        assert!(ac3(&mut domains, &crossword, None));

        // every remaining word has a supporting word in each crossing slot
        for x in crossword.slots() {
            assert!(!domains[x].is_empty());
            for y in crossword.neighbors(x) {
                let (i, j) = crossword.overlap(x, y).unwrap();
                for x_word in &domains[x] {
                    assert!(domains[y]
                        .iter()
                        .any(|y_word| x_word.as_bytes()[i] == y_word.as_bytes()[j]));
                }
            }
        }
    }

    #[test]
    fn ac3_detects_an_empty_domain() {
        let crossword = crossing_grid();
        let mut domains = build_domains(&crossword, &words(&["CAT", "DOG"]));
        enforce_node_consistency(&mut domains);

        // no word pair agrees on the crossing cell
        assert!(!ac3(&mut domains, &crossword, None));
        assert!(domains.values().any(|candidates| candidates.is_empty()));
    }

    #[test]
    fn ac3_accepts_an_explicit_arc_list() {
        let crossword = crossing_grid();
        let mut domains = build_domains(&crossword, &words(&["CAT", "DOG", "ACE"]));
        enforce_node_consistency(&mut domains);

        assert!(ac3(&mut domains, &crossword, Some(vec![(ACROSS, DOWN)])));
        assert!(!domains[&ACROSS].contains("DOG"));
    }

    #[test]
    fn ac3_leaves_isolated_slots_alone() {
        let crossword = Crossword::rectangle(String::from("____"), 4, 1).unwrap();
        let mut domains = build_domains(&crossword, &words(&["PLUM", "SAND"]));
        enforce_node_consistency(&mut domains);

        assert!(ac3(&mut domains, &crossword, None));

        let slot = crossword.slots()[0];
        assert_eq!(2, domains[&slot].len());
    }
}
