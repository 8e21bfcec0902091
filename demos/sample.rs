use xfill::crossword::Crossword;
use xfill::fill::solve;

fn main() {
    let crossword = Crossword::new(String::from(
        "
___
*_*
*_*
",
    ))
    .unwrap();

    println!("{}", crossword);

    let words: Vec<String> = vec!["CAT", "DOG", "ACE"]
        .into_iter()
        .map(String::from)
        .collect();

    match solve(&crossword, &words) {
        Some(assignment) => print!("{}", crossword.render(&assignment)),
        None => println!("No solution."),
    }
}
