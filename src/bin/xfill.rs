extern crate clap;

use clap::{App, Arg};
use xfill::crossword::Crossword;
use xfill::fill::solve;

fn main() -> Result<(), String> {
    let matches = App::new("xfill")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .value_name("FILE")
                .help("Input crossword structure location")
                .required(true),
        )
        .arg(
            Arg::with_name("words")
                .short("d")
                .long("words")
                .value_name("FILE")
                .help("Word list location, one word per line")
                .required(true),
        )
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .value_name("WIDTH")
                .help("Input crossword width. Required if input is not a square"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("HEIGHT")
                .help("Input crossword height. Required if input is not a square"),
        )
        .get_matches();

    let input = matches.value_of("input").expect("input not included");
    let input = std::fs::read_to_string(input).expect("failed to read input");

    let words_path = matches.value_of("words").expect("words not included");
    let words: Vec<String> = std::fs::read_to_string(words_path)
        .expect("failed to read word list")
        .lines()
        .map(|line| line.trim().to_owned())
        .filter(|line| !line.is_empty())
        .collect();

    let crossword = match (matches.value_of("width"), matches.value_of("height")) {
        (Some(width), Some(height)) => {
            let width = width.parse().expect("Failed to parse width");
            let height = height.parse().expect("Failed to parse height");
            Crossword::rectangle(input, width, height).expect("Failed to parse crossword")
        }
        (None, None) => Crossword::new(input).expect("Failed to parse crossword"),
        (None, Some(_)) => return Err(String::from("Height specified but not width.")),
        (Some(_), None) => return Err(String::from("Width specified but not height.")),
    };

    match solve(&crossword, &words) {
        Some(assignment) => print!("{}", crossword.render(&assignment)),
        None => println!("No solution."),
    }
    Ok(())
}
