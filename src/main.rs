use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

use rand::rngs::StdRng;
use rand::SeedableRng;

use eartrainer::{
    chord, generate_question_with, interval_names, staff, validate_tables, AnswerState,
    QuizSession, Settings,
};

fn usage() -> ! {
    eprintln!("Usage: eartrainer [--settings <file.yaml>] [--seed <n>] [--count <n>]");
    eprintln!("  --settings  YAML session settings (auto-sound, chord-duration, question-count)");
    eprintln!("  --seed      Reproducible question stream");
    eprintln!("  --count     Stop after answering this many questions");
    process::exit(1);
}

fn parse_choice(line: &str, names: &[&'static str; 14]) -> Option<&'static str> {
    let trimmed = line.trim();
    if let Ok(number) = trimmed.parse::<usize>() {
        if (1..=names.len()).contains(&number) {
            return Some(names[number - 1]);
        }
        return None;
    }
    names.iter().find(|name| name.eq_ignore_ascii_case(trimmed)).copied()
}

fn next_question(rng: &mut StdRng) -> eartrainer::Question {
    match generate_question_with(rng) {
        Ok(question) => question,
        Err(e) => {
            eprintln!("Question generation failed: {}", e);
            process::exit(1);
        }
    }
}

fn announce_chord(session: &QuizSession, settings: &Settings) {
    if settings.auto_sound {
        let playing = chord(&session.question().notes, settings.chord_duration);
        println!("♪ {} ({:.1}s)", playing.note_names.join(" + "), playing.duration);
    }
}

fn print_question(session: &QuizSession, settings: &Settings, names: &[&'static str; 14]) {
    println!();
    println!("{}", staff::render_text(&session.question().notes));
    println!();
    announce_chord(session, settings);
    for (i, name) in names.iter().enumerate() {
        print!("{:>2}) {:<10}", i + 1, name);
        if (i + 1) % 5 == 0 {
            println!();
        }
    }
    println!();
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut settings_path: Option<String> = None;
    let mut seed: Option<u64> = None;
    let mut count_override: Option<u32> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--settings" => {
                i += 1;
                match args.get(i) {
                    Some(path) => settings_path = Some(path.clone()),
                    None => usage(),
                }
            }
            "--seed" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse::<u64>().ok()) {
                    Some(value) => seed = Some(value),
                    None => usage(),
                }
            }
            "--count" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse::<u32>().ok()) {
                    Some(value) => count_override = Some(value),
                    None => usage(),
                }
            }
            "--help" | "-h" => usage(),
            _ => usage(),
        }
        i += 1;
    }

    let settings = match settings_path {
        Some(path) => {
            let source = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading settings '{}': {}", path, e);
                    process::exit(1);
                }
            };
            match Settings::parse(&source) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Error in settings '{}': {}", path, e);
                    process::exit(1);
                }
            }
        }
        None => Settings::default(),
    };
    let question_count = count_override.or(settings.question_count);

    if let Err(e) = validate_tables() {
        eprintln!("{}", e);
        process::exit(1);
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let names = interval_names();
    let mut session = QuizSession::new(next_question(&mut rng));

    println!("Interval Trainer");
    println!("Name the interval between the two notes. Enter a number or a name; q quits.");
    print_question(&session, &settings, &names);
    prompt();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                process::exit(1);
            }
        };
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }

        let Some(choice) = parse_choice(trimmed, &names) else {
            println!("Unknown interval '{}'. Enter 1-{} or a name from the list.", trimmed, names.len());
            prompt();
            continue;
        };

        session.select(choice);
        match session.submit() {
            Some(AnswerState::Correct) => {
                let board = session.scoreboard();
                print!("Correct! {} answered", board.correct_count());
                if let Some(average) = board.average_time() {
                    print!(", {:.2}s average", average.as_secs_f64());
                }
                println!(".");

                if let Some(limit) = question_count {
                    if board.correct_count() >= limit {
                        break;
                    }
                }
                session.advance(next_question(&mut rng));
                print_question(&session, &settings, &names);
            }
            Some(AnswerState::Incorrect) => {
                println!("Incorrect! Try again.");
                announce_chord(&session, &settings);
            }
            _ => {}
        }
        prompt();
    }

    let board = session.scoreboard();
    println!();
    print!("Session over: {} correct", board.correct_count());
    match board.average_time() {
        Some(average) => println!(", {:.2}s average time to answer.", average.as_secs_f64()),
        None => println!("."),
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
