use crate::ResponseParser::parser::ResponseParser;
use crate::Session::chat_session::ChemySession;
use crate::Session::prompt::build_messages;
use crate::Utils::load_from_file::load_response_from_file;
use crate::Utils::pretty_print::{pretty_print, print_possibilities};
use crate::settings::ChemySettings;
use chrono::Utc;
use rand::rngs::StdRng;
use std::error::Error;
use std::io::{self, BufRead, Write};

const PASTE_TERMINATOR: &str = "END";

pub fn run_interactive_menu(settings: &ChemySettings) -> Result<(), Box<dyn Error>> {
    let mut session = ChemySession::new();
    let mut parser: ResponseParser<StdRng> = ResponseParser::with_rng(settings.make_rng());
    loop {
        show_main_menu()?;
        let choice = get_user_input()?;

        let outcome = match choice.trim() {
            "1" => load_file(&mut session, &mut parser),
            "2" => paste_response(&mut session, &mut parser),
            "3" => {
                list_possibilities(&session);
                Ok(())
            }
            "4" => show_details(&mut session, settings.show_units),
            "5" => confirm(&session),
            "6" => show_prompt(&mut session),
            "7" => {
                session.clear_history();
                println!("Session cleared");
                Ok(())
            }
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => {
                println!("Invalid choice. Please try again.");
                Ok(())
            }
        };
        if let Err(e) = outcome {
            println!("\x1b[31mError: {}\x1b[0m", e);
        }
    }
    Ok(())
}
/* colors
Blue (\x1b[34m) - header
Yellow (\x1b[33m) - menu options
Cyan (\x1b[36m) - prompts
Red (\x1b[31m) - errors
*/
fn show_main_menu() -> io::Result<()> {
    println!("\x1b[34m\n Chemy: chemical synthesis proposal parser \n\x1b[0m");
    println!("\x1b[33m1. Load response from file\x1b[0m");
    println!("\x1b[33m2. Paste response\x1b[0m");
    println!("\x1b[33m3. List possibilities\x1b[0m");
    println!("\x1b[33m4. Show and select possibility\x1b[0m");
    println!("\x1b[33m5. Confirm selected possibility\x1b[0m");
    println!("\x1b[33m6. Build request messages\x1b[0m");
    println!("\x1b[33m7. Clear session\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    prompt("Enter your choice: ")
}

fn prompt(text: &str) -> io::Result<()> {
    print!("\x1b[36m{}\x1b[0m", text);
    io::stdout().flush()
}

fn get_user_input() -> io::Result<String> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input)
}

fn apply(
    session: &mut ChemySession,
    parser: &mut ResponseParser<StdRng>,
    raw: &str,
) -> Result<(), Box<dyn Error>> {
    let count = session.apply_response(raw, parser, Utc::now())?;
    println!("{} possibilities parsed", count);
    print_possibilities(&session.possibilities);
    Ok(())
}

fn load_file(
    session: &mut ChemySession,
    parser: &mut ResponseParser<StdRng>,
) -> Result<(), Box<dyn Error>> {
    prompt("File name: ")?;
    let file_name = get_user_input()?;
    let raw = load_response_from_file(file_name.trim())?;
    apply(session, parser, &raw)
}

fn paste_response(
    session: &mut ChemySession,
    parser: &mut ResponseParser<StdRng>,
) -> Result<(), Box<dyn Error>> {
    println!("Paste the response, finish with a line containing only {}", PASTE_TERMINATOR);
    let raw = read_until_terminator(io::stdin().lock())?;
    apply(session, parser, &raw)
}

fn read_until_terminator(reader: impl BufRead) -> io::Result<String> {
    let mut raw = String::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim() == PASTE_TERMINATOR {
            break;
        }
        raw.push_str(&line);
        raw.push('\n');
    }
    Ok(raw)
}

fn list_possibilities(session: &ChemySession) {
    if session.possibilities.is_empty() {
        println!("No possibilities parsed yet");
        return;
    }
    print_possibilities(&session.possibilities);
    if let Some(index) = session.selected {
        println!("Selected: {}", session.possibilities[index].title);
    }
}

fn show_details(session: &mut ChemySession, show_units: bool) -> Result<(), Box<dyn Error>> {
    prompt("Possibility number: ")?;
    let input = get_user_input()?;
    let number: usize = input
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a possibility number", input.trim()))?;
    if number == 0 {
        return Err("Possibility numbers start at 1".into());
    }
    let possibility = session.select(number - 1)?;
    pretty_print(possibility, show_units);
    Ok(())
}

fn confirm(session: &ChemySession) -> Result<(), Box<dyn Error>> {
    let material = session.confirm_selected(Utc::now())?;
    println!("{}", serde_json::to_string_pretty(&material)?);
    Ok(())
}

fn show_prompt(session: &mut ChemySession) -> Result<(), Box<dyn Error>> {
    prompt("Synthesis request: ")?;
    let input = get_user_input()?;
    session.record_user_input(input.trim(), Utc::now());
    println!("{}", serde_json::to_string_pretty(&build_messages(&input))?);
    Ok(())
}
