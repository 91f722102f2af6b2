use clap::{Arg, ArgMatches, Command};
use dune_translator::{
    Direction, Lexicon, PhraseBank, Translate, Translator, builtin_lexicon, builtin_phrase_bank,
    load_lexicon_from_file, load_phrases_from_file,
};
use std::io::{self, Read};
use std::path::Path;

fn build_command() -> Command {
    Command::new("dune-translate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate between English and the desert tongue of Arrakis")
        .arg(
            Arg::new("text")
                .help("Text to translate (read from stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("from-dune")
                .long("from-dune")
                .short('r')
                .help("Translate from Dune to English instead of English to Dune")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("lexicon")
                .long("lexicon")
                .short('l')
                .value_name("FILE")
                .help("JSON lexicon to use instead of the built-in one"),
        )
        .arg(
            Arg::new("phrases")
                .long("phrases")
                .value_name("FILE")
                .help("JSON phrase list to use instead of the built-in one"),
        )
        .arg(
            Arg::new("phrase")
                .long("phrase")
                .short('p')
                .help("Print a random example phrase in both languages")
                .action(clap::ArgAction::SetTrue)
                .conflicts_with("text"),
        )
        .arg(
            Arg::new("list-phrases")
                .long("list-phrases")
                .help("Print every example phrase in both languages")
                .action(clap::ArgAction::SetTrue)
                .conflicts_with_all(["text", "phrase"]),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show each token and whether it was found, with debug logging")
                .action(clap::ArgAction::SetTrue),
        )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = build_command().get_matches();
    let verbose = matches.get_flag("verbose");

    if verbose {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("dune_translator=debug"))
            .with_writer(io::stderr)
            .init();
    }

    if matches.get_flag("phrase") || matches.get_flag("list-phrases") {
        let bank = phrase_bank(&matches)?;
        if matches.get_flag("list-phrases") {
            for phrase in bank.all_phrases() {
                println!("{}\n  {}", phrase.english, phrase.dune);
            }
        } else {
            let phrase = bank.random_phrase();
            println!("{}\n  {}", phrase.english, phrase.dune);
        }
        return Ok(());
    }

    let translator = Translator::new(lexicon(&matches)?);
    let direction = Direction::from_dune(matches.get_flag("from-dune"));

    let text = match matches.get_one::<String>("text") {
        Some(text) => text.clone(),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if verbose {
        println!("🌍 {}", direction);
        for token in translator.translate_tokens(&text, direction) {
            if token.source.is_word() {
                let mark = if token.found { "✅" } else { "❔" };
                println!("   {} {:?} → {:?}", mark, token.source.text(), token.output);
            }
        }
        println!();
    }

    let translated = translator.translate(&text, direction);
    print!("{}", translated);
    if !translated.ends_with('\n') {
        println!();
    }

    Ok(())
}

fn lexicon(matches: &ArgMatches) -> Result<Lexicon, Box<dyn std::error::Error>> {
    let lexicon = match matches.get_one::<String>("lexicon") {
        Some(path) => load_lexicon_from_file(Path::new(path))?,
        None => builtin_lexicon()?,
    };
    Ok(lexicon)
}

fn phrase_bank(matches: &ArgMatches) -> Result<PhraseBank, Box<dyn std::error::Error>> {
    let bank = match matches.get_one::<String>("phrases") {
        Some(path) => load_phrases_from_file(Path::new(path))?,
        None => builtin_phrase_bank()?,
    };
    Ok(bank)
}
