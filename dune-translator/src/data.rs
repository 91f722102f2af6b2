//! Embedded vocabulary and phrase list
//!
//! `LEXICON` is the single authoritative word list; both lookup directions
//! are derived from it. Each side is written in its canonical surface form.
//! Every phrase in `PHRASES` is a word-for-word rendering through `LEXICON`,
//! so translating either side yields the other exactly.
//!
//! Dune forms avoid ordinary English words, so an unknown English word left
//! untouched on the way out is not mistaken for a Dune word on the way back.
//! The established names `melange` and `coriolis` are the exception: English
//! text that uses them as English words comes back as `spice` and `storm`.

/// (English, Dune) word pairs
pub const LEXICON: &[(&str, &str)] = &[
    // Function words
    ("the", "el"),
    ("a", "wahid"),
    ("is", "ka"),
    ("are", "kan"),
    ("be", "kun"),
    ("i", "ana"),
    ("you", "anta"),
    ("we", "nahnu"),
    ("he", "hu"),
    ("she", "hiya"),
    ("it", "dhalika"),
    ("my", "ani"),
    ("your", "laka"),
    ("his", "lahu"),
    ("who", "alladhi"),
    ("and", "wa"),
    ("of", "mina"),
    ("in", "fi"),
    ("to", "ila"),
    ("with", "bima"),
    ("without", "bidun"),
    ("not", "laysa"),
    ("must", "wajib"),
    ("will", "sawf"),
    // Greetings
    ("hello", "marhaba"),
    ("goodbye", "wadaa"),
    ("peace", "salaam"),
    ("friend", "sadiq"),
    // People and titles
    ("Paul", "Muad'Dib"),
    ("messiah", "Mahdi"),
    ("prophet", "Lisan-al-Gaib"),
    ("people", "Fremen"),
    ("leader", "naib"),
    ("warrior", "fedaykin"),
    ("fighters", "chouhada"),
    ("priestess", "sayyadina"),
    ("sleeper", "naim"),
    ("maker", "sani"),
    ("devil", "Shaitan"),
    ("father", "abu"),
    ("mother", "umma"),
    ("son", "ibn"),
    // The desert
    ("spice", "melange"),
    ("water", "ma'a"),
    ("sand", "raml"),
    ("dune", "qawz"),
    ("desert", "tanzerouft"),
    ("home", "sietch"),
    ("worm", "Shai-Hulud"),
    ("storm", "coriolis"),
    ("knife", "kindjal"),
    ("sun", "shams"),
    ("moon", "qamar"),
    ("wind", "hawa"),
    ("night", "layl"),
    ("day", "yawm"),
    ("stars", "nujum"),
    ("universe", "kawn"),
    // Body, mind and spirit
    ("eyes", "uyun"),
    ("blue", "azraq"),
    ("fear", "khawf"),
    ("mind", "aql"),
    ("killer", "qatil"),
    ("mind-killer", "aql-qatil"),
    ("death", "mawt"),
    ("life", "hayat"),
    ("dream", "hulm"),
    ("power", "quwwa"),
    ("blessed", "mubarak"),
    ("great", "akbar"),
    ("little", "saghir"),
    ("long", "tawil"),
    ("rhythm", "iqa"),
    // Verbs
    ("flow", "tadfuq"),
    ("awaken", "yastayqiz"),
    ("controls", "yamluk"),
    ("walk", "ashi"),
    ("live", "hya"),
    ("bless", "barak"),
    ("come", "yati"),
];

/// (English, Dune) example sentences offered as suggestions
pub const PHRASES: &[(&str, &str)] = &[
    ("The spice must flow.", "El melange wajib tadfuq."),
    ("Fear is the mind-killer.", "Khawf ka el aql-qatil."),
    ("The sleeper must awaken.", "El naim wajib yastayqiz."),
    ("Long live the fighters!", "Tawil hya el chouhada!"),
    (
        "He who controls the spice controls the universe.",
        "Hu alladhi yamluk el melange yamluk el kawn.",
    ),
    ("Walk without rhythm.", "Ashi bidun iqa."),
    ("Peace be with you, friend.", "Salaam kun bima anta, sadiq."),
    ("The desert is my home.", "El tanzerouft ka ani sietch."),
    ("Water is life.", "Ma'a ka hayat."),
    ("Bless the maker and his water.", "Barak el sani wa lahu ma'a."),
    ("Paul is the prophet.", "Muad'Dib ka el lisan-al-gaib."),
    (
        "The worm is the spice and the spice is the worm.",
        "El shai-hulud ka el melange wa el melange ka el shai-hulud.",
    ),
    ("Your eyes are blue.", "Laka uyun kan azraq."),
    (
        "We are the people of the desert.",
        "Nahnu kan el fremen mina el tanzerouft.",
    ),
    ("Hello, friend.", "Marhaba, sadiq."),
    ("The storm will come.", "El coriolis sawf yati."),
];
