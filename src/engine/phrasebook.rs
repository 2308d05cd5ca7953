//! Static phrase tables used by the dictionary engine.

use super::LanguagePair;

/// Known phrases for one translation direction. Keys are lower-case.
#[derive(Debug)]
pub struct PhraseBook {
    pub source: &'static str,
    pub target: &'static str,
    pub phrases: &'static [(&'static str, &'static str)],
}

impl PhraseBook {
    /// Case-insensitive exact-phrase lookup; surrounding whitespace is ignored.
    pub fn lookup(&self, text: &str) -> Option<&'static str> {
        let key = text.trim().to_lowercase();
        self.phrases
            .iter()
            .find(|(phrase, _)| *phrase == key)
            .map(|(_, translation)| *translation)
    }
}

pub static PHRASEBOOKS: &[PhraseBook] = &[
    PhraseBook {
        source: "en",
        target: "es",
        phrases: &[
            ("hello", "hola"),
            ("world", "mundo"),
            ("good morning", "buenos días"),
            ("thank you", "gracias"),
            ("how are you", "¿cómo estás?"),
            ("goodbye", "adiós"),
        ],
    },
    PhraseBook {
        source: "es",
        target: "en",
        phrases: &[
            ("hola", "hello"),
            ("mundo", "world"),
            ("buenos días", "good morning"),
            ("gracias", "thank you"),
            ("¿cómo estás?", "how are you"),
            ("adiós", "goodbye"),
        ],
    },
    PhraseBook {
        source: "en",
        target: "fr",
        phrases: &[
            ("hello", "bonjour"),
            ("world", "monde"),
            ("good morning", "bonjour"),
            ("thank you", "merci"),
            ("how are you", "comment allez-vous"),
            ("goodbye", "au revoir"),
        ],
    },
    PhraseBook {
        source: "fr",
        target: "en",
        phrases: &[
            ("bonjour", "hello"),
            ("monde", "world"),
            ("merci", "thank you"),
            ("comment allez-vous", "how are you"),
            ("au revoir", "goodbye"),
        ],
    },
    PhraseBook {
        source: "en",
        target: "de",
        phrases: &[
            ("hello", "hallo"),
            ("world", "welt"),
            ("good morning", "guten morgen"),
            ("thank you", "danke"),
            ("how are you", "wie geht es dir"),
            ("goodbye", "auf wiedersehen"),
        ],
    },
    PhraseBook {
        source: "de",
        target: "en",
        phrases: &[
            ("hallo", "hello"),
            ("welt", "world"),
            ("guten morgen", "good morning"),
            ("danke", "thank you"),
            ("wie geht es dir", "how are you"),
            ("auf wiedersehen", "goodbye"),
        ],
    },
];

/// Phrase table for an ordered pair, if one exists.
pub fn phrasebook_for(pair: LanguagePair) -> Option<&'static PhraseBook> {
    PHRASEBOOKS
        .iter()
        .find(|book| book.source == pair.source.code() && book.target == pair.target.code())
}
