//! Word lists mapping lowercase forms to a part of speech and a lemma.
//!
//! The tables cover closed word classes, irregular forms and frequent
//! journal vocabulary. Regular inflections of listed words are found by
//! stripping suffixes.

use std::collections::HashMap;

use layered_vocab::{Language, PartOfSpeech, PartOfSpeech::*};
use once_cell::sync::Lazy;

type Entry = (&'static str, PartOfSpeech, &'static str);

const ENGLISH_WORDS: &[Entry] = &[
    // pronouns
    ("i", Pron, "I"),
    ("me", Pron, "me"),
    ("my", Pron, "my"),
    ("mine", Pron, "mine"),
    ("myself", Pron, "myself"),
    ("you", Pron, "you"),
    ("your", Pron, "your"),
    ("yours", Pron, "yours"),
    ("yourself", Pron, "yourself"),
    ("he", Pron, "he"),
    ("him", Pron, "him"),
    ("his", Pron, "his"),
    ("himself", Pron, "himself"),
    ("she", Pron, "she"),
    ("her", Pron, "her"),
    ("hers", Pron, "hers"),
    ("herself", Pron, "herself"),
    ("it", Pron, "it"),
    ("its", Pron, "its"),
    ("itself", Pron, "itself"),
    ("we", Pron, "we"),
    ("us", Pron, "us"),
    ("our", Pron, "our"),
    ("ours", Pron, "ours"),
    ("ourselves", Pron, "ourselves"),
    ("they", Pron, "they"),
    ("them", Pron, "them"),
    ("their", Pron, "their"),
    ("theirs", Pron, "theirs"),
    ("themselves", Pron, "themselves"),
    ("who", Pron, "who"),
    ("whom", Pron, "whom"),
    ("whose", Pron, "whose"),
    ("what", Pron, "what"),
    ("which", Pron, "which"),
    ("something", Pron, "something"),
    ("anything", Pron, "anything"),
    ("nothing", Pron, "nothing"),
    ("everything", Pron, "everything"),
    ("someone", Pron, "someone"),
    ("everyone", Pron, "everyone"),
    ("nobody", Pron, "nobody"),
    // determiners
    ("a", Det, "a"),
    ("an", Det, "an"),
    ("the", Det, "the"),
    ("this", Det, "this"),
    ("that", Det, "that"),
    ("these", Det, "these"),
    ("those", Det, "those"),
    ("some", Det, "some"),
    ("any", Det, "any"),
    ("every", Det, "every"),
    ("each", Det, "each"),
    ("all", Det, "all"),
    ("both", Det, "both"),
    ("no", Det, "no"),
    ("another", Det, "another"),
    // adpositions
    ("at", Adp, "at"),
    ("in", Adp, "in"),
    ("on", Adp, "on"),
    ("with", Adp, "with"),
    ("without", Adp, "without"),
    ("after", Adp, "after"),
    ("before", Adp, "before"),
    ("to", Adp, "to"),
    ("from", Adp, "from"),
    ("of", Adp, "of"),
    ("for", Adp, "for"),
    ("by", Adp, "by"),
    ("about", Adp, "about"),
    ("into", Adp, "into"),
    ("over", Adp, "over"),
    ("under", Adp, "under"),
    ("between", Adp, "between"),
    ("through", Adp, "through"),
    ("during", Adp, "during"),
    ("near", Adp, "near"),
    ("around", Adp, "around"),
    // conjunctions
    ("and", Cconj, "and"),
    ("or", Cconj, "or"),
    ("but", Cconj, "but"),
    ("nor", Cconj, "nor"),
    ("so", Sconj, "so"),
    ("because", Sconj, "because"),
    ("if", Sconj, "if"),
    ("while", Sconj, "while"),
    ("although", Sconj, "although"),
    ("than", Sconj, "than"),
    ("until", Sconj, "until"),
    // auxiliaries
    ("am", Aux, "be"),
    ("is", Aux, "be"),
    ("are", Aux, "be"),
    ("was", Aux, "be"),
    ("were", Aux, "be"),
    ("be", Aux, "be"),
    ("been", Aux, "be"),
    ("being", Aux, "be"),
    ("'m", Aux, "be"),
    ("'re", Aux, "be"),
    ("do", Aux, "do"),
    ("does", Aux, "do"),
    ("did", Aux, "do"),
    ("have", Aux, "have"),
    ("has", Aux, "have"),
    ("had", Aux, "have"),
    ("'ve", Aux, "have"),
    ("will", Aux, "will"),
    ("'ll", Aux, "will"),
    ("wo", Aux, "will"),
    ("would", Aux, "would"),
    ("'d", Aux, "would"),
    ("can", Aux, "can"),
    ("ca", Aux, "can"),
    ("could", Aux, "could"),
    ("shall", Aux, "shall"),
    ("sha", Aux, "shall"),
    ("should", Aux, "should"),
    ("may", Aux, "may"),
    ("might", Aux, "might"),
    ("must", Aux, "must"),
    // particles
    ("not", Part, "not"),
    ("n't", Part, "not"),
    // interjections
    ("yes", Intj, "yes"),
    ("oh", Intj, "oh"),
    ("hello", Intj, "hello"),
    ("wow", Intj, "wow"),
    ("okay", Intj, "okay"),
    // numerals
    ("one", Num, "one"),
    ("two", Num, "two"),
    ("three", Num, "three"),
    ("four", Num, "four"),
    ("five", Num, "five"),
    ("ten", Num, "ten"),
    ("hundred", Num, "hundred"),
    // adverbs
    ("here", Adv, "here"),
    ("there", Adv, "there"),
    ("where", Adv, "where"),
    ("when", Adv, "when"),
    ("why", Adv, "why"),
    ("how", Adv, "how"),
    ("very", Adv, "very"),
    ("too", Adv, "too"),
    ("also", Adv, "also"),
    ("now", Adv, "now"),
    ("then", Adv, "then"),
    ("today", Adv, "today"),
    ("yesterday", Adv, "yesterday"),
    ("tomorrow", Adv, "tomorrow"),
    ("always", Adv, "always"),
    ("never", Adv, "never"),
    ("often", Adv, "often"),
    ("just", Adv, "just"),
    ("really", Adv, "really"),
    ("again", Adv, "again"),
    ("still", Adv, "still"),
    ("home", Adv, "home"),
    // verbs and their irregular forms
    ("call", Verb, "call"),
    ("let", Verb, "let"),
    ("eat", Verb, "eat"),
    ("ate", Verb, "eat"),
    ("eaten", Verb, "eat"),
    ("tell", Verb, "tell"),
    ("told", Verb, "tell"),
    ("mess", Verb, "mess"),
    ("kick", Verb, "kick"),
    ("go", Verb, "go"),
    ("went", Verb, "go"),
    ("gone", Verb, "go"),
    ("make", Verb, "make"),
    ("made", Verb, "make"),
    ("get", Verb, "get"),
    ("got", Verb, "get"),
    ("see", Verb, "see"),
    ("saw", Verb, "see"),
    ("seen", Verb, "see"),
    ("know", Verb, "know"),
    ("knew", Verb, "know"),
    ("known", Verb, "know"),
    ("think", Verb, "think"),
    ("thought", Verb, "think"),
    ("take", Verb, "take"),
    ("took", Verb, "take"),
    ("taken", Verb, "take"),
    ("come", Verb, "come"),
    ("came", Verb, "come"),
    ("say", Verb, "say"),
    ("said", Verb, "say"),
    ("give", Verb, "give"),
    ("gave", Verb, "give"),
    ("given", Verb, "give"),
    ("find", Verb, "find"),
    ("found", Verb, "find"),
    ("write", Verb, "write"),
    ("wrote", Verb, "write"),
    ("written", Verb, "write"),
    ("read", Verb, "read"),
    ("run", Verb, "run"),
    ("ran", Verb, "run"),
    ("meet", Verb, "meet"),
    ("met", Verb, "meet"),
    ("buy", Verb, "buy"),
    ("bought", Verb, "buy"),
    ("bring", Verb, "bring"),
    ("brought", Verb, "bring"),
    ("feel", Verb, "feel"),
    ("felt", Verb, "feel"),
    ("leave", Verb, "leave"),
    ("left", Verb, "leave"),
    ("keep", Verb, "keep"),
    ("kept", Verb, "keep"),
    ("sleep", Verb, "sleep"),
    ("slept", Verb, "sleep"),
    ("speak", Verb, "speak"),
    ("spoke", Verb, "speak"),
    ("begin", Verb, "begin"),
    ("began", Verb, "begin"),
    ("drink", Verb, "drink"),
    ("drank", Verb, "drink"),
    ("drive", Verb, "drive"),
    ("drove", Verb, "drive"),
    ("swim", Verb, "swim"),
    ("swam", Verb, "swim"),
    ("sit", Verb, "sit"),
    ("sat", Verb, "sit"),
    ("stop", Verb, "stop"),
    ("walk", Verb, "walk"),
    ("love", Verb, "love"),
    ("like", Verb, "like"),
    ("want", Verb, "want"),
    ("need", Verb, "need"),
    ("work", Verb, "work"),
    ("play", Verb, "play"),
    ("live", Verb, "live"),
    ("talk", Verb, "talk"),
    ("look", Verb, "look"),
    ("try", Verb, "try"),
    ("help", Verb, "help"),
    ("start", Verb, "start"),
    ("open", Verb, "open"),
    ("cook", Verb, "cook"),
    ("visit", Verb, "visit"),
    ("wait", Verb, "wait"),
    ("watch", Verb, "watch"),
    ("study", Verb, "study"),
    // nouns
    ("number", Noun, "number"),
    ("phone", Noun, "phone"),
    ("noun", Noun, "noun"),
    ("sir", Noun, "sir"),
    ("story", Noun, "story"),
    ("day", Noun, "day"),
    ("time", Noun, "time"),
    ("friend", Noun, "friend"),
    ("house", Noun, "house"),
    ("dog", Noun, "dog"),
    ("cat", Noun, "cat"),
    ("book", Noun, "book"),
    ("society", Noun, "society"),
    ("victory", Noun, "victory"),
    ("butt", Noun, "butt"),
    ("boy", Noun, "boy"),
    ("girl", Noun, "girl"),
    ("giant", Noun, "giant"),
    ("word", Noun, "word"),
    ("journal", Noun, "journal"),
    ("entry", Noun, "entry"),
    ("morning", Noun, "morning"),
    ("night", Noun, "night"),
    ("week", Noun, "week"),
    ("year", Noun, "year"),
    ("city", Noun, "city"),
    ("school", Noun, "school"),
    ("family", Noun, "family"),
    ("food", Noun, "food"),
    ("water", Noun, "water"),
    ("coffee", Noun, "coffee"),
    ("taco", Noun, "taco"),
    ("dinner", Noun, "dinner"),
    ("party", Noun, "party"),
    ("park", Noun, "park"),
    ("car", Noun, "car"),
    ("man", Noun, "man"),
    ("men", Noun, "man"),
    ("woman", Noun, "woman"),
    ("women", Noun, "woman"),
    ("child", Noun, "child"),
    ("children", Noun, "child"),
    ("person", Noun, "person"),
    ("people", Noun, "person"),
    ("knife", Noun, "knife"),
    // adjectives
    ("proper", Adj, "proper"),
    ("high", Adj, "high"),
    ("big", Adj, "big"),
    ("last", Adj, "last"),
    ("good", Adj, "good"),
    ("better", Adj, "good"),
    ("best", Adj, "good"),
    ("bad", Adj, "bad"),
    ("new", Adj, "new"),
    ("old", Adj, "old"),
    ("little", Adj, "little"),
    ("small", Adj, "small"),
    ("great", Adj, "great"),
    ("long", Adj, "long"),
    ("happy", Adj, "happy"),
    ("sad", Adj, "sad"),
    ("interesting", Adj, "interesting"),
    ("first", Adj, "first"),
    ("red", Adj, "red"),
];

/// `(suffix, replacement)` pairs tried in order on words not in the table.
const ENGLISH_SUFFIXES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("ied", "y"),
    ("ves", "fe"),
    ("ves", "f"),
    ("es", ""),
    ("s", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const SPANISH_WORDS: &[Entry] = &[
    // pronombres
    ("yo", Pron, "yo"),
    ("me", Pron, "me"),
    ("mí", Pron, "mí"),
    ("conmigo", Pron, "conmigo"),
    ("tú", Pron, "tú"),
    ("te", Pron, "te"),
    ("ti", Pron, "ti"),
    ("él", Pron, "él"),
    ("ella", Pron, "ella"),
    ("lo", Pron, "lo"),
    ("le", Pron, "le"),
    ("se", Pron, "se"),
    ("nosotros", Pron, "nosotros"),
    ("nosotras", Pron, "nosotros"),
    ("nos", Pron, "nos"),
    ("vosotros", Pron, "vosotros"),
    ("os", Pron, "os"),
    ("ellos", Pron, "ellos"),
    ("ellas", Pron, "ellos"),
    ("les", Pron, "les"),
    ("usted", Pron, "usted"),
    ("ustedes", Pron, "ustedes"),
    ("mi", Det, "mi"),
    ("mis", Det, "mi"),
    ("tu", Det, "tu"),
    ("tus", Det, "tu"),
    ("su", Det, "su"),
    ("sus", Det, "su"),
    ("nuestro", Det, "nuestro"),
    ("nuestra", Det, "nuestro"),
    // determinantes
    ("el", Det, "el"),
    ("la", Det, "el"),
    ("los", Det, "el"),
    ("las", Det, "el"),
    ("un", Det, "uno"),
    ("una", Det, "uno"),
    ("unos", Det, "uno"),
    ("unas", Det, "uno"),
    ("este", Det, "este"),
    ("esta", Det, "este"),
    ("ese", Det, "ese"),
    ("esa", Det, "ese"),
    // preposiciones
    ("a", Adp, "a"),
    ("al", Adp, "al"),
    ("de", Adp, "de"),
    ("del", Adp, "del"),
    ("en", Adp, "en"),
    ("con", Adp, "con"),
    ("por", Adp, "por"),
    ("para", Adp, "para"),
    ("sin", Adp, "sin"),
    ("sobre", Adp, "sobre"),
    ("entre", Adp, "entre"),
    ("hasta", Adp, "hasta"),
    ("desde", Adp, "desde"),
    // conjunciones
    ("y", Cconj, "y"),
    ("e", Cconj, "y"),
    ("o", Cconj, "o"),
    ("pero", Cconj, "pero"),
    ("porque", Sconj, "porque"),
    ("que", Sconj, "que"),
    ("si", Sconj, "si"),
    ("cuando", Sconj, "cuando"),
    // verbos
    ("soy", Aux, "ser"),
    ("eres", Aux, "ser"),
    ("es", Aux, "ser"),
    ("somos", Aux, "ser"),
    ("son", Aux, "ser"),
    ("era", Aux, "ser"),
    ("fue", Aux, "ser"),
    ("ser", Aux, "ser"),
    ("estoy", Aux, "estar"),
    ("estás", Aux, "estar"),
    ("está", Aux, "estar"),
    ("estamos", Aux, "estar"),
    ("están", Aux, "estar"),
    ("estar", Aux, "estar"),
    ("he", Aux, "haber"),
    ("has", Aux, "haber"),
    ("ha", Aux, "haber"),
    ("hemos", Aux, "haber"),
    ("han", Aux, "haber"),
    ("hay", Verb, "haber"),
    ("tengo", Verb, "tener"),
    ("tiene", Verb, "tener"),
    ("tener", Verb, "tener"),
    ("voy", Verb, "ir"),
    ("va", Verb, "ir"),
    ("vamos", Verb, "ir"),
    ("fui", Verb, "ir"),
    ("ir", Verb, "ir"),
    ("hago", Verb, "hacer"),
    ("hace", Verb, "hacer"),
    ("hizo", Verb, "hacer"),
    ("llamo", Verb, "llamar"),
    ("llama", Verb, "llamar"),
    ("llamé", Verb, "llamar"),
    ("llamar", Verb, "llamar"),
    ("como", Verb, "comer"),
    ("come", Verb, "comer"),
    ("comí", Verb, "comer"),
    ("comer", Verb, "comer"),
    ("digo", Verb, "decir"),
    ("dice", Verb, "decir"),
    ("dijo", Verb, "decir"),
    ("quiero", Verb, "querer"),
    ("quiere", Verb, "querer"),
    ("puedo", Verb, "poder"),
    ("puede", Verb, "poder"),
    ("hablo", Verb, "hablar"),
    ("habla", Verb, "hablar"),
    ("vivo", Verb, "vivir"),
    ("vive", Verb, "vivir"),
    // sustantivos
    ("número", Noun, "número"),
    ("teléfono", Noun, "teléfono"),
    ("nombre", Noun, "nombre"),
    ("casa", Noun, "casa"),
    ("día", Noun, "día"),
    ("amigo", Noun, "amigo"),
    ("amiga", Noun, "amigo"),
    ("historia", Noun, "historia"),
    ("perro", Noun, "perro"),
    ("libro", Noun, "libro"),
    ("ciudad", Noun, "ciudad"),
    ("trabajo", Noun, "trabajo"),
    // adjetivos
    ("bueno", Adj, "bueno"),
    ("buena", Adj, "bueno"),
    ("grande", Adj, "grande"),
    ("nuevo", Adj, "nuevo"),
    ("nueva", Adj, "nuevo"),
    ("propio", Adj, "propio"),
    // adverbios
    ("dónde", Adv, "dónde"),
    ("donde", Adv, "donde"),
    ("no", Adv, "no"),
    ("muy", Adv, "muy"),
    ("aquí", Adv, "aquí"),
    ("allí", Adv, "allí"),
    ("hoy", Adv, "hoy"),
    ("ayer", Adv, "ayer"),
    ("mañana", Adv, "mañana"),
    ("siempre", Adv, "siempre"),
    ("también", Adv, "también"),
];

const SPANISH_SUFFIXES: &[(&str, &str)] = &[("es", ""), ("s", "")];

static ENGLISH: Lazy<Lexicon> = Lazy::new(|| Lexicon::build(ENGLISH_WORDS, ENGLISH_SUFFIXES));
static SPANISH: Lazy<Lexicon> = Lazy::new(|| Lexicon::build(SPANISH_WORDS, SPANISH_SUFFIXES));

/// Word classes whose members keep their tag when capitalized mid-sentence.
pub(crate) fn is_closed_class(pos: PartOfSpeech) -> bool {
    matches!(pos, Pron | Det | Adp | Aux | Cconj | Sconj | Part | Num | Intj)
}

#[derive(Debug)]
pub(crate) struct Lexicon {
    entries: HashMap<&'static str, (PartOfSpeech, &'static str)>,
    suffixes: &'static [(&'static str, &'static str)],
}

impl Lexicon {
    fn build(words: &'static [Entry], suffixes: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            entries: words
                .iter()
                .map(|&(word, pos, lemma)| (word, (pos, lemma)))
                .collect(),
            suffixes,
        }
    }

    pub(crate) fn for_language(language: Language) -> &'static Lexicon {
        match language {
            Language::English => &ENGLISH,
            Language::Spanish => &SPANISH,
        }
    }

    /// Exact lookup of a lowercase word.
    pub(crate) fn get(&self, lower: &str) -> Option<(PartOfSpeech, &'static str)> {
        self.entries.get(lower).copied()
    }

    /// Lookup that falls back to stripping regular inflections. Only open
    /// class words are inflected this way.
    pub(crate) fn lookup(&self, lower: &str) -> Option<(PartOfSpeech, String)> {
        if let Some((pos, lemma)) = self.get(lower) {
            return Some((pos, lemma.to_string()));
        }

        for &(suffix, replacement) in self.suffixes {
            let Some(stem) = lower.strip_suffix(suffix) else {
                continue;
            };
            if stem.is_empty() {
                continue;
            }
            let candidate = format!("{}{}", stem, replacement);
            if let Some(found) = self.open_class(&candidate) {
                return Some(found);
            }
            // stopped → stopp → stop
            if replacement.is_empty() {
                if let Some(undoubled) = undouble(stem) {
                    if let Some(found) = self.open_class(undoubled) {
                        return Some(found);
                    }
                }
            }
        }
        None
    }

    fn open_class(&self, candidate: &str) -> Option<(PartOfSpeech, String)> {
        self.get(candidate)
            .filter(|(pos, _)| !is_closed_class(*pos))
            .map(|(pos, lemma)| (pos, lemma.to_string()))
    }
}

fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    (last == before && last.is_alphabetic()).then(|| &stem[..stem.len() - last.len_utf8()])
}
