//! Russian/Romanian translation dictionary.
//!
//! Titles in the corpus are written in either language, so a query in one
//! language is retried with the terms of the other. Entries cover the common
//! case forms of each word and a few multi-word place names. Reverse
//! directions are listed explicitly; nothing is inverted automatically.

use std::{collections::HashMap, sync::LazyLock};

/// Raw dictionary entries: normalized term to equivalent terms.
static ENTRIES: &[(&str, &[&str])] = &[
    // Competitions
    ("соревнование", &["competitie", "competitii", "etapa", "etape"]),
    ("соревнования", &["competitie", "competitii", "etapa", "etape"]),
    ("соревнований", &["competitie", "competitii", "etapa", "etape"]),
    ("соревновании", &["competitie", "competitii", "etapa", "etape"]),
    ("соревнованию", &["competitie", "competitii", "etapa", "etape"]),
    ("competitie", &["соревнование", "соревнования", "соревнований", "соревновании"]),
    ("competitii", &["соревнование", "соревнования", "соревнований", "соревновании"]),
    ("чемпионат", &["campionat", "campionate", "cm"]),
    ("чемпионаты", &["campionat", "campionate", "cm"]),
    ("чемпионата", &["campionat", "campionate", "cm"]),
    ("чемпионате", &["campionat", "campionate", "cm"]),
    ("чемпионатом", &["campionat", "campionate", "cm"]),
    ("чемпионат мира", &["campionat mondial", "cm", "campionatul mondial"]),
    ("чемпионата мира", &["campionat mondial", "cm", "campionatul mondial"]),
    ("чемпионате мира", &["campionat mondial", "cm", "campionatul mondial"]),
    ("campionat", &["чемпионат", "чемпионаты", "чемпионата", "чемпионате"]),
    ("campionate", &["чемпионат", "чемпионаты", "чемпионата", "чемпионате"]),
    ("cm", &["чемпионат", "чемпионат мира", "чемпионата мира"]),
    ("этап", &["etapa", "etape"]),
    ("этапы", &["etapa", "etape"]),
    ("этапа", &["etapa", "etape"]),
    ("этапе", &["etapa", "etape"]),
    ("этапом", &["etapa", "etape"]),
    ("etapa", &["этап", "этапы", "этапа", "этапе", "этапом"]),
    ("etape", &["этап", "этапы", "этапа", "этапе", "этапом"]),
    // "integistrare" is a misspelling that occurs in stored titles.
    ("регистрация", &["inregistrare", "inscriere", "integistrare"]),
    ("регистрации", &["inregistrare", "inscriere", "integistrare"]),
    ("регистрацию", &["inregistrare", "inscriere", "integistrare"]),
    ("регистрацией", &["inregistrare", "inscriere", "integistrare"]),
    ("inregistrare", &["регистрация", "регистрации", "регистрацию"]),
    ("inscriere", &["регистрация", "регистрации", "регистрацию"]),
    ("integistrare", &["регистрация", "регистрации", "регистрацию"]),
    ("издание", &["editie", "editia", "editiile"]),
    ("издания", &["editie", "editia", "editiile"]),
    ("изданию", &["editie", "editia", "editiile"]),
    ("издании", &["editie", "editia", "editiile"]),
    ("editia", &["издание", "издания", "изданию", "издании"]),
    ("editie", &["издание", "издания", "изданию", "издании"]),
    ("editiile", &["издание", "издания", "изданию", "издании"]),
    // Reports
    ("отчет", &["raport", "raporturi"]),
    ("отчеты", &["raport", "raporturi"]),
    ("отчета", &["raport", "raporturi"]),
    ("отчете", &["raport", "raporturi"]),
    ("отчет о", &["raport", "despre"]),
    ("отчет по", &["raport", "despre"]),
    ("материал", &["material", "articol"]),
    ("материалы", &["material", "articol", "materiale"]),
    ("материала", &["material", "articol", "materiale"]),
    ("материале", &["material", "articol", "materiale"]),
    ("сюжет", &["articol", "material", "raport"]),
    ("сюжеты", &["articol", "material", "raport", "articole"]),
    ("сюжета", &["articol", "material", "raport", "articole"]),
    ("сюжете", &["articol", "material", "raport", "articole"]),
    // Places
    ("данчены", &["danceni", "dancheni"]),
    ("днестр", &["dnestr", "nistru"]),
    ("днестра", &["dnestr", "nistru"]),
    ("днестре", &["dnestr", "nistru"]),
    ("днестром", &["dnestr", "nistru"]),
    ("nistru", &["днестр", "днестра", "днестре"]),
    ("dnestr", &["днестр", "днестра", "днестре"]),
    ("пырыта", &["pîrîta", "pyrata"]),
    ("пырыты", &["pîrîta", "pyrata"]),
    ("пырыте", &["pîrîta", "pyrata"]),
    ("pîrîta", &["пырыта", "пырыты", "пырыте"]),
    ("ципала", &["ţipala", "tipala"]),
    ("ципалы", &["ţipala", "tipala"]),
    ("ципале", &["ţipala", "tipala"]),
    ("ţipala", &["ципала", "ципалы", "ципале"]),
    ("tipala", &["ципала", "ципалы", "ципале"]),
    ("хыржаука", &["hîrjauca", "hirjauca"]),
    ("хыржауки", &["hîrjauca", "hirjauca"]),
    ("хыржауке", &["hîrjauca", "hirjauca"]),
    ("hîrjauca", &["хыржаука", "хыржауки", "хыржауке"]),
    ("hirjauca", &["хыржаука", "хыржауки", "хыржауке"]),
    ("дамба", &["baraj", "barajul"]),
    ("дамбу", &["baraj", "barajul"]),
    ("дамбы", &["baraj", "barajul"]),
    ("дамбе", &["baraj", "barajul"]),
    ("дамбой", &["baraj", "barajul"]),
    ("barajul", &["дамба", "дамбу", "дамбы", "дамбе", "дамбой"]),
    ("barajului", &["дамба", "дамбу", "дамбы", "дамбе", "дамбой"]),
    ("дамба озера данчены", &["barajul lacului danceni", "baraj lacului danceni"]),
    ("дамбы озера данчены", &["barajul lacului danceni", "baraj lacului danceni"]),
    ("дамбе озера данчены", &["barajul lacului danceni", "baraj lacului danceni"]),
    (
        "barajul lacului danceni",
        &["дамба озера данчены", "дамбы озера данчены", "дамбе озера данчены"],
    ),
    ("озеро", &["lac", "lacul"]),
    ("озеру", &["lac", "lacul"]),
    ("озера", &["lac", "lacul"]),
    ("озере", &["lac", "lacul"]),
    ("озером", &["lac", "lacul"]),
    ("lacul", &["озеро", "озеру", "озера", "озере", "озером"]),
    ("lacului", &["озеро", "озеру", "озера", "озере", "озером"]),
    ("озеро данчены", &["lacul danceni", "lac danceni"]),
    ("озера данчены", &["lacul danceni", "lac danceni"]),
    ("озере данчены", &["lacul danceni", "lac danceni"]),
    ("lacul danceni", &["озеро данчены", "озера данчены", "озере данчены"]),
    ("lacului danceni", &["озеро данчены", "озера данчены", "озере данчены"]),
    // Fishing and tackle
    ("рыбалка", &["pescuit", "pescuitul"]),
    ("рыбалки", &["pescuit", "pescuitul"]),
    ("рыбалке", &["pescuit", "pescuitul"]),
    ("pescuit", &["рыбалка", "рыбалки", "рыбалке"]),
    ("рыба", &["peşte", "peste"]),
    ("рыбы", &["peşte", "peste"]),
    ("рыбу", &["peşte", "peste"]),
    ("рыбе", &["peşte", "peste"]),
    ("peşte", &["рыба", "рыбы", "рыбу", "рыбе"]),
    ("поклевка", &["trasatura", "trasaturi"]),
    ("поклевки", &["trasatura", "trasaturi"]),
    ("поклевок", &["trasatura", "trasaturi"]),
    ("trasaturi", &["поклевка", "поклевки", "поклевок"]),
    ("метод", &["method", "metoda"]),
    ("метода", &["method", "metoda"]),
    ("методе", &["method", "metoda"]),
    ("method", &["метод", "метода", "методе"]),
    ("фидер", &["feeder"]),
    ("фидера", &["feeder"]),
    ("фидере", &["feeder"]),
    ("feeder", &["фидер", "фидера", "фидере"]),
    ("копка", &["copca", "copcă"]),
    ("копки", &["copca", "copcă"]),
    ("копке", &["copca", "copcă"]),
    ("copcă", &["копка", "копки", "копке"]),
    ("сезон", &["sezon", "sezonul"]),
    ("сезона", &["sezon", "sezonul"]),
    ("сезоне", &["sezon", "sezonul"]),
    ("sezon", &["сезон", "сезона", "сезоне"]),
    ("зима", &["iarnă", "iarna"]),
    ("зимы", &["iarnă", "iarna"]),
    ("зиме", &["iarnă", "iarna"]),
    ("зимой", &["iarnă", "iarna"]),
    ("iarnă", &["зима", "зимы", "зиме", "зимой"]),
    ("iarna", &["зима", "зимы", "зиме", "зимой"]),
    // Brands and baits
    ("dovit", &["dovit"]),
    ("wafter", &["wafter"]),
    ("пелетс", &["peleti", "peleţi"]),
    ("пелетсы", &["peleti", "peleţi"]),
    ("peleţi", &["пелетс", "пелетсы"]),
    // Months
    ("ноябрь", &["noiembrie", "novembrie"]),
    ("ноября", &["noiembrie", "novembrie"]),
    ("декабрь", &["decembrie"]),
    ("декабря", &["decembrie"]),
    ("январь", &["ianuarie"]),
    ("января", &["ianuarie"]),
    // Function words
    ("на", &["la", "pe"]),
    ("в", &["la", "pe", "in"]),
    ("о", &["despre"]),
    ("по", &["despre", "pe"]),
    ("и", &["si"]),
    ("с", &["cu"]),
];

/// The built-in dictionary.
static BUILTIN: LazyLock<Dictionary> = LazyLock::new(|| Dictionary::from_entries(ENTRIES));

/// A read-only translation dictionary keyed by normalized term.
#[derive(Debug)]
pub struct Dictionary {
    /// Term to its translations, in listed order.
    entries: HashMap<&'static str, &'static [&'static str]>,
    /// Word count of the longest key.
    max_phrase_words: usize,
}

impl Dictionary {
    /// Returns the built-in Russian/Romanian dictionary.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Builds a dictionary from static entries.
    fn from_entries(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        let max_phrase_words = entries
            .iter()
            .map(|(key, _)| key.split_whitespace().count())
            .max()
            .unwrap_or(1);
        Self {
            entries: entries.iter().copied().collect(),
            max_phrase_words,
        }
    }

    /// Returns the translations of a normalized term.
    pub fn lookup(&self, term: &str) -> Option<&'static [&'static str]> {
        self.entries.get(term).copied()
    }

    /// Returns true if the term is a multi-word dictionary key.
    pub fn is_phrase(&self, term: &str) -> bool {
        term.contains(' ') && self.entries.contains_key(term)
    }

    /// Returns the number of words in the longest key.
    pub fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
