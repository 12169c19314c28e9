// ============================================================================
// Text
// Custom codepage decoding through static lookup tables
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Every byte is printable: control codes map to symbols, 0x20-0x7E matches
// ASCII, 0x7F-0x9F is a symbol and emoji block, the rest follows Latin-1.
const CELARIAN_ALL_PRINTABLE: [&str; 256] = [
    "∅", "∑", "∞", "∲", "≈", "≝", "⊕", "⋆", "⧗", "≟", "⏎", "⟰", "♠", "♣", "♡", "♢",
    "⇒", "⇔", "◇", "×", "÷", "✓", "✗", "‽", "⋈", "#", "♭", "♩", "♫", "♬", "♂", "♀",
    " ", "!", "\"", "#", "$", "%", "&", "'", "(", ")", "*", "+", ",", "-", ".", "/",
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ":", ";", "<", "=", ">", "?",
    "@", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O",
    "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z", "[", "\\", "]", "^", "_",
    "`", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o",
    "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z", "{", "|", "}", "~", "⌫",
    "🎈", "🎀", "🧶", "☎", "📘", "💵", "📊", "🧬", "💡", "👧", "🚦", "🌇", "🌃", "💠", "🔄", "💙",
    "⚠", "☢", "☣", "⛔", "↯", "⛆", "⚤", "♕", "♵", "⏺", "⚪", "🔴", "⭐", "🌙", "👑", "🌠",
    " ", "¡", "¢", "£", "¤", "¥", "¦", "§", "¨", "©", "ª", "«", "¬", "­", "®", "¯",
    "°", "±", "²", "³", "´", "µ", "¶", "·", "¸", "¹", "º", "»", "¼", "½", "¾", "¿",
    "À", "Á", "Â", "Ã", "Ä", "Å", "Æ", "Ç", "È", "É", "Ê", "Ë", "Ì", "Í", "Î", "Ï",
    "Ð", "Ñ", "Ò", "Ó", "Ô", "Õ", "Ö", "×", "Ø", "Ù", "Ú", "Û", "Ü", "Ý", "Þ", "ß",
    "à", "á", "â", "ã", "ä", "å", "æ", "ç", "è", "é", "ê", "ë", "ì", "í", "î", "ï",
    "ð", "ñ", "ò", "ó", "ô", "õ", "ö", "÷", "ø", "ù", "ú", "û", "ü", "ý", "þ", "ÿ",
];

/// Identifies one of the codepages this module ships. Selecting a codepage
/// that does not exist is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Codepage {
    CelarianAllPrintable,
}

impl Codepage {
    pub fn name(self) -> &'static str {
        match self {
            Codepage::CelarianAllPrintable => "CelarianAllPrintable",
        }
    }

    fn table(self) -> &'static [&'static str; 256] {
        match self {
            Codepage::CelarianAllPrintable => &CELARIAN_ALL_PRINTABLE,
        }
    }
}

/// Decodes byte sequences through a codepage lookup table, one table entry
/// per input byte.
#[derive(Debug, Clone)]
pub struct CodepageConverter {
    codepage: Codepage,
}

impl CodepageConverter {
    pub fn new(codepage: Codepage) -> Self {
        Self { codepage }
    }

    pub fn name(&self) -> &'static str {
        self.codepage.name()
    }

    pub fn convert(&self, bytes: impl IntoIterator<Item = u8>) -> String {
        let table = self.codepage.table();
        bytes.into_iter().map(|b| table[b as usize]).collect()
    }
}
