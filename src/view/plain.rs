//! Plain-text output for `--print`.

use crate::model::WordEntry;
use std::io::{self, Write};

/// Write every meaning and definition of `entry` as indented text.
pub fn write_entry<W: Write>(out: &mut W, entry: &WordEntry) -> io::Result<()> {
    if entry.phonetic.is_empty() {
        writeln!(out, "{}", entry.word)?;
    } else {
        writeln!(out, "{}  {}", entry.word, entry.phonetic)?;
    }
    writeln!(out, "{}", entry.produced_for)?;

    for meaning in &entry.meanings {
        writeln!(out)?;
        writeln!(out, "{}", meaning.part_of_speech)?;
        for (index, definition) in meaning.definitions.iter().enumerate() {
            writeln!(out, "  {}. {}", index + 1, definition.text)?;
            if let Some(example) = &definition.example {
                writeln!(out, "     \"{example}\"")?;
            }
            if !definition.synonyms.is_empty() {
                writeln!(out, "     synonyms: {}", definition.synonyms.join(", "))?;
            }
            if !definition.antonyms.is_empty() {
                writeln!(out, "     antonyms: {}", definition.antonyms.join(", "))?;
            }
        }
    }

    Ok(())
}
