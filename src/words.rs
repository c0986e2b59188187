//! The fixed 256-entry word table and its reverse lookup grid.
//!
//! The table is the wire contract of the format: byte value `v` maps to
//! entry `v`, and every conforming implementation must reproduce the same
//! words in the same order. Across all 256 entries the pair of first and
//! last letters is unique, which is what allows reverse lookup through a
//! small 26x26 grid instead of a general hash map.

use crate::error::BytewordsError;

/// All 256 four-letter words packed into one string; entry `i` occupies
/// bytes `[i * 4, i * 4 + 4)`.
const WORDS: &str = "ableacidalsoapexaquaarchatomauntawayaxisbackbaldbarnbeltbetabiasbluebodybragbrewbulbbuzzcalmcashcatschefcityclawcodecolacookcost\
     cruxcurlcuspcyandarkdatadaysdelidicedietdoordowndrawdropdrumdulldutyeacheasyechoedgeepicevenexamexiteyesfactfairfernfigsfilmfish\
     fizzflapflewfluxfoxyfreefrogfuelfundgalagamegeargemsgiftgirlglowgoodgraygrimgurugushgyrohalfhanghardhawkheathelphighhillholyhope\
     hornhutsicedideaidleinchinkyintoirisironitemjadejazzjoinjoltjowljudojugsjumpjunkjurykeepkenokeptkeyskickkilnkingkitekiwiknoblamb\
     lavalazyleaflegsliarlistlimplionlogoloudloveluaulucklungmainmanymathmazememomenumeowmildmintmissmonknailnavyneednewsnextnoonnote\
     numbobeyoboeomitonyxopenovalowlspaidpartpeckplaypluspoempoolposepuffpumapurrquadquizraceramprealredorichroadrockroofrubyruinruns\
     rustsafesagascarsetssilkskewslotsoapsolosongstubsurfswantacotasktaxitenttiedtimetinytoiltombtoystriptunatwinuglyundouniturgeuser\
     vastveryvetovialvibeviewvisavoidvowswallwandwarmwaspwavewaxywebswhatwhenwhizwolfworkyankyawnyellyogayurtzapszestzinczonezoomzero";

const ALPHABET_LEN: usize = 26;

/// Sentinel for grid cells whose letter pair matches no word.
const NO_WORD: i16 = -1;

/// Reverse lookup grid, indexed as `GRID[last][first]` by letter offsets.
///
/// Built at compile time from [`WORDS`], so it is immutable for the whole
/// process lifetime and safe for unlimited concurrent readers.
static GRID: [[i16; ALPHABET_LEN]; ALPHABET_LEN] = build_grid();

const fn build_grid() -> [[i16; ALPHABET_LEN]; ALPHABET_LEN] {
    let mut grid = [[NO_WORD; ALPHABET_LEN]; ALPHABET_LEN];
    let bytes = WORDS.as_bytes();
    let mut i = 0;
    while i < 256 {
        let x = (bytes[i * 4] - b'a') as usize;
        let y = (bytes[i * 4 + 3] - b'a') as usize;
        grid[y][x] = i as i16;
        i += 1;
    }
    grid
}

/// Get the four-letter word for a byte value. Pure table lookup.
pub fn word(index: u8) -> &'static str {
    let start = index as usize * 4;
    &WORDS[start..start + 4]
}

/// Get the two-letter minimal code for a byte value: the first and last
/// letters of the corresponding word.
pub fn minimal_word(index: u8) -> [u8; 2] {
    let w = word(index).as_bytes();
    [w[0], w[3]]
}

/// Resolve a token of `word_len` bytes (4 or 2) back to its byte value.
///
/// Matching is case-insensitive. The first and last letters select a grid
/// cell; an out-of-range letter or an empty cell fails with
/// [`BytewordsError::InvalidWord`]. For four-letter tokens the two middle
/// letters are then compared against the table entry. That check is
/// redundant given endpoint uniqueness, but it catches corrupted tokens
/// whose endpoints happen to survive, so it stays.
pub(crate) fn word_index(token: &[u8], word_len: usize) -> Result<u8, BytewordsError> {
    debug_assert_eq!(token.len(), word_len);
    let invalid = || BytewordsError::InvalidWord(String::from_utf8_lossy(token).into_owned());

    let x = letter_offset(token[0]).ok_or_else(invalid)?;
    let y = letter_offset(token[word_len - 1]).ok_or_else(invalid)?;
    let value = GRID[y][x];
    if value == NO_WORD {
        return Err(invalid());
    }
    let index = value as u8;

    if word_len == 4 {
        let entry = word(index).as_bytes();
        if token[1].to_ascii_lowercase() != entry[1] || token[2].to_ascii_lowercase() != entry[2] {
            return Err(invalid());
        }
    }

    Ok(index)
}

/// Offset of an ASCII letter within the alphabet, or `None` for any other
/// byte (including non-ASCII).
fn letter_offset(c: u8) -> Option<usize> {
    let c = c.to_ascii_lowercase();
    if c.is_ascii_lowercase() {
        Some((c - b'a') as usize)
    } else {
        None
    }
}
