//! Human-readable addresses for diff positions

use serde::{Deserialize, Serialize};

/// How row and cell positions are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressStyle {
    /// `R3` and `R3,C2 | R4,C2`
    #[default]
    Plain,
    /// `3:3` and `B3 | B4`
    Spreadsheet,
}

/// Address of a whole row (0-based input)
pub fn row_address(row: usize, style: AddressStyle) -> String {
    match style {
        AddressStyle::Plain => format!("R{}", row + 1),
        AddressStyle::Spreadsheet => format!("{0}:{0}", row + 1),
    }
}

/// Address of a cell in a pair of matched rows (0-based input)
pub fn cell_address(row1: usize, row2: usize, column: usize, style: AddressStyle) -> String {
    match style {
        AddressStyle::Plain => format!(
            "R{},C{col} | R{},C{col}",
            row1 + 1,
            row2 + 1,
            col = column + 1
        ),
        AddressStyle::Spreadsheet => {
            let letters = column_letters(column);
            format!("{letters}{} | {letters}{}", row1 + 1, row2 + 1)
        }
    }
}

/// Column letters for a 0-based column index.
///
/// Columns past `Z` are lettered as `letters(col / 26) + letter(col % 26)`,
/// so index 26 is `BA` and 27 is `BB`. This is not the usual spreadsheet
/// sequence (`AA`, `AB`, ...) and existing reports depend on it.
pub fn column_letters(column: usize) -> String {
    let letter = |n: usize| char::from(b'A' + (n % 26) as u8);
    if column < 26 {
        letter(column).to_string()
    } else {
        let mut letters = column_letters(column / 26);
        letters.push(letter(column % 26));
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_addresses() {
        assert_eq!(row_address(0, AddressStyle::Plain), "R1");
        assert_eq!(row_address(41, AddressStyle::Plain), "R42");
        assert_eq!(cell_address(0, 3, 1, AddressStyle::Plain), "R1,C2 | R4,C2");
    }

    #[test]
    fn test_spreadsheet_addresses() {
        assert_eq!(row_address(0, AddressStyle::Spreadsheet), "1:1");
        assert_eq!(row_address(9, AddressStyle::Spreadsheet), "10:10");
        assert_eq!(cell_address(1, 2, 0, AddressStyle::Spreadsheet), "A2 | A3");
        assert_eq!(cell_address(0, 0, 27, AddressStyle::Spreadsheet), "BB1 | BB1");
    }

    #[test]
    fn test_column_letters_single() {
        assert_eq!(column_letters(0), "A");
        assert_eq!(column_letters(1), "B");
        assert_eq!(column_letters(25), "Z");
    }

    #[test]
    fn test_column_letters_past_z() {
        assert_eq!(column_letters(26), "BA");
        assert_eq!(column_letters(27), "BB");
        assert_eq!(column_letters(51), "BZ");
        assert_eq!(column_letters(52), "CA");
        assert_eq!(column_letters(26 * 26 - 1), "ZZ");
        assert_eq!(column_letters(26 * 26), "BAA");
    }
}
