//! Board files (columns A–H).

use std::fmt;

/// A file (column) on the board, from FileA to FileH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    FileA = 0,
    FileB = 1,
    FileC = 2,
    FileD = 3,
    FileE = 4,
    FileF = 5,
    FileG = 6,
    FileH = 7,
}

impl File {
    /// Total number of files.
    pub const COUNT: usize = 8;

    /// All files from A to H.
    pub const ALL: [File; 8] = [
        File::FileA,
        File::FileB,
        File::FileC,
        File::FileD,
        File::FileE,
        File::FileF,
        File::FileG,
        File::FileH,
    ];

    /// Return the column index (0 = A, 7 = H).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a file from a column index.
    #[inline]
    pub const fn from_index(index: u8) -> Option<File> {
        if index < 8 {
            Some(File::ALL[index as usize])
        } else {
            None
        }
    }

    /// Parse a file letter, ignoring case.
    pub fn from_letter(c: char) -> Option<File> {
        let upper = c.to_ascii_uppercase();
        if ('A'..='H').contains(&upper) {
            File::from_index(upper as u8 - b'A')
        } else {
            None
        }
    }

    /// Return the uppercase file letter.
    #[inline]
    pub const fn letter(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
