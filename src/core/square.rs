use super::errors::ChessError;
use super::types::Colour;
use thiserror::Error;

/******************************************\
|==========================================|
|                  Files                   |
|==========================================|
\******************************************/

/// # Files representation
///
/// - Represents the files (columns 'a' to 'h') of the board

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum File {
    FileA, FileB, FileC, FileD, FileE, FileF, FileG, FileH,
}

impl File {
    /// Number of elements in the File enum
    pub const NUM: usize = 8;
}

crate::impl_from_to_primitive!(File);
crate::impl_enum_iter!(File);

/******************************************\
|==========================================|
|                  Ranks                   |
|==========================================|
\******************************************/

/// # Ranks representation
///
/// - Represents the ranks (rows 1 to 8) of the board

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum Rank {
    Rank1, Rank2, Rank3, Rank4, Rank5, Rank6, Rank7, Rank8,
}

impl Rank {
    /// Number of elements in the Rank enum
    pub const NUM: usize = 8;
}

crate::impl_from_to_primitive!(Rank);
crate::impl_enum_iter!(Rank);

impl Rank {
    /// Flips rank along the middle of the board, or switch perspectives between white and black
    ///
    /// ## Examples
    ///
    /// ```
    /// use arbiter::core::Rank;
    ///
    /// assert_eq!(Rank::Rank1.flip(), Rank::Rank8);
    /// assert_eq!(Rank::Rank4.flip(), Rank::Rank5);
    /// ```
    pub const fn flip(&self) -> Self {
        unsafe { Self::from_unchecked(7 - (*self as u8)) }
    }

    /// Returns the rank relative to the perspective of `col: Colour`
    ///
    /// ## Examples
    ///
    /// ```
    /// use arbiter::core::{Colour, Rank};
    ///
    /// assert_eq!(Rank::Rank2.relative(Colour::White), Rank::Rank2);
    /// assert_eq!(Rank::Rank2.relative(Colour::Black), Rank::Rank7);
    /// ```
    pub const fn relative(&self, col: Colour) -> Self {
        match col {
            Colour::White => *self,
            Colour::Black => self.flip(),
        }
    }
}

/******************************************\
|==========================================|
|               Coordinates                |
|==========================================|
\******************************************/

/// # Board coordinate
///
/// A (file, rank) pair, the player-facing name of a board cell. Ordered
/// file-major so that collections keyed by `Coord` enumerate column by column.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    file: File,
    rank: Rank,
}

impl Coord {
    /// Combines a file and a rank into a coordinate
    pub const fn from_parts(file: File, rank: Rank) -> Self {
        Coord { file, rank }
    }

    /// The file of the coordinate
    #[inline]
    pub const fn file(&self) -> File {
        self.file
    }

    /// The rank of the coordinate
    #[inline]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Flattens the coordinate onto the 1-64 square numbering
    ///
    /// ## Examples
    ///
    /// ```
    /// use arbiter::core::{Coord, File, Rank};
    ///
    /// assert_eq!(Coord::from_parts(File::FileA, Rank::Rank1).square().number(), 1);
    /// assert_eq!(Coord::from_parts(File::FileH, Rank::Rank1).square().number(), 8);
    /// assert_eq!(Coord::from_parts(File::FileA, Rank::Rank2).square().number(), 9);
    /// assert_eq!(Coord::from_parts(File::FileH, Rank::Rank8).square().number(), 64);
    /// ```
    pub const fn square(&self) -> Square {
        Square((self.rank as u8) * 8 + (self.file as u8) + 1)
    }

    /// Returns the absolute distance in files between two coordinates
    pub const fn file_dist(&self, other: Coord) -> u8 {
        (self.file as u8).abs_diff(other.file as u8)
    }

    /// Returns the absolute distance in ranks between two coordinates
    pub const fn rank_dist(&self, other: Coord) -> u8 {
        (self.rank as u8).abs_diff(other.rank as u8)
    }
}

/******************************************\
|==========================================|
|                 Squares                  |
|==========================================|
\******************************************/

/// # Square identifier
///
/// The flat 1-64 numbering of the board, row-major from a1. Square 1 is a1,
/// square 8 is h1, square 9 is a2 and square 64 is h8. The ray walkers in the
/// move generators do their arithmetic on this numbering.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board
    pub const NUM: usize = 64;

    /// Whether a flat number lies on the board
    ///
    /// ## Examples
    ///
    /// ```
    /// use arbiter::core::Square;
    ///
    /// assert!(Square::in_range(1));
    /// assert!(Square::in_range(64));
    /// assert!(!Square::in_range(0));
    /// assert!(!Square::in_range(65));
    /// assert!(!Square::in_range(-7));
    /// ```
    #[inline]
    pub const fn in_range(number: i16) -> bool {
        0 < number && number <= Self::NUM as i16
    }

    /// Validates a flat number into a square
    pub const fn new(number: i16) -> Result<Self, ChessError> {
        if Self::in_range(number) {
            Ok(Square(number as u8))
        } else {
            Err(ChessError::OutOfRange(number))
        }
    }

    /// Builds a square from a number already known to be in 1-64
    #[inline]
    pub(crate) const fn from_number_unchecked(number: i16) -> Self {
        debug_assert!(Self::in_range(number), "Square number out of bounds");
        Square(number as u8)
    }

    /// The flat 1-64 identifier of the square
    #[inline]
    pub const fn number(&self) -> u8 {
        self.0
    }

    /// Zero-based array index of the square
    #[inline]
    pub const fn index(&self) -> usize {
        (self.0 - 1) as usize
    }

    /// The 1-8 column number of the square
    ///
    /// ## Examples
    ///
    /// ```
    /// use arbiter::core::Square;
    ///
    /// assert_eq!(Square::new(1).unwrap().column(), 1);  // a1
    /// assert_eq!(Square::new(8).unwrap().column(), 8);  // h1
    /// assert_eq!(Square::new(9).unwrap().column(), 1);  // a2
    /// ```
    #[inline]
    pub const fn column(&self) -> u8 {
        let remainder = self.0 % 8;
        if remainder == 0 { 8 } else { remainder }
    }

    /// Unflattens the square back into a (file, rank) coordinate
    pub const fn coord(&self) -> Coord {
        let index = self.0 - 1;
        unsafe {
            Coord {
                file: File::from_unchecked(index % 8),
                rank: Rank::from_unchecked(index / 8),
            }
        }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for File {
    /// Displays the file in the form of its chess board representation (FileA => 'a')
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'a' + (*self as u8)) as char)
    }
}

impl std::fmt::Display for Rank {
    /// Displays the rank in the form of its chess board representation (Rank1 => '1')
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'1' + (*self as u8)) as char)
    }
}

impl std::fmt::Display for Coord {
    /// Displays the coordinate in algebraic form (e.g. "e4")
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl std::fmt::Display for Square {
    /// Displays the square as the coordinate it flattens (e.g. square 29 => "e4")
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.coord())
    }
}

/******************************************\
|==========================================|
|              Parsing Strings             |
|==========================================|
\******************************************/

impl std::str::FromStr for File {
    type Err = ParseFileError;

    /// Parses the file string into a file, with error checking
    ///
    /// ## Examples
    ///
    /// ```
    /// use arbiter::core::{File, ParseFileError};
    ///
    /// assert_eq!("a".parse::<File>().unwrap(), File::FileA);
    /// assert_eq!("h".parse::<File>().unwrap(), File::FileH);
    /// assert!(matches!("x".parse::<File>(), Err(ParseFileError::InvalidChar('x'))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 1 {
            return Err(ParseFileError::InvalidLength(s.len()));
        }

        let file_char = s.chars().next().ok_or(ParseFileError::InvalidLength(0))?;
        match file_char {
            'a'..='h' => unsafe { Ok(File::from_unchecked(file_char as u8 - b'a')) },
            _ => Err(ParseFileError::InvalidChar(file_char)),
        }
    }
}

impl std::str::FromStr for Rank {
    type Err = ParseRankError;

    /// Parses the rank string into a rank, with error checking
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 1 {
            return Err(ParseRankError::InvalidLength(s.len()));
        }

        let rank_char = s.chars().next().ok_or(ParseRankError::InvalidLength(0))?;
        match rank_char {
            '1'..='8' => unsafe { Ok(Rank::from_unchecked(rank_char as u8 - b'1')) },
            _ => Err(ParseRankError::InvalidChar(rank_char)),
        }
    }
}

impl std::str::FromStr for Coord {
    type Err = ParseCoordError;

    /// Parses an algebraic coordinate string, with error checking
    ///
    /// ## Examples
    ///
    /// ```
    /// use arbiter::core::{Coord, File, ParseCoordError, Rank};
    ///
    /// assert_eq!("a1".parse::<Coord>().unwrap(), Coord::from_parts(File::FileA, Rank::Rank1));
    /// assert_eq!("h8".parse::<Coord>().unwrap(), Coord::from_parts(File::FileH, Rank::Rank8));
    /// assert!(matches!("e9".parse::<Coord>(), Err(ParseCoordError::InvalidRankChar('9'))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err(ParseCoordError::InvalidLength(s.len()));
        }

        let mut chars = s.chars();
        let file_char = chars.next().ok_or(ParseCoordError::InvalidLength(0))?;
        let rank_char = chars.next().ok_or(ParseCoordError::InvalidLength(1))?;

        let file = file_char
            .to_string()
            .parse::<File>()
            .map_err(|_| ParseCoordError::InvalidFileChar(file_char))?;
        let rank = rank_char
            .to_string()
            .parse::<Rank>()
            .map_err(|_| ParseCoordError::InvalidRankChar(rank_char))?;

        Ok(Coord::from_parts(file, rank))
    }
}

/******************************************\
|==========================================|
|            Coord Parse Errors            |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFileError {
    #[error("Invalid length for file string: {0}, expected 1")]
    InvalidLength(usize),
    #[error("Invalid character for file string: '{0}', expected 'a'-'h'")]
    InvalidChar(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRankError {
    #[error("Invalid length for rank string: {0}, expected 1")]
    InvalidLength(usize),
    #[error("Invalid character for rank string: '{0}', expected '1'-'8'")]
    InvalidChar(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCoordError {
    #[error("Invalid length for coordinate string: {0}, expected 2")]
    InvalidLength(usize),
    #[error("Invalid character for file string: '{0}', expected 'a'-'h'")]
    InvalidFileChar(char),
    #[error("Invalid character for rank string: '{0}', expected '1'-'8'")]
    InvalidRankChar(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
