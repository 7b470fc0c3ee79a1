use std::fmt;

use crate::error::PlanError;

/// QR code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest version
    pub const MIN: u8 = 1;
    /// Largest version
    pub const MAX: u8 = 40;

    /// Validate a version number
    pub fn new(number: u8) -> Result<Self, PlanError> {
        if (Self::MIN..=Self::MAX).contains(&number) {
            Ok(Self(number))
        } else {
            Err(PlanError::InvalidVersion(number))
        }
    }

    /// Every valid version, ascending
    pub fn all() -> impl Iterator<Item = Version> {
        (Self::MIN..=Self::MAX).map(Version)
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Versions 7 and up carry a version information block
    pub fn has_version_info(&self) -> bool {
        self.0 >= 7
    }
}

impl TryFrom<u8> for Version {
    type Error = PlanError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// All levels, least to most tolerant
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Two-bit code used in format information (L=01, M=00, Q=11, H=10)
    pub fn format_bits(&self) -> u8 {
        (*self as u8) ^ 1
    }

    /// Get error correction level from format bits (01=L, 00=M, 11=Q, 10=H)
    pub fn from_format_bits(bits: u8) -> Self {
        match (bits & 0x03) ^ 1 {
            0 => ECLevel::L,
            1 => ECLevel::M,
            2 => ECLevel::Q,
            _ => ECLevel::H,
        }
    }

    /// Row index into the per-level tables
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ECLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ECLevel::L => "L",
            ECLevel::M => "M",
            ECLevel::Q => "Q",
            ECLevel::H => "H",
        };
        f.pad(s)
    }
}

/// Mask pattern (0-7)
///
/// `i` is the row and `j` the column of the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i*j)%3 + (i+j)%2) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All masks in id order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its id; `None` for ids past 7
    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::ALL.get(bits as usize).copied()
    }

    /// Mask id (0-7)
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Check if module at row `i`, column `j` should be inverted
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i * j) % 3) + ((i + j) % 2)) % 2 == 0,
        }
    }
}

impl fmt::Display for MaskPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Data encoding mode.
///
/// Not used by the planner; carried for the payload encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Digits 0-9
    Numeric = 1,
    /// Digits, upper-case letters and ` $%*+-./:`
    Alphanumeric = 2,
    /// Arbitrary bytes
    EightBit = 4,
}

impl Mode {
    /// Four-bit mode indicator
    pub fn indicator(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Numeric => "numeric",
            Mode::Alphanumeric => "alpha",
            Mode::EightBit => "8bit",
        };
        f.pad(s)
    }
}
