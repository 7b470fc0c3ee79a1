use std::fmt;
use std::ops::{BitOr, BitOrAssign, BitXor, BitXorAssign};

/// Role of a single module in a QR plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum PixelRole {
    /// Not yet claimed by any stage
    #[default]
    None = 0,
    /// Finder square or its light separator
    Position = 1,
    /// Alignment square
    Alignment = 2,
    /// Timing strip between finder squares
    Timing = 3,
    /// Format information (level + mask)
    Format = 4,
    /// Data bit
    Data = 5,
    /// Error correction check bit
    Check = 6,
    /// Version information (versions 7+)
    VersionInfo = 7,
    /// The single always-dark module next to the bottom-left format strip
    DarkModule = 8,
}

impl PixelRole {
    /// Every role, in encoding order.
    pub const ALL: [PixelRole; 9] = [
        PixelRole::None,
        PixelRole::Position,
        PixelRole::Alignment,
        PixelRole::Timing,
        PixelRole::Format,
        PixelRole::Data,
        PixelRole::Check,
        PixelRole::VersionInfo,
        PixelRole::DarkModule,
    ];

    /// Light pixel carrying this role.
    pub const fn pixel(self) -> Pixel {
        Pixel((self as u32) << ROLE_SHIFT)
    }

    /// Decode a role from its 4-bit field value.
    pub fn from_bits(bits: u32) -> Option<Self> {
        Self::ALL.get(bits as usize).copied()
    }

    /// True for roles whose modules are masked (payload-bearing cells).
    pub fn is_maskable(self) -> bool {
        matches!(self, PixelRole::Data | PixelRole::Check)
    }

    fn name(self) -> &'static str {
        match self {
            PixelRole::None => "",
            PixelRole::Position => "position",
            PixelRole::Alignment => "alignment",
            PixelRole::Timing => "timing",
            PixelRole::Format => "format",
            PixelRole::Data => "data",
            PixelRole::Check => "check",
            PixelRole::VersionInfo => "version",
            PixelRole::DarkModule => "dark",
        }
    }
}

impl fmt::Display for PixelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

const ROLE_SHIFT: u32 = 2;
const ROLE_MASK: u32 = 0xF;
const OFFSET_SHIFT: u32 = 6;

/// A single module of a QR plan packed into one word.
///
/// Layout: bit 0 black, bit 1 invert, bits 2-5 role, bits 6.. offset.
/// The ranges are disjoint so `role.pixel() | Pixel::offset(i) | Pixel::BLACK`
/// composes without cross-talk.
///
/// On Data/Check pixels `black` is the payload bit and `invert` the mask, so
/// the module renders dark iff `black ^ invert`. On every other role `black`
/// is already the rendered color and `invert` only records that a fixed
/// XOR constant flipped it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel(u32);

impl Pixel {
    /// Black flag
    pub const BLACK: Pixel = Pixel(1);
    /// Invert (mask) flag
    pub const INVERT: Pixel = Pixel(1 << 1);

    /// Pixel carrying only a sequence offset.
    pub const fn offset(offset: usize) -> Pixel {
        Pixel((offset as u32) << OFFSET_SHIFT)
    }

    /// Sequence index, meaningful for format and version cells.
    pub fn offset_value(self) -> usize {
        (self.0 >> OFFSET_SHIFT) as usize
    }

    /// Role of this pixel.
    ///
    /// Field values past the last role only arise from OR-ing two roles
    /// together and decode as [`PixelRole::None`].
    pub fn role(self) -> PixelRole {
        PixelRole::from_bits((self.0 >> ROLE_SHIFT) & ROLE_MASK).unwrap_or_default()
    }

    /// Black flag as laid down by the geometry or format stage.
    pub fn is_black(self) -> bool {
        self.0 & Self::BLACK.0 != 0
    }

    /// Invert flag set by masking (and by the format XOR constant).
    pub fn is_inverted(self) -> bool {
        self.0 & Self::INVERT.0 != 0
    }

    /// Final color of the module.
    pub fn is_dark(self) -> bool {
        if self.role().is_maskable() {
            self.is_black() != self.is_inverted()
        } else {
            self.is_black()
        }
    }

    /// Set or clear the black flag.
    pub fn set_black(&mut self, black: bool) {
        self.set_flag(Self::BLACK, black);
    }

    /// Set or clear the invert flag.
    pub fn set_invert(&mut self, invert: bool) {
        self.set_flag(Self::INVERT, invert);
    }

    /// Raw packed value.
    pub fn bits(self) -> u32 {
        self.0
    }

    fn set_flag(&mut self, flag: Pixel, on: bool) {
        if on {
            self.0 |= flag.0;
        } else {
            self.0 &= !flag.0;
        }
    }
}

impl BitOr for Pixel {
    type Output = Pixel;

    fn bitor(self, rhs: Pixel) -> Pixel {
        Pixel(self.0 | rhs.0)
    }
}

impl BitOrAssign for Pixel {
    fn bitor_assign(&mut self, rhs: Pixel) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Pixel {
    type Output = Pixel;

    fn bitxor(self, rhs: Pixel) -> Pixel {
        Pixel(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Pixel {
    fn bitxor_assign(&mut self, rhs: Pixel) {
        self.0 ^= rhs.0;
    }
}

impl From<PixelRole> for Pixel {
    fn from(role: PixelRole) -> Self {
        role.pixel()
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.role())?;
        if self.is_black() {
            f.write_str("+black")?;
        }
        if self.is_inverted() {
            f.write_str("+invert")?;
        }
        write!(f, "+{}", self.offset_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_do_not_overlap() {
        for role in PixelRole::ALL {
            for offset in [0usize, 1, 7, 14, 17] {
                let p = role.pixel() | Pixel::offset(offset) | Pixel::BLACK;
                assert_eq!(p.role(), role);
                assert_eq!(p.offset_value(), offset);
                assert!(p.is_black());
                assert!(!p.is_inverted());
            }
        }
    }

    #[test]
    fn test_flags() {
        let mut p = PixelRole::Data.pixel();
        assert!(!p.is_dark());

        p.set_invert(true);
        assert!(p.is_inverted());
        assert!(p.is_dark());

        p.set_black(true);
        assert!(p.is_black());
        assert!(!p.is_dark());

        p.set_invert(false);
        assert!(p.is_dark());
        assert_eq!(p.role(), PixelRole::Data);
    }

    #[test]
    fn test_xor_flips_both_flags() {
        let p = PixelRole::Format.pixel() | Pixel::BLACK;
        let q = p ^ (Pixel::BLACK | Pixel::INVERT);
        assert!(!q.is_black());
        assert!(q.is_inverted());
        // Outside Data/Check the black flag is the rendered color
        assert!(p.is_dark());
        assert!(!q.is_dark());
    }

    #[test]
    fn test_invert_only_masks_payload_roles() {
        let timing = PixelRole::Timing.pixel() | Pixel::INVERT;
        assert!(!timing.is_dark());
        let check = PixelRole::Check.pixel() | Pixel::INVERT;
        assert!(check.is_dark());
    }

    #[test]
    fn test_display() {
        let p = PixelRole::Format.pixel() | Pixel::offset(3) | Pixel::BLACK | Pixel::INVERT;
        assert_eq!(p.to_string(), "format+black+invert+3");
        assert_eq!(PixelRole::Timing.pixel().to_string(), "timing+0");
    }

    #[test]
    fn test_default_is_unclaimed() {
        assert_eq!(Pixel::default().role(), PixelRole::None);
    }
}
