//! Compression mode tags.

/// The compression mode stored in byte 0 of every asset header.
///
/// Tags 0..=5 select which of the two smol streams are entropy-coded and
/// whether the symbol stream is delta-coded. `Tilemap` reuses the
/// instruction decoder with a delta post-pass over the output.
/// `FrameContainer` is reserved. `Lz77` doubles as the GBA BIOS type byte
/// (0x10) so legacy assets keep their original header word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressionMode {
    BaseOnly,
    EncodeSyms,
    EncodeDeltaSyms,
    EncodeLo,
    EncodeBoth,
    EncodeBothDeltaSyms,
    Tilemap,
    FrameContainer,
    Lz77,
}

impl CompressionMode {
    /// Decodes a raw mode tag.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::BaseOnly),
            1 => Some(Self::EncodeSyms),
            2 => Some(Self::EncodeDeltaSyms),
            3 => Some(Self::EncodeLo),
            4 => Some(Self::EncodeBoth),
            5 => Some(Self::EncodeBothDeltaSyms),
            6 => Some(Self::Tilemap),
            7 => Some(Self::FrameContainer),
            0x10 => Some(Self::Lz77),
            _ => None,
        }
    }

    /// Returns the raw tag byte.
    #[must_use]
    pub const fn raw(self) -> u8 {
        match self {
            Self::BaseOnly => 0,
            Self::EncodeSyms => 1,
            Self::EncodeDeltaSyms => 2,
            Self::EncodeLo => 3,
            Self::EncodeBoth => 4,
            Self::EncodeBothDeltaSyms => 5,
            Self::Tilemap => 6,
            Self::FrameContainer => 7,
            Self::Lz77 => 0x10,
        }
    }

    /// Returns `true` if the length/offset stream is entropy-coded.
    #[must_use]
    pub const fn encodes_lo(self) -> bool {
        matches!(
            self,
            Self::EncodeLo | Self::EncodeBoth | Self::EncodeBothDeltaSyms
        )
    }

    /// Returns `true` if the symbol stream is entropy-coded.
    #[must_use]
    pub const fn encodes_syms(self) -> bool {
        matches!(
            self,
            Self::EncodeSyms | Self::EncodeDeltaSyms | Self::EncodeBoth | Self::EncodeBothDeltaSyms
        )
    }

    /// Returns `true` if the symbol stream is delta-coded on top of the
    /// entropy coding.
    #[must_use]
    pub const fn delta_syms(self) -> bool {
        matches!(self, Self::EncodeDeltaSyms | Self::EncodeBothDeltaSyms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [CompressionMode; 9] = [
        CompressionMode::BaseOnly,
        CompressionMode::EncodeSyms,
        CompressionMode::EncodeDeltaSyms,
        CompressionMode::EncodeLo,
        CompressionMode::EncodeBoth,
        CompressionMode::EncodeBothDeltaSyms,
        CompressionMode::Tilemap,
        CompressionMode::FrameContainer,
        CompressionMode::Lz77,
    ];

    #[test]
    fn raw_roundtrip() {
        for mode in ALL {
            assert_eq!(CompressionMode::from_raw(mode.raw()), Some(mode));
        }
    }

    #[test]
    fn unknown_tags_rejected() {
        for raw in 8..=0x0F {
            assert_eq!(CompressionMode::from_raw(raw), None);
        }
        assert_eq!(CompressionMode::from_raw(0x11), None);
        assert_eq!(CompressionMode::from_raw(0xFF), None);
    }

    #[test]
    fn lo_encoded_modes() {
        let expected = [
            CompressionMode::EncodeLo,
            CompressionMode::EncodeBoth,
            CompressionMode::EncodeBothDeltaSyms,
        ];
        for mode in ALL {
            assert_eq!(mode.encodes_lo(), expected.contains(&mode), "{mode:?}");
        }
    }

    #[test]
    fn sym_encoded_modes() {
        let expected = [
            CompressionMode::EncodeSyms,
            CompressionMode::EncodeDeltaSyms,
            CompressionMode::EncodeBoth,
            CompressionMode::EncodeBothDeltaSyms,
        ];
        for mode in ALL {
            assert_eq!(mode.encodes_syms(), expected.contains(&mode), "{mode:?}");
        }
    }

    #[test]
    fn delta_sym_modes() {
        let expected = [
            CompressionMode::EncodeDeltaSyms,
            CompressionMode::EncodeBothDeltaSyms,
        ];
        for mode in ALL {
            assert_eq!(mode.delta_syms(), expected.contains(&mode), "{mode:?}");
        }
    }

    #[test]
    fn lz77_tag_matches_bios_type_byte() {
        assert_eq!(CompressionMode::Lz77.raw(), 0x10);
    }
}
