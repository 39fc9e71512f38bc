//! The ten heavenly stems (tiangan).

/// A heavenly stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (index 0 = Jia).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_HANZI: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const STEM_PINYIN: [&str; 10] = [
    "jiǎ", "yǐ", "bǐng", "dīng", "wù", "jǐ", "gēng", "xīn", "rén", "guǐ",
];

const STEM_ELEMENT: [&str; 10] = [
    "Wood Yang",
    "Wood Yin",
    "Fire Yang",
    "Fire Yin",
    "Earth Yang",
    "Earth Yin",
    "Metal Yang",
    "Metal Yin",
    "Water Yang",
    "Water Yin",
];

impl Stem {
    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at a 0-based index, or `None` outside 0..=9.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_STEMS.get(usize::from(index)).copied()
    }

    /// Chinese character.
    pub fn hanzi(self) -> &'static str {
        STEM_HANZI[self.index() as usize]
    }

    /// Toned pinyin romanization.
    pub fn pinyin(self) -> &'static str {
        STEM_PINYIN[self.index() as usize]
    }

    /// Five-phase element and polarity, e.g. "Wood Yang".
    pub fn element(self) -> &'static str {
        STEM_ELEMENT[self.index() as usize]
    }

    /// The stem `steps` positions later, wrapping after Gui.
    pub fn advance(self, steps: u32) -> Self {
        ALL_STEMS[((u32::from(self.index()) + steps) % 10) as usize]
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanzi())
    }
}
