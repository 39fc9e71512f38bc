//! Stem-branch pairs and their position in the 60-cycle.

use crate::branch::{ALL_BRANCHES, Branch};
use crate::stem::{ALL_STEMS, Stem};

/// One position of the sexagenary cycle.
///
/// Only stems and branches of equal parity combine, so 60 of the 120
/// possible pairs exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SexagenaryPair {
    pub stem: Stem,
    pub branch: Branch,
    /// 1-based position in the cycle (1 = 甲子 .. 60 = 癸亥).
    pub cycle_index: u8,
}

impl SexagenaryPair {
    /// Pair at a 1-based cycle position, or `None` outside 1..=60.
    pub fn from_cycle_index(cycle_index: u8) -> Option<Self> {
        if !(1..=60).contains(&cycle_index) {
            return None;
        }
        let offset = cycle_index - 1;
        Some(Self {
            stem: ALL_STEMS[usize::from(offset % 10)],
            branch: ALL_BRANCHES[usize::from(offset % 12)],
            cycle_index,
        })
    }

    /// Pair from its components, or `None` when their parities differ.
    pub fn new(stem: Stem, branch: Branch) -> Option<Self> {
        let cycle_index = cycle_from_stem_branch(stem, branch)?;
        Some(Self {
            stem,
            branch,
            cycle_index,
        })
    }

    /// Pair for any cycle offset, wrapping modulo 60 (offset 0 = 甲子).
    pub(crate) fn from_offset(offset: i64) -> Self {
        let position = offset.rem_euclid(60) as u8;
        Self {
            stem: ALL_STEMS[usize::from(position % 10)],
            branch: ALL_BRANCHES[usize::from(position % 12)],
            cycle_index: position + 1,
        }
    }

    /// Pair from components known to share parity.
    pub(crate) fn combine(stem: Stem, branch: Branch) -> Self {
        debug_assert_eq!(stem.index() % 2, branch.index() % 2, "{stem:?}/{branch:?}");
        let (s, b) = (i64::from(stem.index()), i64::from(branch.index()));
        Self::from_offset(6 * s - 5 * b)
    }

    /// Two-character form, e.g. "丙午".
    pub fn hanzi(&self) -> String {
        format!("{}{}", self.stem.hanzi(), self.branch.hanzi())
    }

    /// Pinyin form, e.g. "bǐng-wǔ".
    pub fn pinyin(&self) -> String {
        format!("{}-{}", self.stem.pinyin(), self.branch.pinyin())
    }
}

impl std::fmt::Display for SexagenaryPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// 1-based cycle position of a stem-branch pair.
///
/// Solves `x ≡ stem (mod 10)`, `x ≡ branch (mod 12)` in closed form:
/// `x = 6·stem − 5·branch (mod 60)`. Returns `None` on a parity mismatch,
/// where no solution exists.
pub fn cycle_from_stem_branch(stem: Stem, branch: Branch) -> Option<u8> {
    let s = i32::from(stem.index());
    let b = i32::from(branch.index());
    if (s - b) % 2 != 0 {
        return None;
    }
    Some((6 * s - 5 * b).rem_euclid(60) as u8 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last() {
        let first = SexagenaryPair::from_cycle_index(1).unwrap();
        assert_eq!((first.stem, first.branch), (Stem::Jia, Branch::Zi));
        let last = SexagenaryPair::from_cycle_index(60).unwrap();
        assert_eq!((last.stem, last.branch), (Stem::Gui, Branch::Hai));
    }

    #[test]
    fn cycle_43_is_bing_wu() {
        let p = SexagenaryPair::from_cycle_index(43).unwrap();
        assert_eq!(p.hanzi(), "丙午");
        assert_eq!(p.pinyin(), "bǐng-wǔ");
        assert_eq!(cycle_from_stem_branch(Stem::Bing, Branch::Wu), Some(43));
    }

    #[test]
    fn out_of_range_index() {
        assert_eq!(SexagenaryPair::from_cycle_index(0), None);
        assert_eq!(SexagenaryPair::from_cycle_index(61), None);
    }

    #[test]
    fn parity_mismatch_rejected() {
        assert_eq!(cycle_from_stem_branch(Stem::Jia, Branch::Chou), None);
        assert_eq!(SexagenaryPair::new(Stem::Yi, Branch::Zi), None);
    }

    #[test]
    fn round_trip_all_positions() {
        for i in 1..=60u8 {
            let p = SexagenaryPair::from_cycle_index(i).unwrap();
            assert_eq!(cycle_from_stem_branch(p.stem, p.branch), Some(i));
            assert_eq!(SexagenaryPair::new(p.stem, p.branch), Some(p));
        }
    }

    #[test]
    fn combine_matches_new() {
        assert_eq!(
            SexagenaryPair::combine(Stem::Ding, Branch::Wei),
            SexagenaryPair::new(Stem::Ding, Branch::Wei).unwrap()
        );
    }

    #[test]
    fn from_offset_wraps_negative() {
        assert_eq!(SexagenaryPair::from_offset(-1).cycle_index, 60);
        assert_eq!(SexagenaryPair::from_offset(60).cycle_index, 1);
        assert_eq!(SexagenaryPair::from_offset(42).hanzi(), "丙午");
    }
}
