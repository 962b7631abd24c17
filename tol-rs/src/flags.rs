//! Per-command modifiers set by `-c`, `-i` and `-p`.
//!
//! A [`FlagSet`] lives only until the next text argument is consumed: the
//! processor takes it by value for that step and starts over from
//! [`FlagSet::default`] afterwards, whether or not anything was evaluated.

use std::fmt;

/// A single modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// `-c`: keep appending arguments until the buffer is a complete command.
    Continue,
    /// `-i`: swallow an error from the next evaluation.
    IgnoreErrors,
    /// `-p`: print the (non-empty) result of the next evaluation.
    PrintResult,
}

impl Flag {
    const fn bit(self) -> u8 {
        match self {
            Flag::Continue => 1 << 0,
            Flag::IgnoreErrors => 1 << 1,
            Flag::PrintResult => 1 << 2,
        }
    }
}

/// Set of [`Flag`]s, empty by default.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagSet(u8);

impl FlagSet {
    #[cfg(test)]
    const fn empty() -> Self {
        Self(0)
    }

    /// Return a copy of the set with `flag` added.
    #[cfg(test)]
    #[must_use]
    const fn with(self, flag: Flag) -> Self {
        Self(self.0 | flag.bit())
    }

    pub fn insert(&mut self, flag: Flag) {
        self.0 |= flag.bit();
    }

    pub const fn contains(self, flag: Flag) -> bool {
        self.0 & flag.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for flag in [Flag::Continue, Flag::IgnoreErrors, Flag::PrintResult] {
            if self.contains(flag) {
                set.entry(&flag);
            }
        }
        set.finish()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let flags = FlagSet::default();
        assert!(flags.is_empty());
        assert!(!flags.contains(Flag::Continue));
        assert!(!flags.contains(Flag::IgnoreErrors));
        assert!(!flags.contains(Flag::PrintResult));
    }

    #[test]
    fn flags_are_independent() {
        let mut flags = FlagSet::empty();
        flags.insert(Flag::PrintResult);
        assert!(flags.contains(Flag::PrintResult));
        assert!(!flags.contains(Flag::IgnoreErrors));
        assert!(!flags.contains(Flag::Continue));
    }

    #[test]
    fn insert_is_idempotent() {
        let once = FlagSet::empty().with(Flag::IgnoreErrors);
        let twice = once.with(Flag::IgnoreErrors);
        assert_eq!(once, twice);
    }

    #[test]
    fn take_resets_to_empty() {
        let mut flags = FlagSet::empty().with(Flag::Continue).with(Flag::PrintResult);
        let taken = std::mem::take(&mut flags);
        assert!(flags.is_empty());
        assert!(taken.contains(Flag::Continue) && taken.contains(Flag::PrintResult));
    }

    #[test]
    fn debug_lists_set_flags() {
        let flags = FlagSet::empty().with(Flag::IgnoreErrors);
        assert_eq!(format!("{flags:?}"), "{IgnoreErrors}");
    }
}
