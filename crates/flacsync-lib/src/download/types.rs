/// Result of one entry's fetch-and-verify pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// File already present with a matching digest; no network action.
    AlreadyValid,
    /// File already present; the index declares no digest to check against.
    AlreadyPresent,
    /// Downloaded and the digest matched.
    Verified,
    /// Downloaded; the index declares no digest to check against.
    Unverified,
    /// Downloaded but the digest differs. The file is left in place.
    Mismatch { expected: String, actual: String },
}

impl FetchOutcome {
    /// Whether the entry needed a network transfer.
    pub fn downloaded(&self) -> bool {
        matches!(
            self,
            Self::Verified | Self::Unverified | Self::Mismatch { .. }
        )
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }
}
