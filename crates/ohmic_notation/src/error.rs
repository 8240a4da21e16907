use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NotationError {
    #[error(transparent)]
    Rkm(#[from] RkmError),
    #[error(transparent)]
    Shorthand(#[from] ShorthandError),
}

impl NotationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NotationError::Rkm(re) => re.kind(),
            NotationError::Shorthand(se) => se.kind(),
        }
    }
}

/// Flat classification of every failure the engine can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidLength,
    UnknownDomain,
    MissingSeparator,
    UnknownPrefixForDomain,
    MalformedNumeral,
    UnknownPrefix,
    MissingUnitSuffix,
    TrailingCharacters,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed numeral '{lexeme}'")]
pub struct MalformedNumeral {
    pub lexeme: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RkmError {
    #[error("RKM code '{code}' has {len} characters (expected 2 to 5)")]
    InvalidLength { code: String, len: usize },

    #[error("no RKM domain for letter '{domain}'")]
    UnknownDomain { domain: char },

    #[error("RKM code '{code}' has no separator letter")]
    MissingSeparator { code: String },

    #[error("letter '{prefix}' is not a valid RKM separator for domain '{domain}'")]
    UnknownPrefixForDomain { prefix: char, domain: char },

    #[error(transparent)]
    MalformedNumeral(#[from] MalformedNumeral),
}

impl RkmError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RkmError::InvalidLength { .. } => ErrorKind::InvalidLength,
            RkmError::UnknownDomain { .. } => ErrorKind::UnknownDomain,
            RkmError::MissingSeparator { .. } => ErrorKind::MissingSeparator,
            RkmError::UnknownPrefixForDomain { .. } => ErrorKind::UnknownPrefixForDomain,
            RkmError::MalformedNumeral(_) => ErrorKind::MalformedNumeral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShorthandError {
    #[error(transparent)]
    MalformedNumeral(#[from] MalformedNumeral),

    #[error("unknown SI prefix '{prefix}'")]
    UnknownPrefix { prefix: char },

    #[error("'{remainder}' is not a valid unit for this quantity")]
    MissingUnitSuffix { remainder: String },

    #[error("unexpected trailing characters '{remainder}'")]
    TrailingCharacters { remainder: String },
}

impl ShorthandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShorthandError::MalformedNumeral(_) => ErrorKind::MalformedNumeral,
            ShorthandError::UnknownPrefix { .. } => ErrorKind::UnknownPrefix,
            ShorthandError::MissingUnitSuffix { .. } => ErrorKind::MissingUnitSuffix,
            ShorthandError::TrailingCharacters { .. } => ErrorKind::TrailingCharacters,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown quantity '{name}'")]
pub struct UnknownQuantity {
    pub name: String,
}
