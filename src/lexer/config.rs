/// Which analyzer drives tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Table-driven finite-state machine.
    #[default]
    Dfa,
    /// Hand-written scanner with type names and sign folding.
    Scanner,
    /// Ordered regex pattern table.
    Pattern,
}

impl std::str::FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dfa" => Ok(Variant::Dfa),
            "scanner" => Ok(Variant::Scanner),
            "pattern" => Ok(Variant::Pattern),
            other => Err(format!("unknown lexer variant `{}`", other)),
        }
    }
}

/// What happens to a character no rule accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownPolicy {
    /// Emit a one-character `UNKNOWN` token.
    #[default]
    Emit,
    /// Drop the character.
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexerConfig {
    pub variant: Variant,
    pub unknown_policy: UnknownPolicy,
    /// Only consulted by the DFA; the other variants always record positions.
    pub track_positions: bool,
}

impl LexerConfig {
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_unknown_policy(mut self, policy: UnknownPolicy) -> Self {
        self.unknown_policy = policy;
        self
    }

    pub fn with_positions(mut self, track_positions: bool) -> Self {
        self.track_positions = track_positions;
        self
    }
}
