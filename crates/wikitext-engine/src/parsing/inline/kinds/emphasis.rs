use crate::tree::EmphasisKind;

impl EmphasisKind {
    pub const ALL: [EmphasisKind; 6] = [
        EmphasisKind::Bold,
        EmphasisKind::Italic,
        EmphasisKind::Underline,
        EmphasisKind::Strikethrough,
        EmphasisKind::Monospace,
        EmphasisKind::Small,
    ];

    /// The paired delimiter that opens and closes this span.
    pub fn delimiter(self) -> &'static str {
        match self {
            EmphasisKind::Bold => "''",
            // `//` would clash with URLs
            EmphasisKind::Italic => "##",
            EmphasisKind::Underline => "__",
            EmphasisKind::Strikethrough => "~~",
            EmphasisKind::Monospace => "@@",
            EmphasisKind::Small => "°°",
        }
    }

    /// The span opened at the start of `remainder`, if any.
    pub fn opened_by(remainder: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| remainder.starts_with(kind.delimiter()))
    }
}
