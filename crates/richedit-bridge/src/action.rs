//! Inbound action classification.
//!
//! Actions are matched by prefix against a single ordered table; the
//! first match wins, so no prefix in the table may be a prefix of another.

/// What an inbound action asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Ready,
    Input,
    UpdateHeight,
    Focus,
    Blur,
    Custom,
}

/// Prefix table, tested in order.
pub const ACTION_PREFIXES: &[(&str, ActionKind)] = &[
    ("ready", ActionKind::Ready),
    ("input", ActionKind::Input),
    ("updateHeight", ActionKind::UpdateHeight),
    ("focus", ActionKind::Focus),
    ("blur", ActionKind::Blur),
    ("action/", ActionKind::Custom),
];

/// A classified action borrowed from the raw queue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    Ready,
    Input,
    UpdateHeight,
    Focus,
    Blur,
    /// `action/<payload>`; carries everything after the prefix.
    Custom(&'a str),
}

impl<'a> Action<'a> {
    /// Classify a raw action. Unknown prefixes yield `None`.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let (prefix, kind) = ACTION_PREFIXES
            .iter()
            .find(|(prefix, _)| raw.starts_with(prefix))?;
        Some(match kind {
            ActionKind::Ready => Self::Ready,
            ActionKind::Input => Self::Input,
            ActionKind::UpdateHeight => Self::UpdateHeight,
            ActionKind::Focus => Self::Focus,
            ActionKind::Blur => Self::Blur,
            ActionKind::Custom => Self::Custom(&raw[prefix.len()..]),
        })
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Ready => ActionKind::Ready,
            Self::Input => ActionKind::Input,
            Self::UpdateHeight => ActionKind::UpdateHeight,
            Self::Focus => ActionKind::Focus,
            Self::Blur => ActionKind::Blur,
            Self::Custom(_) => ActionKind::Custom,
        }
    }
}
