//! Skeleton extraction options.

/// Options for skeleton extraction.
#[derive(Debug, Clone, Default)]
pub struct SkeletonOptions {
    /// What to do with embed references that do not resolve to an image
    pub unresolved: UnresolvedPolicy,

    /// Order of anchors within one paragraph
    pub anchor_order: AnchorOrder,
}

impl SkeletonOptions {
    /// Create new skeleton options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unresolved-reference policy.
    pub fn with_unresolved(mut self, policy: UnresolvedPolicy) -> Self {
        self.unresolved = policy;
        self
    }

    /// Emit placeholder anchors for unresolved references.
    pub fn with_placeholders(self) -> Self {
        self.with_unresolved(UnresolvedPolicy::Placeholder)
    }

    /// Set the anchor order.
    pub fn with_anchor_order(mut self, order: AnchorOrder) -> Self {
        self.anchor_order = order;
        self
    }
}

/// Handling of graphic paragraphs whose embed references do not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnresolvedPolicy {
    /// Drop the reference without an anchor
    #[default]
    Omit,
    /// Emit an `unresolved:<id>` anchor at the paragraph's position
    Placeholder,
}

/// Order of anchors emitted for a paragraph with several images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorOrder {
    /// Relationship table order, which need not match visual order
    #[default]
    RelationshipTable,
    /// Order of `r:embed` references in the paragraph markup
    Markup,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SkeletonOptions::default();
        assert_eq!(options.unresolved, UnresolvedPolicy::Omit);
        assert_eq!(options.anchor_order, AnchorOrder::RelationshipTable);
    }

    #[test]
    fn test_builder() {
        let options = SkeletonOptions::new()
            .with_placeholders()
            .with_anchor_order(AnchorOrder::Markup);
        assert_eq!(options.unresolved, UnresolvedPolicy::Placeholder);
        assert_eq!(options.anchor_order, AnchorOrder::Markup);
    }
}
