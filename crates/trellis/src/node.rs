//! The input tree the external tree-construction layer builds.

use trellis_accessibility::AccessibilityProps;
use trellis_box::Size;
use trellis_style::StyleFragment;

/// The primitive kinds the engine lays out.
///
/// Kind never changes the layout algorithm; it only informs the Renderer
/// (scroll containers consume overflow reports, text carries an externally
/// measured intrinsic size).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeKind {
    #[default]
    View,
    Text,
    ScrollView,
    Image,
}

/// One element of the input tree.
///
/// Owned exclusively by its parent; child order is significant and
/// preserved through every derived structure. Styles are an ordered list of
/// fragment slots — absent slots (`None`) contribute nothing, mirroring
/// conditional style entries in the tree layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub fragments: Vec<Option<StyleFragment>>,
    pub accessibility: AccessibilityProps,
    /// Externally measured content size (text shaping lives outside this
    /// core); consulted only when the node declares no size of its own.
    pub intrinsic_size: Option<Size>,
    pub children: Vec<Node>,
}

impl Node {
    /// A new node of the given kind with no styles or children.
    #[inline]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Append a style fragment slot.
    #[must_use]
    pub fn fragment(mut self, fragment: StyleFragment) -> Self {
        self.fragments.push(Some(fragment));
        self
    }

    /// Append an absent fragment slot (a falsy entry in the tree layer).
    #[must_use]
    pub fn absent_fragment(mut self) -> Self {
        self.fragments.push(None);
        self
    }

    /// Set accessibility props.
    #[must_use]
    pub fn accessibility(mut self, props: AccessibilityProps) -> Self {
        self.accessibility = props;
        self
    }

    /// Set the externally measured intrinsic size.
    #[must_use]
    pub fn intrinsic(mut self, size: Size) -> Self {
        self.intrinsic_size = Some(size);
        self
    }

    /// Append a child; order of calls is child order.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }
}
