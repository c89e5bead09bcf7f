use trellis::{Node, NodeKind, OverflowAxis, StyleFragment, UnresolvedImages, Viewport, render};

/// Rigid children that exceed the container are laid out past its edge and
/// reported, never clipped — clipping and scrolling belong to the Renderer.
#[test]
fn main_axis_overflow_is_reported_not_clipped() {
    let _ = env_logger::builder().is_test(true).try_init();

    let wide = || {
        Node::new(NodeKind::View)
            .fragment(StyleFragment::new().with("width", 150).with("height", 20))
    };
    let root = Node::new(NodeKind::ScrollView)
        .fragment(
            StyleFragment::new()
                .with("width", 200)
                .with("height", 50)
                .with("flexDirection", "row"),
        )
        .child(wide())
        .child(wide());

    let tree = render(
        &root,
        Viewport {
            width: 375.0,
            height: 667.0,
        },
        &UnresolvedImages,
    );

    // Geometry keeps flowing past the container edge.
    let second = tree.root.children.get(1).expect("second child");
    assert!((second.geometry.rect.x - 150.0).abs() < 0.001);
    assert!((second.geometry.rect.width - 150.0).abs() < 0.001);

    // And the excess is signalled for the scroll container to consume.
    assert_eq!(tree.overflows.len(), 1);
    let report = tree.overflows.first().expect("overflow report");
    assert_eq!(report.path, Vec::<usize>::new(), "root container overflows");
    assert_eq!(report.axis, OverflowAxis::Horizontal);
    assert!((report.overflow_px - 100.0).abs() < 0.001);
}

/// A shrinkable child absorbs the deficit instead of overflowing.
#[test]
fn shrinking_absorbs_deficit() {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = Node::new(NodeKind::View)
        .fragment(
            StyleFragment::new()
                .with("width", 200)
                .with("height", 50)
                .with("flexDirection", "row"),
        )
        .child(
            Node::new(NodeKind::View).fragment(
                StyleFragment::new()
                    .with("width", 150)
                    .with("height", 20)
                    .with("flexShrink", 1),
            ),
        )
        .child(
            Node::new(NodeKind::View).fragment(
                StyleFragment::new()
                    .with("width", 150)
                    .with("height", 20)
                    .with("flexShrink", 1),
            ),
        );

    let tree = render(
        &root,
        Viewport {
            width: 375.0,
            height: 667.0,
        },
        &UnresolvedImages,
    );
    assert!(tree.overflows.is_empty(), "shrink resolved the deficit");
    let first = tree.root.children.first().expect("first child");
    assert!((first.geometry.rect.width - 100.0).abs() < 0.001);
}

/// Contradictory constraints clamp to zero instead of erroring, and the
/// rest of the tree still lays out.
#[test]
fn contradictory_constraints_clamp_to_zero() {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = Node::new(NodeKind::View)
        .fragment(StyleFragment::new().with("width", 100).with("height", 100))
        .child(
            Node::new(NodeKind::View)
                .fragment(StyleFragment::new().with("width", -50).with("height", 20)),
        )
        .child(
            Node::new(NodeKind::View)
                .fragment(StyleFragment::new().with("width", 30).with("height", 20)),
        );

    let tree = render(
        &root,
        Viewport {
            width: 375.0,
            height: 667.0,
        },
        &UnresolvedImages,
    );
    let clamped = tree.root.children.first().expect("clamped child");
    assert!((clamped.geometry.rect.width - 0.0).abs() < 0.001);
    assert!(!clamped.issues.is_empty(), "the invalid width is diagnosed");

    // The sibling is unaffected.
    let sibling = tree.root.children.get(1).expect("sibling");
    assert!((sibling.geometry.rect.width - 30.0).abs() < 0.001);
}
