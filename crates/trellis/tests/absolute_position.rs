use trellis::{Node, NodeKind, StyleFragment, UnresolvedImages, Viewport, render};

/// Absolute children leave the flex flow and position against the parent's
/// padding box.
#[test]
fn absolute_child_positions_against_padding_box() {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = Node::new(NodeKind::View)
        .fragment(StyleFragment::new().with("width", 200).with("height", 200))
        .child(
            Node::new(NodeKind::View).fragment(
                StyleFragment::new()
                    .with("position", "absolute")
                    .with("left", 20)
                    .with("top", 30)
                    .with("width", 50)
                    .with("height", 40),
            ),
        )
        .child(
            Node::new(NodeKind::View)
                .fragment(StyleFragment::new().with("width", 60).with("height", 60)),
        );

    let tree = render(
        &root,
        Viewport {
            width: 375.0,
            height: 667.0,
        },
        &UnresolvedImages,
    );

    let floating = tree.root.children.first().expect("absolute child");
    assert!((floating.geometry.rect.x - 20.0).abs() < 0.001);
    assert!((floating.geometry.rect.y - 30.0).abs() < 0.001);

    // The in-flow sibling lays out as if the absolute child were not there.
    let flowing = tree.root.children.get(1).expect("in-flow child");
    assert!((flowing.geometry.rect.y - 0.0).abs() < 0.001);
}

/// `right`/`bottom` offsets anchor to the far edges, and opposing offsets
/// with no declared size solve the size.
#[test]
fn far_edge_and_opposing_offsets() {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = Node::new(NodeKind::View)
        .fragment(StyleFragment::new().with("width", 200).with("height", 200))
        .child(
            Node::new(NodeKind::View).fragment(
                StyleFragment::new()
                    .with("position", "absolute")
                    .with("right", 10)
                    .with("bottom", 5)
                    .with("width", 50)
                    .with("height", 40),
            ),
        )
        .child(
            Node::new(NodeKind::View).fragment(
                StyleFragment::new()
                    .with("position", "absolute")
                    .with("left", 15)
                    .with("right", 25)
                    .with("top", 0)
                    .with("height", 10),
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

    let anchored = tree.root.children.first().expect("far-edge child");
    assert!((anchored.geometry.rect.x - 140.0).abs() < 0.001);
    assert!((anchored.geometry.rect.y - 155.0).abs() < 0.001);

    let stretched = tree.root.children.get(1).expect("opposing-offsets child");
    assert!((stretched.geometry.rect.x - 15.0).abs() < 0.001);
    assert!((stretched.geometry.rect.width - 160.0).abs() < 0.001, "200 - 15 - 25");
}

/// `display: none` removes a subtree from flow without disturbing sibling
/// order in the output tree.
#[test]
fn display_none_is_skipped_but_present() {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = Node::new(NodeKind::View)
        .fragment(StyleFragment::new().with("width", 100).with("height", 100))
        .child(
            Node::new(NodeKind::View).fragment(
                StyleFragment::new()
                    .with("display", "none")
                    .with("width", 50)
                    .with("height", 50),
            ),
        )
        .child(
            Node::new(NodeKind::View)
                .fragment(StyleFragment::new().with("width", 30).with("height", 30)),
        );

    let tree = render(
        &root,
        Viewport {
            width: 375.0,
            height: 667.0,
        },
        &UnresolvedImages,
    );

    assert_eq!(tree.root.children.len(), 2, "hidden child keeps its slot");
    let hidden = tree.root.children.first().expect("hidden child");
    assert!((hidden.geometry.rect.width - 0.0).abs() < 0.001);

    // The visible sibling starts at the top: the hidden child occupies no
    // main-axis space.
    let visible = tree.root.children.get(1).expect("visible child");
    assert!((visible.geometry.rect.y - 0.0).abs() < 0.001);
}
