use trellis::{
    Fill, ImageDimensionSource, Node, NodeKind, StyleFragment, UnresolvedImages, Viewport, render,
};

/// A source that knows one decoded image.
struct OneDecodedImage;

impl ImageDimensionSource for OneDecodedImage {
    fn natural_size(&self, uri: &str) -> Option<(f32, f32)> {
        (uri == "defaultSource.jpg").then_some((120.0, 60.0))
    }
}

fn image_node() -> Node {
    Node::new(NodeKind::View)
        .fragment(StyleFragment::new().with("backgroundImage", "defaultSource.jpg"))
}

/// Before the image decodes, layout proceeds with declared sizes only — an
/// unsized image node resolves to zero and nothing blocks.
#[test]
fn unresolved_image_uses_declared_sizes_only() {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = Node::new(NodeKind::View)
        .fragment(StyleFragment::new().with("width", 375).with("height", 667))
        .child(image_node());

    let tree = render(
        &root,
        Viewport {
            width: 375.0,
            height: 667.0,
        },
        &UnresolvedImages,
    );
    let image = tree.root.children.first().expect("image child");
    assert!((image.geometry.rect.height - 0.0).abs() < 0.001);
    let source = match &image.paint.fill {
        Fill::Image(source) => Some(source),
        _ => None,
    }
    .expect("image fill");
    assert_eq!(source.natural_size, None, "not decoded yet");
}

/// Re-rendering after the decode is the re-layout mechanism: natural
/// dimensions now size the unsized node and annotate the fill.
#[test]
fn rerender_after_decode_picks_up_natural_size() {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = Node::new(NodeKind::View)
        .fragment(StyleFragment::new().with("width", 375).with("height", 667))
        .child(image_node());
    let viewport = Viewport {
        width: 375.0,
        height: 667.0,
    };

    let tree = render(&root, viewport, &OneDecodedImage);
    let image = tree.root.children.first().expect("image child");
    assert!((image.geometry.rect.width - 120.0).abs() < 0.001);
    assert!((image.geometry.rect.height - 60.0).abs() < 0.001);
    let source = match &image.paint.fill {
        Fill::Image(source) => Some(source),
        _ => None,
    }
    .expect("image fill");
    assert_eq!(source.natural_size, Some((120.0, 60.0)));
}

/// Declared dimensions always win over the natural size.
#[test]
fn declared_size_wins_over_natural_size() {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = Node::new(NodeKind::View)
        .fragment(StyleFragment::new().with("width", 375).with("height", 667))
        .child(
            image_node().fragment(StyleFragment::new().with("width", 160).with("height", 80)),
        );

    let tree = render(
        &root,
        Viewport {
            width: 375.0,
            height: 667.0,
        },
        &OneDecodedImage,
    );
    let image = tree.root.children.first().expect("image child");
    assert!((image.geometry.rect.width - 160.0).abs() < 0.001);
    assert!((image.geometry.rect.height - 80.0).abs() < 0.001);
}
