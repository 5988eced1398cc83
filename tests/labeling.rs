mod common;

use common::synthetic_raster::{dense_view, paint_block, rle_view};
use pixel_matrix::view::{RasterView, View};
use pixel_matrix::{label_components, BACKGROUND, MIN_COMPONENT_LABEL};

#[test]
fn centered_block_yields_single_component() {
    // 5x5 page, 3x3 foreground block centered at rows/cols 1..=3.
    let view = rle_view(5, 5, &[]);
    paint_block(&view, 1, 1, 3, 3);

    let components = label_components(&view).expect("labeling succeeds");
    assert_eq!(components.len(), 1, "one block must yield one component");
    let rect = components[0].rect();
    assert_eq!(rect.ul(), (1, 1));
    assert_eq!(rect.lr(), (3, 3));
    assert_eq!(components[0].pixel_count(), 9);
}

#[test]
fn disjoint_pixels_yield_two_components() {
    let view = rle_view(5, 5, &[(0, 0), (4, 4)]);

    let components = label_components(&view).expect("labeling succeeds");
    assert_eq!(components.len(), 2, "isolated pixels must stay separate");
    for cc in &components {
        let rect = cc.rect();
        assert_eq!(rect.ul(), rect.lr(), "each component is a single pixel");
        assert_eq!(cc.pixel_count(), 1);
    }
    assert_eq!(components[0].rect().ul(), (0, 0));
    assert_eq!(components[1].rect().ul(), (4, 4));
}

#[test]
fn diagonal_neighbors_merge_into_one_component() {
    let view = rle_view(3, 3, &[(0, 0), (1, 1)]);

    let components = label_components(&view).expect("labeling succeeds");
    assert_eq!(
        components.len(),
        1,
        "8-connectivity must merge diagonal neighbors"
    );
    let rect = components[0].rect();
    assert_eq!(rect.ul(), (0, 0));
    assert_eq!(rect.lr(), (1, 1));
    assert_eq!(components[0].pixel_count(), 2);
}

#[test]
fn labeling_agrees_across_backends() {
    let pixels: &[(usize, usize)] = &[
        (0, 0),
        (1, 1),
        (2, 2),
        (0, 6),
        (1, 6),
        (5, 3),
        (5, 4),
        (6, 4),
    ];
    let rle = rle_view(8, 8, pixels);
    let dense = dense_view(8, 8, pixels);

    let rle_components = label_components(&rle).expect("rle labeling succeeds");
    let dense_components = label_components(&dense).expect("dense labeling succeeds");

    assert_eq!(rle_components.len(), dense_components.len());
    for (a, b) in rle_components.iter().zip(&dense_components) {
        assert_eq!(a.label(), b.label(), "labels must match across backends");
        assert_eq!(a.rect(), b.rect(), "rects must match across backends");
        assert_eq!(a.pixel_count(), b.pixel_count());
    }
    for row in 0..8 {
        for col in 0..8 {
            assert_eq!(
                rle.get(row, col),
                dense.get(row, col),
                "labeled rasters must agree at ({row}, {col})"
            );
        }
    }
}

#[test]
fn relabeling_is_idempotent() {
    let view = rle_view(6, 6, &[(0, 0), (1, 1), (4, 4), (4, 5)]);

    let first = label_components(&view).expect("first labeling succeeds");
    let second = label_components(&view).expect("second labeling succeeds");

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.label(), b.label());
        assert_eq!(a.rect(), b.rect());
    }
}

#[test]
fn component_views_filter_foreign_labels() {
    // Two components one background column apart; their bounding
    // rectangles are disjoint here, so stretch the first component's view
    // over the second and check the filter.
    let view = rle_view(3, 5, &[(0, 0), (1, 0), (0, 3), (1, 3), (2, 4)]);

    let components = label_components(&view).expect("labeling succeeds");
    assert_eq!(components.len(), 2);
    let first = &components[0];
    let second = &components[1];

    // Widen a view to the whole page, filtered by the first label.
    let wide = view
        .sub_view(0, 0, 3, 5)
        .expect("page-sized rectangle is valid");
    let filtered = pixel_matrix::ConnectedComponent::new(wide, first.label());
    for row in 0..3 {
        for col in 0..5 {
            let value = filtered.get(row, col);
            assert!(
                value == BACKGROUND || value == first.label(),
                "filtered view leaked foreign label {value} at ({row}, {col})"
            );
        }
    }
    // Every second-component pixel reads as background through the filter.
    let second_rect = second.rect();
    for row in second_rect.ul_y..=second_rect.lr_y {
        for col in second_rect.ul_x..=second_rect.lr_x {
            assert_eq!(
                filtered.get(row, col),
                BACKGROUND,
                "foreign component must be invisible"
            );
        }
    }

    // Writes through the filter must not touch the other component.
    filtered.set(0, 3, BACKGROUND);
    assert_eq!(view.get(0, 3), second.label(), "foreign write must be ignored");
    filtered.set(0, 0, BACKGROUND);
    assert_eq!(view.get(0, 0), BACKGROUND, "own-label write must land");
}

#[test]
fn labels_start_at_the_reserved_minimum() {
    let view = dense_view(2, 2, &[(0, 0)]);
    let components = label_components(&view).expect("labeling succeeds");
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].label(), MIN_COMPONENT_LABEL);
}

#[test]
fn labeling_respects_view_rectangle() {
    // Foreground outside the labeled sub-view must stay untouched.
    let view = rle_view(6, 6, &[(0, 0), (3, 3), (3, 4)]);
    let store = view.store_handle();
    let sub = View::new(&store, 2, 2, 4, 4).expect("sub-view fits");

    let components = label_components(&sub).expect("labeling succeeds");
    assert_eq!(components.len(), 1);
    let rect = components[0].rect();
    assert_eq!(rect.ul(), (3, 3));
    assert_eq!(rect.lr(), (3, 4));
    assert_eq!(
        view.get(0, 0),
        pixel_matrix::UNLABELED_FOREGROUND,
        "pixels outside the labeled rectangle keep their value"
    );
}
