//! Property tests for selection validation and the percentage view.

use proptest::prelude::*;

use landcover_rust::api::{BoundingBox, Selection, SelectionError, SizeBounds};
use landcover_rust::tabs::percentage_bars;

proptest! {
    /// Any box whose sides and area fall inside the default bounds passes,
    /// regardless of where on the map it sits.
    #[test]
    fn in_bounds_selection_accepted(
        lat in -60.0f64..60.0,
        lon in -170.0f64..170.0,
        width_km in 1.0f64..22.0,
        height_km in 1.0f64..22.0,
        zoom in 6u8..=13,
    ) {
        let bbox = BoundingBox::from_center_km(lat, lon, width_km, height_km);
        let selection = Selection::new(bbox, zoom);
        prop_assert!(SizeBounds::default().validate(&selection).is_ok());
    }

    /// Sides under the minimum are always rejected as too small.
    #[test]
    fn undersized_selection_rejected(
        lat in -60.0f64..60.0,
        lon in -170.0f64..170.0,
        width_km in 0.01f64..0.45,
    ) {
        let bbox = BoundingBox::from_center_km(lat, lon, width_km, 5.0);
        let selection = Selection::new(bbox, 10);
        let err = SizeBounds::default().validate(&selection).unwrap_err();
        let too_small = matches!(&err, SelectionError::TooSmall { .. });
        prop_assert!(too_small, "unexpected error: {:?}", err);
    }

    /// Sides over the maximum are always rejected as too large.
    #[test]
    fn oversized_selection_rejected(
        lat in -60.0f64..60.0,
        lon in -170.0f64..170.0,
        width_km in 51.0f64..200.0,
    ) {
        let bbox = BoundingBox::from_center_km(lat, lon, width_km, 5.0);
        let selection = Selection::new(bbox, 10);
        let err = SizeBounds::default().validate(&selection).unwrap_err();
        let too_large = matches!(&err, SelectionError::TooLarge { .. });
        prop_assert!(too_large, "unexpected error: {:?}", err);
    }

    /// A zero-extent or inverted box never validates.
    #[test]
    fn degenerate_box_rejected(
        west in -170.0f64..170.0,
        south in -60.0f64..60.0,
        shrink in 0.0f64..0.5,
    ) {
        let bbox = BoundingBox::new(west, south, west - shrink, south + 0.1);
        let selection = Selection::new(bbox, 10);
        let err = SizeBounds::default().validate(&selection).unwrap_err();
        prop_assert_eq!(err, SelectionError::InvalidExtent);
    }

    /// Percentage bars keep the input total and never show sub-floor slivers.
    #[test]
    fn percentage_bars_preserve_order_and_floor(
        values in proptest::collection::btree_map("[A-Z][a-z]{2,8}", 0.0f64..100.0, 1..8),
    ) {
        let bars = percentage_bars(&values);
        for pair in bars.windows(2) {
            prop_assert!(pair[0].pct >= pair[1].pct);
        }
        for bar in &bars {
            prop_assert!(bar.pct >= 0.1);
        }
    }
}
