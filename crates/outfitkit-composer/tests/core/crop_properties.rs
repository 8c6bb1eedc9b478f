//! Property tests for the crop invariants: whatever sequence of handle
//! drags runs, the committed rectangle stays inside the image and above
//! the minimum size.

use proptest::prelude::*;

use outfitkit_composer::{CropHandle, CropRect, CropSession};

fn arb_handle() -> impl Strategy<Value = CropHandle> {
    prop_oneof![
        Just(CropHandle::Move),
        Just(CropHandle::NorthWest),
        Just(CropHandle::NorthEast),
        Just(CropHandle::SouthWest),
        Just(CropHandle::SouthEast),
    ]
}

proptest! {
    #[test]
    fn any_drag_sequence_keeps_the_rect_valid(
        gestures in prop::collection::vec(
            (arb_handle(), -400.0f64..400.0, -400.0f64..400.0),
            1..40,
        )
    ) {
        let mut session = CropSession::new(None);

        for (handle, dx, dy) in gestures {
            session.begin_drag(handle);
            session.drag_by_pixels(dx, dy, 320.0, 320.0);
            session.end_drag();
        }

        let committed = session.finish();
        prop_assert!(committed.is_valid());
        prop_assert!(committed.x >= 0.0);
        prop_assert!(committed.y >= 0.0);
        prop_assert!(committed.x + committed.width <= 1.0);
        prop_assert!(committed.y + committed.height <= 1.0);
        prop_assert!(committed.width >= 0.1);
        prop_assert!(committed.height >= 0.1);
    }

    #[test]
    fn single_handle_drag_never_invalidates(
        x in 0.0f64..0.5,
        y in 0.0f64..0.5,
        w in 0.1f64..0.5,
        h in 0.1f64..0.5,
        dx in -2.0f64..2.0,
        dy in -2.0f64..2.0,
        handle in arb_handle(),
    ) {
        let rect = CropRect::new(x, y, w, h);
        prop_assume!(rect.is_valid());

        let updated = rect.apply_handle_drag(handle, dx, dy);
        prop_assert!(updated.is_valid());
    }
}
