//! End-to-end composition scenarios exercising the orchestrator together
//! with the drag controller and crop session.

use outfitkit_composer::{
    AddOutcome, Composer, CropHandle, CropSession, DragController, UndoAction,
};
use outfitkit_core::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use outfitkit_core::{Category, QuotaConfig, WardrobeItem};

fn wardrobe(id: &str, category: Category) -> WardrobeItem {
    WardrobeItem::new(id, category, "Acme", "Model")
}

#[test]
fn single_shoe_add() {
    let mut composer = Composer::new(QuotaConfig::standard());
    let outcome = composer
        .add_item(wardrobe("shoe-a", Category::Shoes))
        .unwrap();
    assert!(matches!(outcome, AddOutcome::Added { .. }));
    assert_eq!(composer.item_count(), 1);
}

#[test]
fn confirmed_replace_swaps_the_single_slot() {
    let mut composer = Composer::new(QuotaConfig::standard());
    composer
        .add_item(wardrobe("shoe-a", Category::Shoes))
        .unwrap();

    // Adding a second shoe surfaces the old/new pair for confirmation.
    let outcome = composer
        .add_item(wardrobe("shoe-b", Category::Shoes))
        .unwrap();
    let AddOutcome::ReplaceRequested {
        old_item,
        candidate,
    } = outcome
    else {
        panic!("expected a replace request");
    };
    assert_eq!(old_item.wardrobe_id(), "shoe-a");
    assert_eq!(candidate.id, "shoe-b");
    assert_eq!(composer.item_count(), 1, "list untouched while pending");

    composer.confirm_replace().unwrap();

    let shoes: Vec<_> = composer
        .items()
        .iter()
        .filter(|item| item.category() == Category::Shoes)
        .collect();
    assert_eq!(shoes.len(), 1);
    assert_eq!(shoes[0].wardrobe_id(), "shoe-b");

    // One Replace entry whose previous snapshot still holds shoe A.
    assert_eq!(composer.undo(), Some(UndoAction::Replace));
    assert_eq!(composer.item_count(), 1);
    assert_eq!(composer.items()[0].wardrobe_id(), "shoe-a");
}

#[test]
fn unlimited_accessories_never_replace() {
    let mut composer = Composer::new(QuotaConfig::standard());
    for i in 0..8 {
        let outcome = composer
            .add_item(wardrobe(&format!("acc-{i}"), Category::Accessories))
            .unwrap();
        assert!(matches!(outcome, AddOutcome::Added { .. }));
    }
    assert_eq!(composer.item_count(), 8);
}

#[test]
fn drag_commits_exactly_one_position_write() {
    let mut composer = Composer::new(QuotaConfig::standard());
    let AddOutcome::Added { item_id } = composer
        .add_item(wardrobe("top-a", Category::Tops))
        .unwrap()
    else {
        panic!("expected Added");
    };
    composer.update_position(item_id, 0.2, 0.3).unwrap();

    let mut ctrl = DragController::new();
    let item = composer.get_item(item_id).unwrap().clone();
    assert!(ctrl.pointer_down(&item, 50.0, 80.0));

    // Intermediate moves touch only the controller, never the list.
    ctrl.pointer_move(90.0, 120.0);
    ctrl.pointer_move(50.0 + 0.3 * CANVAS_WIDTH, 80.0 + 0.3 * CANVAS_HEIGHT);
    let mid = composer.get_item(item_id).unwrap();
    assert_eq!((mid.position_x, mid.position_y), (0.2, 0.3));

    let end = ctrl.pointer_up().unwrap();
    composer.apply_drag_end(end).unwrap();

    let after = composer.get_item(item_id).unwrap();
    assert!((after.position_x - 0.5).abs() < 1e-9);
    assert!((after.position_y - 0.6).abs() < 1e-9);
    // The drop keeps the item on top until the next auto-arrange.
    let top_z = composer.items().iter().map(|i| i.z_index).max().unwrap();
    assert_eq!(after.z_index, top_z);
}

#[test]
fn crop_resize_below_minimum_keeps_last_valid_width() {
    let mut session = CropSession::new(None);
    session.begin_drag(CropHandle::SouthEast);
    // Shrink to a valid 0.3 x 0.3 first (container is 300px square).
    session.drag_by_pixels(-210.0, -210.0, 300.0, 300.0);
    let valid = session.preview();
    assert!((valid.width - 0.3).abs() < 1e-9);

    // Attempting to cross the 10% floor leaves the rectangle unchanged.
    session.drag_by_pixels(-75.0, 0.0, 300.0, 300.0);
    assert_eq!(session.preview().width, valid.width);
    assert_eq!(session.finish(), valid);
}

#[test]
fn confirmed_crop_lands_on_the_item() {
    let mut composer = Composer::new(QuotaConfig::standard());
    let AddOutcome::Added { item_id } = composer
        .add_item(wardrobe("top-a", Category::Tops))
        .unwrap()
    else {
        panic!("expected Added");
    };

    let mut session = CropSession::new(composer.get_item(item_id).unwrap().crop_region);
    session.begin_drag(CropHandle::NorthWest);
    session.drag_by_pixels(60.0, 60.0, 300.0, 300.0);
    session.end_drag();

    let confirmed = session.finish();
    composer.apply_crop(item_id, confirmed).unwrap();
    assert_eq!(
        composer.get_item(item_id).unwrap().crop_region,
        Some(confirmed)
    );
}

#[test]
fn three_accessories_get_distinct_cascade_positions() {
    let mut composer = Composer::new(QuotaConfig::standard());
    for i in 0..3 {
        composer
            .add_item(wardrobe(&format!("acc-{i}"), Category::Accessories))
            .unwrap();
    }
    composer.reset_auto_arrange();

    let positions: Vec<(f64, f64)> = composer
        .items()
        .iter()
        .map(|item| (item.position_x, item.position_y))
        .collect();

    for (i, a) in positions.iter().enumerate() {
        for b in positions.iter().skip(i + 1) {
            assert_ne!(a, b, "accessories must not perfectly overlap");
        }
    }
}
