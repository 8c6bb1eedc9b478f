use outfitkit_composer::{can_add, OutfitItem};
use outfitkit_core::{Category, QuotaConfig, QuotaRule, WardrobeItem};

fn wardrobe(id: &str, category: Category) -> WardrobeItem {
    WardrobeItem::new(id, category, "Acme", "Model")
}

fn placed(id: &str, category: Category, order: usize) -> OutfitItem {
    OutfitItem::new(wardrobe(id, category), order)
}

#[test]
fn empty_composition_allows_any_category() {
    let config = QuotaConfig::standard();
    for category in Category::ALL {
        let decision = can_add(&wardrobe("w", category), &[], &config);
        assert!(decision.allowed, "{category} should be allowed when empty");
        assert!(decision.reason.is_none());
    }
}

#[test]
fn unlimited_category_never_fills() {
    let config = QuotaConfig::standard();
    let current: Vec<OutfitItem> = (0..20)
        .map(|i| placed(&format!("acc-{i}"), Category::Accessories, i))
        .collect();

    let decision = can_add(&wardrobe("acc-new", Category::Accessories), &current, &config);
    assert!(decision.allowed);
    assert!(decision.replace_candidate.is_none());
}

#[test]
fn full_single_slot_category_offers_replace() {
    let config = QuotaConfig::standard();
    let occupant = placed("shoe-a", Category::Shoes, 0);
    let occupant_id = occupant.id;

    let decision = can_add(&wardrobe("shoe-b", Category::Shoes), &[occupant], &config);
    assert!(!decision.allowed);
    assert_eq!(decision.replace_candidate, Some(occupant_id));
    assert_eq!(
        decision.reason.as_deref(),
        Some("Already have a pair of shoes in this outfit")
    );
}

#[test]
fn full_multi_slot_category_rejects_without_replace() {
    let config = QuotaConfig::standard();
    let current = vec![
        placed("top-a", Category::Tops, 0),
        placed("top-b", Category::Tops, 1),
    ];

    let decision = can_add(&wardrobe("top-c", Category::Tops), &current, &config);
    assert!(!decision.allowed);
    assert!(decision.replace_candidate.is_none());
    assert!(decision.reason.is_some());
}

#[test]
fn partially_filled_multi_slot_category_allows() {
    let config = QuotaConfig::standard();
    let current = vec![placed("top-a", Category::Tops, 0)];

    let decision = can_add(&wardrobe("top-b", Category::Tops), &current, &config);
    assert!(decision.allowed);
}

#[test]
fn custom_quota_table_is_honored() {
    let config = QuotaConfig::from_rules([QuotaRule::new(Category::Bags, Some(3))]);
    let current = vec![
        placed("bag-a", Category::Bags, 0),
        placed("bag-b", Category::Bags, 1),
    ];

    assert!(can_add(&wardrobe("bag-c", Category::Bags), &current, &config).allowed);

    let mut full = current;
    full.push(placed("bag-c", Category::Bags, 2));
    let decision = can_add(&wardrobe("bag-d", Category::Bags), &full, &config);
    assert!(!decision.allowed);
    // Three slots, so no single-slot replace path.
    assert!(decision.replace_candidate.is_none());
}
