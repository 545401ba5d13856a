//! Static card listings shown in the storefront.

use cardshop_ui::CardListing;

fn listing(name: &str, card_id: u32, price_cents: u64, rarity: &str) -> CardListing {
    CardListing {
        name: name.to_string(),
        image: format!("https://images.ygoprodeck.com/images/cards/{}.jpg", card_id),
        price_cents,
        rarity: rarity.to_string(),
    }
}

/// Cards highlighted on the home page
pub fn featured() -> Vec<CardListing> {
    vec![
        listing("Dark Magician", 46986414, 1250, "Ultra Rare"),
        listing("Blue-Eyes White Dragon", 89631139, 2499, "Ultra Rare"),
        listing("Red-Eyes Black Dragon", 74677422, 899, "Super Rare"),
    ]
}

/// Every card in stock
pub fn all_cards() -> Vec<CardListing> {
    let mut cards = featured();
    cards.extend([
        listing("Exodia the Forbidden One", 33396948, 4500, "Ultra Rare"),
        listing("Summoned Skull", 70781052, 199, "Rare"),
        listing("Kuriboh", 40640057, 99, "Common"),
        listing("Mirror Force", 44095762, 349, "Super Rare"),
        listing("Pot of Greed", 55144522, 275, "Rare"),
    ]);
    cards
}
