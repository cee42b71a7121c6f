use serde_json::Value;

use crate::models::{InventoryItem, InventoryListing, PriceVariant, ProductPrices};

/// Condition sort order used in price tables; unknown codes sort last
const CONDITION_ORDER: [&str; 5] = ["NM", "LP", "MP", "HP", "DMG"];

/// Finishes priced against the foil market price
const FOIL_FINISHES: [&str; 2] = ["FO", "EF"];

/// Formats a cent amount as dollars, `N/A` when missing
pub fn format_price(cents: Option<i64>) -> String {
    match cents {
        Some(cents) => format!("${:.2}", cents as f64 / 100.0),
        None => "N/A".to_string(),
    }
}

/// Pretty prints a response body with two-space indentation
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Market low for the exact language/condition/finish of an inventory item.
pub fn get_lowest_price(item: &InventoryItem) -> Option<i64> {
    let stats = item.market_stats.as_ref()?;
    let single = item.single()?;

    stats
        .variants
        .iter()
        .find(|v| {
            v.language_id == single.language_id
                && v.condition_id == single.condition_id
                && v.finish_id == single.finish_id
        })
        .and_then(|v| v.low_price)
}

pub fn format_inventory_summary(listing: &InventoryListing, with_stats: bool) -> String {
    let mut output = String::new();
    let rule_len = if with_stats { 64 } else { 55 };

    if with_stats {
        output.push_str(&format!(
            "{:<30} {:<10} {:>8} {:>4} {:>8}\n",
            "Name", "Set", "Price", "Qty", "Low"
        ));
    } else {
        output.push_str(&format!(
            "{:<30} {:<10} {:>8} {:>4}\n",
            "Name", "Set", "Price", "Qty"
        ));
    }
    output.push_str(&"-".repeat(rule_len));
    output.push('\n');

    for item in &listing.inventory {
        let single = item.single();
        let name: String = single
            .and_then(|s| s.name.as_deref())
            .unwrap_or("Unknown")
            .chars()
            .take(30)
            .collect();
        let set_code = single.and_then(|s| s.set.as_deref()).unwrap_or("???");
        let price = item.price_cents.unwrap_or(0) as f64 / 100.0;
        let quantity = item.quantity.unwrap_or(0);

        output.push_str(&format!("{name:<30} {set_code:<10} {price:>8.2} {quantity:>4}"));
        if with_stats {
            output.push_str(&format!(" {:>8}", format_price(get_lowest_price(item))));
        }
        output.push('\n');
    }

    output
}

fn condition_rank(condition: Option<&str>) -> usize {
    condition
        .and_then(|c| CONDITION_ORDER.iter().position(|o| *o == c))
        .unwrap_or(99)
}

/// Variants ordered by finish, then condition (NM first)
pub fn sort_variants(variants: &mut [PriceVariant]) {
    variants.sort_by(|a, b| {
        a.finish_id
            .cmp(&b.finish_id)
            .then_with(|| {
                condition_rank(a.condition_id.as_deref())
                    .cmp(&condition_rank(b.condition_id.as_deref()))
            })
    });
}

/// Price block for one product: Mana Pool low per variant next to the TCGplayer market price.
pub fn format_product_lowest_prices(product: &ProductPrices) -> String {
    let mut output = String::new();
    let rule = "-".repeat(75);

    output.push_str(&format!(
        "Product: {} ({})\n",
        product.name.as_deref().unwrap_or("Unknown"),
        product.set_code.as_deref().unwrap_or("???")
    ));
    output.push_str(&rule);
    output.push('\n');
    output.push_str(&format!(
        "{:<10} {:<10} {:<15} {:<15}\n",
        "Condition", "Finish", "Manapool Low", "TCG Market"
    ));
    output.push_str(&rule);
    output.push('\n');

    let mut variants = product.variants.clone();
    sort_variants(&mut variants);

    for variant in &variants {
        // Variants nobody is selling have no low price
        let Some(low) = variant.low_price.filter(|p| *p != 0) else {
            continue;
        };
        let condition = variant.condition_id.as_deref().unwrap_or("");
        let finish = variant.finish_id.as_deref().unwrap_or("");

        let tcg_price = if FOIL_FINISHES.contains(&finish) {
            product.price_market_foil
        } else {
            product.price_market
        };

        output.push_str(&format!(
            "{:<10} {:<10} {:<15} {:<15}\n",
            condition,
            finish,
            format_price(Some(low)),
            format_price(tcg_price)
        ));
    }
    output.push('\n');

    output
}

#[cfg(test)]
#[path = "formatters_tests.rs"]
mod tests;
