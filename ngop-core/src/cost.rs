//! Monetary rollups over the project tree.
//!
//! Every surface derives its totals from these four functions; nothing is
//! cached. All arithmetic runs in `Decimal` so repeated multiplication never
//! drifts the way binary floats do.

use rust_decimal::Decimal;

use crate::domain::{Activity, CostItem, Project, QuantityUnitPair};

/// Total for one budget line: price per unit times the product of its
/// quantity factors.
///
/// The product uses the multiplicative identity: no pairs means the line is
/// worth its bare price, and a pair whose quantity is missing or not
/// positive contributes a factor of 1 instead of silently zeroing the line.
///
/// # Examples
///
/// ```
/// use ngop_core::{cost, CostItem, QuantityUnitPair};
/// use rust_decimal::Decimal;
///
/// let mut item = CostItem::new();
/// item.price_per_unit = Decimal::from(240);
/// item.quantity_units = [1, 3, 10]
///     .into_iter()
///     .map(|quantity| {
///         let mut pair = QuantityUnitPair::new();
///         pair.quantity = Decimal::from(quantity);
///         pair
///     })
///     .collect();
///
/// assert_eq!(cost::line_total(&item), Decimal::from(7200));
/// ```
pub fn line_total(item: &CostItem) -> Decimal {
    // Prices are declared non-negative; clamp instead of propagating junk.
    let price = item.price_per_unit.max(Decimal::ZERO);
    let quantity = item
        .quantity_units
        .iter()
        .fold(Decimal::ONE, |product, pair| {
            product * effective_quantity(pair)
        });
    price * quantity
}

/// Sum of `line_total` over an activity's cost items.
pub fn activity_total(activity: &Activity) -> Decimal {
    activity.cost_items.iter().map(line_total).sum()
}

/// Sum of `activity_total` over a project's activities.
pub fn project_total(project: &Project) -> Decimal {
    project.activities.iter().map(activity_total).sum()
}

/// Sum of `project_total` over the whole list.
pub fn grand_total(projects: &[Project]) -> Decimal {
    projects.iter().map(project_total).sum()
}

fn effective_quantity(pair: &QuantityUnitPair) -> Decimal {
    if pair.quantity <= Decimal::ZERO {
        Decimal::ONE
    } else {
        pair.quantity
    }
}
