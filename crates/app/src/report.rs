//! Human-readable rendering of fulfillment outcomes (the stdout protocol).

use std::fmt::Write as _;

use inkshop_orders::{FulfillmentOutcome, FulfillmentReport};

/// Render an outcome as the block of lines written to stdout.
///
/// Success reports the total followed by the inventory dump and a blank
/// separator line; rejection is a single line.
pub fn render(outcome: &FulfillmentOutcome) -> String {
    match outcome {
        FulfillmentOutcome::Fulfilled(report) => render_fulfilled(report),
        FulfillmentOutcome::Rejected { order_id, .. } => {
            format!("Order {order_id} failed. Not enough stock.\n")
        }
    }
}

fn render_fulfilled(report: &FulfillmentReport) -> String {
    let mut block = String::new();
    let _ = writeln!(block, "Order {} Total: {}", report.order_id, report.total);
    let _ = writeln!(block, "Current Inventory:");
    for entry in &report.inventory {
        let _ = writeln!(
            block,
            "{} by {} - Stock: {}",
            entry.book.title(),
            entry.book.author(),
            entry.on_hand
        );
    }
    block.push('\n');
    block
}
