//! Demo run of the kitchen board: opens the board with the demo orders, moves a few of
//! them along, and prints what the kitchen display would show.

use kitchen_board::config::BoardConfig;
use kitchen_board::lifecycle::{setup_tracing, KitchenSystem};
use kitchen_board::model::{OrderId, OrderPriority, OrderStatus};
use kitchen_board::store::SortMode;
use std::error::Error;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = match std::env::var_os("KITCHEN_BOARD_CONFIG") {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::default(),
    };

    info!("Opening kitchen board with demo orders");
    let system = KitchenSystem::demo(&config);
    let board = &system.board;

    let span = tracing::info_span!("service");
    async {
        board.set_status(OrderId::from("1"), OrderStatus::InProgress).await?;
        board.update_progress(OrderId::from("1"), 40).await?;
        board.set_priority(OrderId::from("2"), OrderPriority::High).await?;
        board.set_status(OrderId::from("2"), OrderStatus::Ready).await?;
        board.set_status(OrderId::from("3"), OrderStatus::Delivered).await?;

        if !board.set_status(OrderId::from("99"), OrderStatus::Ready).await? {
            warn!(order_id = "99", "No such order on the board");
        }
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(span)
    .await?;

    board.check_delays().await?;

    println!("Kitchen board, by priority:");
    for order in board.board_view(None, SortMode::Priority).await? {
        println!(
            "  #{} table {:>2}  {:<11} {:<6} {:>3}%  received {}  ({} dishes, {} guests)",
            order.order_number,
            order.table_number,
            order.status.label(),
            order.priority.label(),
            order.progress,
            order.time_received_label(),
            order.item_count(),
            order.guests,
        );
    }

    println!("Ready for pickup:");
    for order in board.filtered_orders(Some(OrderStatus::Ready)).await? {
        let ready = order.ready_time_label().unwrap_or_default();
        println!("  #{} table {} since {}", order.order_number, order.table_number, ready);
    }

    let notifications = board.notifications().await?;
    println!("Notifications ({}):", notifications.len());
    for notification in &notifications {
        println!("  {notification}");
    }
    if !notifications.is_empty() {
        board.dismiss_notification(0).await?;
        board.mark_notified(OrderId::from("2")).await?;
    }

    system.shutdown().await?;
    info!("Kitchen board closed");
    Ok(())
}
