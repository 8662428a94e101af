//! Board actor: the single owner of the [`OrderStore`](crate::store::OrderStore).

mod actions;
pub mod error;
pub mod state;

pub use actions::*;
pub use error::*;
pub use state::KitchenBoard;

use crate::clients::BoardClient;
use crate::store::OrderStore;
use store_actor::StateActor;

/// Creates a new board actor around `store` and its client.
pub fn new(channel_capacity: usize, store: OrderStore) -> (StateActor<KitchenBoard>, BoardClient) {
    let (actor, generic_client) = StateActor::new(channel_capacity, KitchenBoard::new(store));
    let client = BoardClient::new(generic_client);

    (actor, client)
}
