#![allow(unexpected_cfgs)]
// See https://solana.stackexchange.com/questions/17777/unexpected-cfg-condition-value-solana)

pub mod constants;
pub mod error;
pub mod events;
pub mod handlers;
pub mod state;

use anchor_lang::prelude::*;
use handlers::*;

declare_id!("75TruF4eSf5NCQFZP8uqFzjBBzLMvj135eCKeomNDkFB");

#[program]
pub mod event_ticketing {
    use super::*;

    /// Create the event record. The signer becomes the event creator.
    pub fn initialize(
        context: Context<InitializeAccountConstraints>,
        event_name: String,
        ticket_price: u64,
        total_tickets: u64,
    ) -> Result<()> {
        handlers::initialize::initialize(context, event_name, ticket_price, total_tickets)
    }

    /// Mint the full ticket supply into the event's vault. Creator only, once.
    pub fn issue(context: Context<IssueAccountConstraints>) -> Result<Pubkey> {
        handlers::issue::issue(context)
    }

    /// Buy one ticket. Must directly follow a transfer of the ticket price to
    /// the event account in the same transaction.
    pub fn purchase(context: Context<PurchaseAccountConstraints>) -> Result<()> {
        handlers::purchase::purchase(context)
    }
}
