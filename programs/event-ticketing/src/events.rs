use anchor_lang::prelude::*;

#[event]
pub struct EventInitialized {
    pub event: Pubkey,
    pub creator: Pubkey,
    pub event_name: String,
    pub ticket_price: u64,
    pub total_tickets: u64,
}

#[event]
pub struct TicketsIssued {
    pub event: Pubkey,
    pub ticket_mint: Pubkey,
    pub total_tickets: u64,
}

#[event]
pub struct TicketPurchased {
    pub event: Pubkey,
    pub buyer: Pubkey,
    pub amount: u64,
    pub tickets_sold: u64,
    pub tickets_remaining: u64,
}
