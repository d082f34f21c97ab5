//! Event account definition (sale controller record)

use anchor_lang::prelude::*;

use crate::constants::MAX_EVENT_NAME_LEN;
use crate::error::TicketingError;
use crate::state::Payment;

#[account]
#[derive(Default, Debug)]
pub struct Event {
    /// The identity allowed to issue tickets
    pub creator: Pubkey,
    /// Display name of the event
    pub event_name: String,
    /// Price of one ticket (in lamports)
    pub ticket_price: u64,
    /// Fixed ticket supply, minted once by `issue`
    pub total_tickets: u64,
    /// Number of tickets sold so far
    pub tickets_sold: u64,
    /// Issued ticket mint (default key until issued)
    pub ticket_mint: Pubkey,
    /// PDA bump
    pub bump: u8,
}

/// Lifecycle of an event, derived from the record's fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaleStatus {
    Uninitialized,
    Configured,
    OnSale,
    SoldOut,
}

impl Event {
    pub const INIT_SPACE: usize = 32 + 4 + MAX_EVENT_NAME_LEN + 8 + 8 + 8 + 32 + 1;

    pub fn status(&self) -> SaleStatus {
        if self.creator == Pubkey::default() {
            SaleStatus::Uninitialized
        } else if !self.is_issued() {
            SaleStatus::Configured
        } else if self.is_sold_out() {
            SaleStatus::SoldOut
        } else {
            SaleStatus::OnSale
        }
    }

    pub fn is_issued(&self) -> bool {
        self.ticket_mint != Pubkey::default()
    }

    pub fn is_sold_out(&self) -> bool {
        self.tickets_sold >= self.total_tickets
    }

    pub fn tickets_remaining(&self) -> u64 {
        self.total_tickets.saturating_sub(self.tickets_sold)
    }

    /// Set up a freshly created record. Only valid once per account.
    pub fn configure(
        &mut self,
        creator: Pubkey,
        event_name: String,
        ticket_price: u64,
        total_tickets: u64,
        bump: u8,
    ) -> Result<()> {
        require!(
            self.status() == SaleStatus::Uninitialized,
            TicketingError::AlreadyInitialized
        );
        require!(ticket_price > 0, TicketingError::InvalidTicketPrice);
        require!(total_tickets > 0, TicketingError::InvalidTicketSupply);
        require!(
            event_name.len() <= MAX_EVENT_NAME_LEN,
            TicketingError::EventNameTooLong
        );

        self.creator = creator;
        self.event_name = event_name;
        self.ticket_price = ticket_price;
        self.total_tickets = total_tickets;
        self.tickets_sold = 0;
        self.ticket_mint = Pubkey::default();
        self.bump = bump;
        Ok(())
    }

    /// Record the ticket mint. Succeeds at most once.
    pub fn issue(&mut self, caller: &Pubkey, ticket_mint: Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.creator, TicketingError::NotAuthorized);
        require!(!self.is_issued(), TicketingError::AlreadyIssued);
        require_keys_neq!(
            ticket_mint,
            Pubkey::default(),
            TicketingError::InvalidTicketMint
        );

        self.ticket_mint = ticket_mint;
        Ok(())
    }

    /// Supply and issuance preconditions of a purchase.
    pub fn check_on_sale(&self) -> Result<()> {
        require!(!self.is_sold_out(), TicketingError::SupplyExhausted);
        require!(self.is_issued(), TicketingError::NotYetIssued);
        Ok(())
    }

    /// The payment must be exactly the ticket price and go to `controller`.
    pub fn check_payment(&self, payment: &Payment, controller: &Pubkey) -> Result<()> {
        require!(
            payment.amount == self.ticket_price,
            TicketingError::PaymentMismatch
        );
        require_keys_eq!(
            payment.receiver,
            *controller,
            TicketingError::PaymentMisdirected
        );
        Ok(())
    }

    /// Sell one ticket against `payment`. Returns the new sold count.
    ///
    /// Nothing is mutated unless every check passes.
    pub fn purchase(&mut self, payment: &Payment, controller: &Pubkey) -> Result<u64> {
        self.check_on_sale()?;
        self.check_payment(payment, controller)?;

        self.tickets_sold = self
            .tickets_sold
            .checked_add(1)
            .ok_or(error!(TicketingError::SupplyExhausted))?;
        Ok(self.tickets_sold)
    }
}
