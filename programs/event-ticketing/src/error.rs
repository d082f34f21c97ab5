use anchor_lang::prelude::*;

#[error_code]
pub enum TicketingError {
    #[msg("Only the event creator can perform this action")]
    NotAuthorized,
    #[msg("Tickets have already been issued")]
    AlreadyIssued,
    #[msg("Tickets have not been issued yet")]
    NotYetIssued,
    #[msg("All tickets have been sold")]
    SupplyExhausted,
    #[msg("Payment amount does not match the ticket price")]
    PaymentMismatch,
    #[msg("Payment must be sent to the event account")]
    PaymentMisdirected,
    #[msg("Purchase must be preceded by a system transfer in the same transaction")]
    PaymentMissing,
    #[msg("Purchase must be a top-level instruction of this program")]
    PurchaseNotTopLevel,
    #[msg("Event has already been initialized")]
    AlreadyInitialized,
    #[msg("Ticket price must be greater than zero")]
    InvalidTicketPrice,
    #[msg("Ticket supply must be greater than zero")]
    InvalidTicketSupply,
    #[msg("Event name is too long")]
    EventNameTooLong,
    #[msg("Ticket mint address is invalid")]
    InvalidTicketMint,
    #[msg("Vault is not the event's ticket account")]
    InvalidVault,
    #[msg("Buyer ticket account must hold the ticket mint and belong to the buyer")]
    InvalidTicketAccount,
}
