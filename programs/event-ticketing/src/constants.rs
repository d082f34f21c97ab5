use anchor_lang::prelude::*;

/// Seed for the event (sale controller) PDA.
#[constant]
pub const EVENT_SEED: &[u8] = b"event";

/// Seed for the ticket mint PDA.
#[constant]
pub const TICKET_MINT_SEED: &[u8] = b"ticket_mint";

/// Seed of token metadata accounts, owned by the token metadata program.
pub const METADATA_SEED: &[u8] = b"metadata";

/// Maximum length of an event name, in bytes. The name doubles as the ticket
/// token name, which token metadata caps at 32 bytes.
pub const MAX_EVENT_NAME_LEN: usize = 32;

/// Token symbol of every ticket mint.
#[constant]
pub const TICKET_SYMBOL: &str = "TICKET";

/// Tickets are indivisible.
#[constant]
pub const TICKET_DECIMALS: u8 = 0;

/// Bincode tag of `SystemInstruction::Transfer`.
pub const SYSTEM_TRANSFER_TAG: u32 = 2;

/// Tag (4 bytes) followed by the lamport amount (8 bytes).
pub const SYSTEM_TRANSFER_DATA_LEN: usize = 12;
