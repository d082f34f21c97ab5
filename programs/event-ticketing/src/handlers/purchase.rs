//! Ticket purchase instruction handler
//!
//! A purchase is only valid as part of a transaction whose previous
//! instruction is a System Program transfer paying the ticket price to the
//! event account. The runtime commits the payment together with the ticket
//! transfer, or neither.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{get_stack_height, TRANSACTION_LEVEL_STACK_HEIGHT};
use anchor_lang::solana_program::sysvar::instructions as sysvar_instructions;
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::token::{self, Token, TokenAccount, TransferChecked};

use crate::constants::{EVENT_SEED, TICKET_DECIMALS};
use crate::error::TicketingError;
use crate::events::TicketPurchased;
use crate::state::{Event, Payment};

#[derive(Accounts)]
pub struct PurchaseAccountConstraints<'info> {
    pub buyer: Signer<'info>,
    #[account(mut, seeds = [EVENT_SEED, event.creator.as_ref()], bump = event.bump)]
    pub event: Account<'info, Event>,
    /// CHECK: must equal `event.ticket_mint`, checked once the event is known to be issued
    pub ticket_mint: UncheckedAccount<'info>,
    /// CHECK: must be the event's associated token account, checked in the handler
    #[account(mut)]
    pub vault: UncheckedAccount<'info>,
    /// CHECK: buyer's token account for the ticket mint, checked in the handler
    #[account(mut)]
    pub buyer_tickets: UncheckedAccount<'info>,
    /// CHECK: instructions sysvar
    #[account(address = sysvar_instructions::ID)]
    pub instructions: UncheckedAccount<'info>,
    pub token_program: Program<'info, Token>,
}

pub fn purchase(context: Context<PurchaseAccountConstraints>) -> Result<()> {
    // Only as a top-level instruction, never through CPI.
    require_eq!(
        get_stack_height(),
        TRANSACTION_LEVEL_STACK_HEIGHT,
        TicketingError::PurchaseNotTopLevel
    );

    let buyer = context.accounts.buyer.key();
    let event_key = context.accounts.event.key();

    context.accounts.event.check_on_sale()?;
    let payment = Payment::load_preceding(&context.accounts.instructions)?;
    check_purchase(
        &context.accounts.event,
        &event_key,
        &payment,
        &context.accounts.ticket_mint.key(),
        &context.accounts.vault.key(),
    )?;
    let ticket_mint = context.accounts.event.ticket_mint;
    verify_buyer_tickets(&context.accounts.buyer_tickets, &buyer, &ticket_mint)?;

    let tickets_sold = context.accounts.event.purchase(&payment, &event_key)?;

    let event = &context.accounts.event;
    let bump = [event.bump];
    let event_seeds: &[&[u8]] = &[EVENT_SEED, event.creator.as_ref(), &bump];
    token::transfer_checked(
        CpiContext::new_with_signer(
            context.accounts.token_program.to_account_info(),
            TransferChecked {
                from: context.accounts.vault.to_account_info(),
                mint: context.accounts.ticket_mint.to_account_info(),
                to: context.accounts.buyer_tickets.to_account_info(),
                authority: event.to_account_info(),
            },
            &[event_seeds],
        ),
        1,
        TICKET_DECIMALS,
    )?;

    msg!(
        "Ticket {}/{} sold to {}",
        tickets_sold,
        event.total_tickets,
        buyer
    );
    emit!(TicketPurchased {
        event: event_key,
        buyer,
        amount: payment.amount,
        tickets_sold,
        tickets_remaining: event.tickets_remaining(),
    });

    Ok(())
}

/// Record checks first, then the payment, then the mint and vault accounts.
fn check_purchase(
    event: &Event,
    event_key: &Pubkey,
    payment: &Payment,
    ticket_mint: &Pubkey,
    vault: &Pubkey,
) -> Result<()> {
    event.check_on_sale()?;
    event.check_payment(payment, event_key)?;
    require_keys_eq!(*ticket_mint, event.ticket_mint, TicketingError::InvalidTicketMint);
    require_keys_eq!(
        *vault,
        get_associated_token_address(event_key, &event.ticket_mint),
        TicketingError::InvalidVault
    );
    Ok(())
}

/// The ticket must land in an initialized token account of the ticket mint
/// that belongs to the buyer.
fn verify_buyer_tickets(account: &AccountInfo, buyer: &Pubkey, ticket_mint: &Pubkey) -> Result<()> {
    require_keys_eq!(*account.owner, token::ID, TicketingError::InvalidTicketAccount);
    let data = account.try_borrow_data()?;
    let tickets = TokenAccount::try_deserialize(&mut &data[..])
        .map_err(|_| error!(TicketingError::InvalidTicketAccount))?;
    require_keys_eq!(tickets.mint, *ticket_mint, TicketingError::InvalidTicketAccount);
    require_keys_eq!(tickets.owner, *buyer, TicketingError::InvalidTicketAccount);
    Ok(())
}
