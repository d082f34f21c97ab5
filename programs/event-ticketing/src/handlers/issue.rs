//! Ticket issuance instruction handler

use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::metadata::mpl_token_metadata::types::DataV2;
use anchor_spl::metadata::{self, CreateMetadataAccountsV3, Metadata};
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::constants::{EVENT_SEED, METADATA_SEED, TICKET_DECIMALS, TICKET_MINT_SEED, TICKET_SYMBOL};
use crate::events::TicketsIssued;
use crate::state::Event;

#[derive(Accounts)]
pub struct IssueAccountConstraints<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,
    #[account(mut, seeds = [EVENT_SEED, event.creator.as_ref()], bump = event.bump)]
    pub event: Account<'info, Event>,
    /// Seeds: [b"ticket_mint", event.key().as_ref()]
    #[account(
        init_if_needed,
        payer = creator,
        seeds = [TICKET_MINT_SEED, event.key().as_ref()],
        bump,
        mint::decimals = TICKET_DECIMALS,
        mint::authority = event,
        mint::freeze_authority = event,
    )]
    pub ticket_mint: Account<'info, Mint>,
    /// CHECK: created by the token metadata program, address pinned by seeds
    #[account(
        mut,
        seeds = [METADATA_SEED, token_metadata_program.key().as_ref(), ticket_mint.key().as_ref()],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub ticket_metadata: UncheckedAccount<'info>,
    /// The event's holding account for unsold tickets
    #[account(
        init_if_needed,
        payer = creator,
        associated_token::mint = ticket_mint,
        associated_token::authority = event,
    )]
    pub vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub token_metadata_program: Program<'info, Metadata>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn issue(context: Context<IssueAccountConstraints>) -> Result<Pubkey> {
    let creator = context.accounts.creator.key();
    let ticket_mint = context.accounts.ticket_mint.key();
    let event_key = context.accounts.event.key();

    // Record before minting so a second call can never mint again.
    context.accounts.event.issue(&creator, ticket_mint)?;

    let event = &context.accounts.event;
    let bump = [event.bump];
    let event_seeds: &[&[u8]] = &[EVENT_SEED, event.creator.as_ref(), &bump];

    // Name the ticket token after the event
    metadata::create_metadata_accounts_v3(
        CpiContext::new_with_signer(
            context.accounts.token_metadata_program.to_account_info(),
            CreateMetadataAccountsV3 {
                metadata: context.accounts.ticket_metadata.to_account_info(),
                mint: context.accounts.ticket_mint.to_account_info(),
                mint_authority: event.to_account_info(),
                payer: context.accounts.creator.to_account_info(),
                update_authority: event.to_account_info(),
                system_program: context.accounts.system_program.to_account_info(),
                rent: context.accounts.rent.to_account_info(),
            },
            &[event_seeds],
        ),
        DataV2 {
            name: event.event_name.clone(),
            symbol: TICKET_SYMBOL.to_string(),
            uri: String::new(),
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        },
        false,
        true,
        None,
    )?;

    token::mint_to(
        CpiContext::new_with_signer(
            context.accounts.token_program.to_account_info(),
            MintTo {
                mint: context.accounts.ticket_mint.to_account_info(),
                to: context.accounts.vault.to_account_info(),
                authority: event.to_account_info(),
            },
            &[event_seeds],
        ),
        event.total_tickets,
    )?;

    msg!(
        "Issued {} '{}' tickets as mint {}",
        event.total_tickets,
        event.event_name,
        ticket_mint
    );
    emit!(TicketsIssued {
        event: event_key,
        ticket_mint,
        total_tickets: event.total_tickets,
    });

    Ok(ticket_mint)
}
