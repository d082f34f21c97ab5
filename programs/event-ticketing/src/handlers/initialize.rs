//! Event initialization instruction handler

use anchor_lang::prelude::*;

use crate::constants::EVENT_SEED;
use crate::events::EventInitialized;
use crate::state::Event;

#[derive(Accounts)]
pub struct InitializeAccountConstraints<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,
    #[account(
        init,
        payer = creator,
        space = Event::DISCRIMINATOR.len() + Event::INIT_SPACE,
        seeds = [EVENT_SEED, creator.key().as_ref()],
        bump
    )]
    pub event: Account<'info, Event>,
    pub system_program: Program<'info, System>,
}

pub fn initialize(
    context: Context<InitializeAccountConstraints>,
    event_name: String,
    ticket_price: u64,
    total_tickets: u64,
) -> Result<()> {
    let creator = context.accounts.creator.key();
    let event_key = context.accounts.event.key();
    let event = &mut context.accounts.event;

    event.configure(
        creator,
        event_name,
        ticket_price,
        total_tickets,
        context.bumps.event,
    )?;

    msg!(
        "Event '{}' initialized: {} tickets at {} lamports",
        event.event_name,
        event.total_tickets,
        event.ticket_price
    );
    emit!(EventInitialized {
        event: event_key,
        creator,
        event_name: event.event_name.clone(),
        ticket_price: event.ticket_price,
        total_tickets: event.total_tickets,
    });

    Ok(())
}
