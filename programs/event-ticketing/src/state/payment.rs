//! Payment bundled with a purchase in the same transaction

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::sysvar::instructions::{
    load_current_index_checked, load_instruction_at_checked,
};
use anchor_lang::system_program;

use crate::constants::{SYSTEM_TRANSFER_DATA_LEN, SYSTEM_TRANSFER_TAG};
use crate::error::TicketingError;
use crate::instruction::Purchase;

/// A lamport transfer as asserted by a System Program instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payment {
    pub payer: Pubkey,
    pub receiver: Pubkey,
    pub amount: u64,
}

impl Payment {
    /// Decode a System Program `Transfer` instruction.
    pub fn from_instruction(instruction: &Instruction) -> Result<Self> {
        if instruction.program_id != system_program::ID {
            return err!(TicketingError::PaymentMissing);
        }
        let amount = match read_transfer_amount(&instruction.data) {
            Some(amount) => amount,
            None => return err!(TicketingError::PaymentMissing),
        };
        match instruction.accounts.as_slice() {
            [payer, receiver, ..] => Ok(Self {
                payer: payer.pubkey,
                receiver: receiver.pubkey,
                amount,
            }),
            _ => err!(TicketingError::PaymentMissing),
        }
    }

    /// Load the payment bundled with the executing purchase.
    ///
    /// The current top-level instruction must be this program's `purchase`,
    /// so a transfer can only ever pay for the one purchase that follows it.
    pub fn load_preceding(instructions: &AccountInfo) -> Result<Self> {
        let current = load_current_index_checked(instructions)?;
        let executing = load_instruction_at_checked(usize::from(current), instructions)?;
        require!(is_purchase(&executing), TicketingError::PurchaseNotTopLevel);

        let previous = match current.checked_sub(1) {
            Some(index) => index,
            None => return err!(TicketingError::PaymentMissing),
        };
        let instruction = load_instruction_at_checked(usize::from(previous), instructions)?;
        Self::from_instruction(&instruction)
    }
}

fn is_purchase(instruction: &Instruction) -> bool {
    instruction.program_id == crate::ID && instruction.data.starts_with(Purchase::DISCRIMINATOR)
}

fn read_transfer_amount(data: &[u8]) -> Option<u64> {
    if data.len() != SYSTEM_TRANSFER_DATA_LEN {
        return None;
    }
    let (tag, amount) = data.split_at(4);
    if u32::from_le_bytes(tag.try_into().ok()?) != SYSTEM_TRANSFER_TAG {
        return None;
    }
    Some(u64::from_le_bytes(amount.try_into().ok()?))
}
