use soroban_sdk::{Address, Env};

use crate::error::Error;
use crate::events;
use crate::storage_types::*;
use crate::utils::extend_persistent;

/// Allocate the receipt ledger record bound to `campaign`.
pub fn initialize(
    env: &Env,
    id: InstanceId,
    template: Address,
    campaign: InstanceId,
) -> Result<(), Error> {
    let key = PersistentKey::Ledger(id);
    if env.storage().persistent().has(&key) {
        return Err(Error::AlreadyInitialized);
    }

    let ledger = ReceiptLedger {
        id,
        template,
        campaign,
        total_supply: 0,
    };
    env.storage().persistent().set(&key, &ledger);
    extend_persistent(env, &key);
    Ok(())
}

pub fn get_ledger(env: &Env, id: InstanceId) -> Result<ReceiptLedger, Error> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Ledger(id))
        .ok_or(Error::LedgerNotFound)
}

pub fn balance(env: &Env, id: InstanceId, holder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&PersistentKey::Receipt(id, holder.clone()))
        .unwrap_or(0)
}

/// Credit `amount` receipt units to `to`. Only the campaign owning the ledger may mint.
pub fn mint(
    env: &Env,
    id: InstanceId,
    minter: InstanceId,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let mut ledger = get_ledger(env, id)?;
    if ledger.campaign != minter {
        return Err(Error::NotOwningCampaign);
    }
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let new_balance = balance(env, id, to)
        .checked_add(amount)
        .ok_or(Error::ArithmeticError)?;
    ledger.total_supply = ledger
        .total_supply
        .checked_add(amount)
        .ok_or(Error::ArithmeticError)?;

    let balance_key = PersistentKey::Receipt(id, to.clone());
    env.storage().persistent().set(&balance_key, &new_balance);
    env.storage().persistent().set(&PersistentKey::Ledger(id), &ledger);
    extend_persistent(env, &balance_key);
    extend_persistent(env, &PersistentKey::Ledger(id));

    events::emit_receipt_minted(
        env,
        events::ReceiptMintedEvent {
            ledger: id,
            to: to.clone(),
            amount,
        },
    );
    Ok(())
}
