//! # Payments
//!
//! Checked currency movements between callers and the contract escrow.
//!
//! All transfers go through `try_transfer` so that a rejecting token or
//! recipient surfaces as [`Error::TransferFailed`] instead of an opaque host
//! trap. Returning that error from an entry point rolls back every write of
//! the invocation, including guard flags set before the transfer.

use soroban_sdk::{token, Address, Env};

use crate::Error;

/// Pull `amount` of `token` from `from` into the contract.
pub fn receive(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), Error> {
    let client = token::Client::new(env, token);
    match client.try_transfer(from, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

/// Pay `amount` of `token` from the contract to `to`.
pub fn send(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let client = token::Client::new(env, token);
    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}
