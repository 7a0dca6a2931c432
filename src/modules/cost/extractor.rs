use super::{CostResult, TransactionRecord};
use crate::{errors, types};

/// Fee and net balance change of `account` in a finalized transaction.
///
/// `total_spent` is the raw balance delta, so it includes anything else the
/// account paid for in the same transaction (rent deposits for new accounts,
/// transfers) on top of the fee.
pub fn extract_cost(
    record: &TransactionRecord,
    account: &types::AccountId,
) -> crate::Result<CostResult> {
    let keys = record.account_keys.keys()?;
    let index = keys.iter().position(|key| key == account).ok_or_else(|| {
        errors::ErrorKind::AccountNotFound(format!(
            "{} is not among the {} accounts of the transaction",
            account,
            keys.len()
        ))
    })?;

    if record.pre_balances.len() != record.post_balances.len()
        || index >= record.pre_balances.len()
    {
        return Err(errors::ErrorKind::InternalError(format!(
            "Balance snapshots are not aligned with the account list: {} keys, {} pre, {} post",
            keys.len(),
            record.pre_balances.len(),
            record.post_balances.len()
        ))
        .into());
    }

    let cost = CostResult {
        fee: record.fee,
        total_spent: types::lamports::balance_delta(
            record.pre_balances[index],
            record.post_balances[index],
        )?,
    };
    tracing::info!(
        target: crate::LOGGER_MSG,
        "Account {} at index {}: fee {} lamports, spent {} lamports",
        account,
        index,
        cost.fee,
        cost.total_spent
    );
    Ok(cost)
}
