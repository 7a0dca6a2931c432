pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Lamports are the ledger's smallest unit; reports are written in SOL.
pub fn lamports_to_sol(lamports: i64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

pub fn unsigned_lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

pub(crate) fn balance_delta(pre: u64, post: u64) -> crate::Result<i64> {
    i64::try_from(i128::from(pre) - i128::from(post)).map_err(|e| {
        crate::errors::ErrorKind::InternalError(format!(
            "Balance change {} -> {} does not fit i64: {}",
            pre, post, e
        ))
        .into()
    })
}
