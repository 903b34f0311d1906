//! Period and cumulative returns over an ordered price column.

use rust_decimal::Decimal;

/// Percentage change from the previous value: `v[i] / v[i-1] - 1`.
///
/// Row 0 has no predecessor and is `None`; so is any row whose predecessor is zero.
pub fn simple_returns(values: &[Decimal]) -> Vec<Option<Decimal>> {
    let mut out = Vec::with_capacity(values.len());
    if values.is_empty() {
        return out;
    }
    out.push(None);
    for pair in values.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        let r = if prev.is_zero() {
            None
        } else {
            cur.checked_div(prev).map(|q| q - Decimal::ONE)
        };
        out.push(r);
    }
    out
}

/// Running product of `(1 + r)` minus one.
///
/// Leading `None`s stay `None`. Once the product has started, a `None` return
/// (or an overflow) makes every later value `None`.
pub fn cumulative_returns(simple: &[Option<Decimal>]) -> Vec<Option<Decimal>> {
    let mut out = Vec::with_capacity(simple.len());
    let mut growth: Option<Decimal> = None;
    let mut started = false;

    for r in simple {
        if !started {
            match r {
                Some(r) => {
                    started = true;
                    growth = Decimal::ONE.checked_add(*r);
                }
                None => {
                    out.push(None);
                    continue;
                }
            }
        } else {
            growth = match (growth, r) {
                (Some(g), Some(r)) => Decimal::ONE.checked_add(*r).and_then(|f| g.checked_mul(f)),
                _ => None,
            };
        }
        out.push(growth.map(|g| g - Decimal::ONE));
    }
    out
}
