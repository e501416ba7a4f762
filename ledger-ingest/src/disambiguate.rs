//! Map a run of 1-3 amounts onto (debit, credit, balance).
//!
//! | count | LTR                     | RTL                     |
//! |-------|-------------------------|-------------------------|
//! | 3     | (debit, credit, balance)| (balance, credit, debit)|
//! | 2     | (first, 0, second)      | same                    |
//! | 1     | (0, 0, amount)          | same                    |

use ledger_core::Direction;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountTriple {
    pub debit: f64,
    pub credit: f64,
    pub balance: f64,
}

impl AmountTriple {
    pub fn is_zero(&self) -> bool {
        self.debit == 0.0 && self.credit == 0.0
    }
}

/// `None` for an empty run. Runs longer than three use the first three.
///
/// The two-amount case cannot tell a debit-only row from a credit-only row;
/// the first amount is always booked as the debit.
pub fn disambiguate(amounts: &[f64], direction: Direction) -> Option<AmountTriple> {
    let triple = match amounts {
        [] => return None,
        [balance] => AmountTriple {
            debit: 0.0,
            credit: 0.0,
            balance: *balance,
        },
        [first, second] => AmountTriple {
            debit: *first,
            credit: 0.0,
            balance: *second,
        },
        [a, b, c, ..] => match direction {
            Direction::Ltr => AmountTriple {
                debit: *a,
                credit: *b,
                balance: *c,
            },
            Direction::Rtl => AmountTriple {
                debit: *c,
                credit: *b,
                balance: *a,
            },
        },
    };
    Some(triple)
}

/// Alternate-format pre-step for an untagged pair:
/// negative then positive gets a zero credit slotted in; two positives become
/// `(0, smaller, larger)`; anything else is left alone.
pub fn reorder_alternate_pair(first: f64, second: f64) -> Vec<f64> {
    if first < 0.0 && second > 0.0 {
        vec![first, 0.0, second]
    } else if first > 0.0 && second > 0.0 {
        vec![0.0, first.min(second), first.max(second)]
    } else {
        vec![first, second]
    }
}
