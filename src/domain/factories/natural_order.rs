//! Natural string ordering.
//!
//! Runs of ASCII digits compare by numeric value, so `Beta2` sorts before
//! `Beta10`. A run that starts with `0` is read as a fraction and compared
//! digit by digit from the left, so `Beta01` sorts before `Beta1` and
//! `Beta010` before `Beta9`. Everything else compares byte-wise and
//! case-sensitively.

use std::cmp::Ordering;

/// Compare two strings in natural order.
///
/// The result is a total order: a final byte-wise comparison separates
/// anything the natural comparison leaves tied.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_cmp_bytes(a.as_bytes(), b.as_bytes()).then_with(|| a.cmp(b))
}

fn natural_cmp_bytes(a: &[u8], b: &[u8]) -> Ordering {
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let (run_a, next_i) = digit_run(a, i);
            let (run_b, next_j) = digit_run(b, j);
            let ordering = if run_a[0] == b'0' || run_b[0] == b'0' {
                compare_fractional_runs(run_a, run_b)
            } else {
                compare_digit_runs(run_a, run_b)
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
            i = next_i;
            j = next_j;
            continue;
        }

        match a[i].cmp(&b[j]) {
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
            ordering => return ordering,
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

fn digit_run(bytes: &[u8], start: usize) -> (&[u8], usize) {
    let end = bytes[start..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(bytes.len(), |offset| start + offset);
    (&bytes[start..end], end)
}

/// Runs without a leading zero: the longer run is the larger number.
fn compare_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Runs with a leading zero compare left-aligned; a run that ends first is smaller.
fn compare_fractional_runs(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}
