/// XOR-fold of a sequence of integers, identity 0 for the empty sequence.
///
/// When every value except one appears an even number of times, the paired
/// duplicates cancel (a ^ a == 0) and the odd one out survives. The fold is
/// total: any finite sequence produces a deterministic value.
pub fn xor_fold(values: &[i64]) -> i64 {
    values.iter().fold(0, |acc, v| acc ^ v)
}
