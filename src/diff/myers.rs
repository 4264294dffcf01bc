//! Myers' O(ND) difference algorithm in linear space.
//!
//! The search uses the middle-snake bisection, so memory stays linear in
//! the input length whatever the edit distance is.

use std::collections::HashSet;
use std::hash::Hash;
use std::iter::repeat_n;
use std::ops::{Index, IndexMut};

/// One step of an edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// Element present in both sequences.
    Keep,
    /// Element only in the original sequence.
    Delete,
    /// Element only in the modified sequence.
    Insert,
}

/// Computes a shortest edit script turning `old` into `new`.
///
/// Within a changed region deletions come before insertions.
///
/// # Examples
///
/// ```
/// use transchunk::diff::{Edit, edit_script};
///
/// let script = edit_script(&["a", "b", "c"], &["a", "x", "c"]);
/// assert_eq!(script, vec![Edit::Keep, Edit::Delete, Edit::Insert, Edit::Keep]);
/// ```
#[must_use]
pub fn edit_script<T: Eq + Hash>(old: &[T], new: &[T]) -> Vec<Edit> {
    let mut script = Vec::with_capacity(old.len() + new.len());
    let (mut i, mut j) = (0, 0);

    for (a, b) in matching_pairs(old, new) {
        script.extend(repeat_n(Edit::Delete, a - i));
        script.extend(repeat_n(Edit::Insert, b - j));
        script.push(Edit::Keep);
        i = a + 1;
        j = b + 1;
    }
    script.extend(repeat_n(Edit::Delete, old.len() - i));
    script.extend(repeat_n(Edit::Insert, new.len() - j));
    script
}

/// Index pairs of a longest common subsequence, in order.
///
/// Elements found on only one side can never match and are dropped before
/// the search, which makes wholesale rewrites linear.
fn matching_pairs<T: Eq + Hash>(old: &[T], new: &[T]) -> Vec<(usize, usize)> {
    let in_old: HashSet<&T> = old.iter().collect();
    let in_new: HashSet<&T> = new.iter().collect();
    let old_idx: Vec<usize> = (0..old.len()).filter(|&i| in_new.contains(&old[i])).collect();
    let new_idx: Vec<usize> = (0..new.len()).filter(|&j| in_old.contains(&new[j])).collect();
    let old_kept: Vec<&T> = old_idx.iter().map(|&i| &old[i]).collect();
    let new_kept: Vec<&T> = new_idx.iter().map(|&j| &new[j]).collect();

    let max_d = max_d(old_kept.len(), new_kept.len());
    let mut vf = V::new(max_d);
    let mut vb = V::new(max_d);
    let mut pairs = Vec::new();
    conquer(&old_kept, 0, &new_kept, 0, &mut vf, &mut vb, &mut pairs);

    pairs
        .into_iter()
        .map(|(a, b)| (old_idx[a], new_idx[b]))
        .collect()
}

/// Furthest-reaching x per diagonal `k`, indexed from `-max_d` to `max_d`.
struct V {
    offset: isize,
    v: Vec<isize>,
}

impl V {
    #[allow(clippy::cast_possible_wrap)]
    fn new(max_d: usize) -> Self {
        Self {
            offset: max_d as isize,
            v: vec![0; 2 * max_d + 1],
        }
    }
}

impl Index<isize> for V {
    type Output = isize;

    #[allow(clippy::cast_sign_loss)]
    fn index(&self, k: isize) -> &isize {
        &self.v[(k + self.offset) as usize]
    }
}

impl IndexMut<isize> for V {
    #[allow(clippy::cast_sign_loss)]
    fn index_mut(&mut self, k: isize) -> &mut isize {
        &mut self.v[(k + self.offset) as usize]
    }
}

const fn max_d(old_len: usize, new_len: usize) -> usize {
    (old_len + new_len).div_ceil(2) + 1
}

fn common_prefix<T: PartialEq>(old: &[T], new: &[T]) -> usize {
    old.iter().zip(new).take_while(|(a, b)| a == b).count()
}

fn common_suffix<T: PartialEq>(old: &[T], new: &[T]) -> usize {
    old.iter()
        .rev()
        .zip(new.iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

/// Records the matches between `old` and `new`, whose first elements sit
/// at `old_start` and `new_start` in the full sequences.
fn conquer<T: PartialEq>(
    old: &[T],
    old_start: usize,
    new: &[T],
    new_start: usize,
    vf: &mut V,
    vb: &mut V,
    pairs: &mut Vec<(usize, usize)>,
) {
    let prefix = common_prefix(old, new);
    pairs.extend((0..prefix).map(|k| (old_start + k, new_start + k)));

    let (old, new) = (&old[prefix..], &new[prefix..]);
    let suffix = common_suffix(old, new);
    let old = &old[..old.len() - suffix];
    let new = &new[..new.len() - suffix];
    let (old_start, new_start) = (old_start + prefix, new_start + prefix);

    if !old.is_empty()
        && !new.is_empty()
        && let Some((x, y)) = middle_snake(old, new, vf, vb)
    {
        conquer(&old[..x], old_start, &new[..y], new_start, vf, vb, pairs);
        conquer(&old[x..], old_start + x, &new[y..], new_start + y, vf, vb, pairs);
    }

    pairs.extend((0..suffix).map(|k| (old_start + old.len() + k, new_start + new.len() + k)));
}

/// Finds a split point on an optimal path by searching forward from the
/// top-left and backward from the bottom-right until the two meet.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn middle_snake<T: PartialEq>(old: &[T], new: &[T], vf: &mut V, vb: &mut V) -> Option<(usize, usize)> {
    let n = old.len() as isize;
    let m = new.len() as isize;
    let delta = n - m;
    let odd = delta & 1 == 1;

    vf[1] = 0;
    vb[1] = 0;

    for d in 0..max_d(old.len(), new.len()) as isize {
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let y = x - k;
            let (x0, y0) = (x, y);
            if x < n && (0..m).contains(&y) {
                x += common_prefix(&old[x as usize..], &new[y as usize..]) as isize;
            }
            vf[k] = x;

            if odd && (k - delta).abs() < d && vf[k] + vb[-(k - delta)] >= n {
                return Some((x0 as usize, y0 as usize));
            }
        }

        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let mut y = x - k;
            if x < n && (0..m).contains(&y) {
                let advance =
                    common_suffix(&old[..(n - x) as usize], &new[..(m - y) as usize]) as isize;
                x += advance;
                y += advance;
            }
            vb[k] = x;

            if !odd && (k - delta).abs() <= d && vb[k] + vf[-(k - delta)] >= n {
                return Some(((n - x) as usize, (m - y) as usize));
            }
        }
    }

    None
}
