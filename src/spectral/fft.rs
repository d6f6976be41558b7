//! Recursive radix-2 Cooley-Tukey transform.
//!
//! `fft_recurse` splits the sequence into even- and odd-indexed halves,
//! recurses on each with the squared root of unity, then merges with a
//! running twiddle factor. The caller-supplied workspace holds the two
//! halves during the merge; at the next recursion level the roles of data
//! and workspace swap, so a single buffer of the full length serves the
//! whole call tree without further allocation.

use std::f64::consts::PI;

use num_complex::Complex64;

fn fft_recurse(a: &mut [Complex64], omega: Complex64, wsp: &mut [Complex64]) {
    let n = a.len();
    if n < 2 {
        return;
    }
    let half = n / 2;
    let (even, odd) = wsp[..n].split_at_mut(half);
    for i in 0..half {
        even[i] = a[2 * i];
        odd[i] = a[2 * i + 1];
    }
    let omega_sq = omega * omega;
    // the halves of `a` serve as workspace for the sub-transforms
    fft_recurse(even, omega_sq, &mut a[..half]);
    fft_recurse(odd, omega_sq, &mut a[half..]);
    let mut x = Complex64::new(1.0, 0.0);
    for i in 0..half {
        let h = x * odd[i];
        a[i] = even[i] + h;
        a[i + half] = even[i] - h;
        x *= omega;
    }
}

/// In-place forward transform. `values.len()` must be a power of two and
/// `wsp` at least as long.
pub(crate) fn forward(values: &mut [Complex64], wsp: &mut [Complex64]) {
    let n = values.len();
    let omega = Complex64::from_polar(1.0, -2.0 * PI / n as f64);
    fft_recurse(values, omega, wsp);
}

/// In-place inverse transform, including the division by n.
pub(crate) fn inverse(values: &mut [Complex64], wsp: &mut [Complex64]) {
    let n = values.len();
    let omega = Complex64::from_polar(1.0, 2.0 * PI / n as f64);
    fft_recurse(values, omega, wsp);
    for v in values.iter_mut() {
        *v /= n as f64;
    }
}
