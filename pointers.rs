//! Three independent axes of immutability for a reference binding.
//!
//! | binding | Rust                 | repoint | write referent |
//! |---------|----------------------|---------|----------------|
//! | `p`     | `let mut p: &i32`    | yes     | no             |
//! | `ptr`   | `let ptr: &mut i32`  | no      | yes            |
//! | `qtr`   | `let qtr: &i32`      | no      | no             |
//!
//! None of these carry runtime behaviour. The distinctions are enforced by
//! the compiler, see the rejected snippets on [`declare`].

use log::debug;

/// What the three bindings read after the permitted operations ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observed {
    pub p: i32,
    pub ptr: i32,
    pub qtr: i32,
}

/// Declares `p`, `ptr` and `qtr` over `a` and `b`, then does only what each
/// binding allows: `p` is repointed from `a` to `b`, `b` is incremented
/// through `ptr`, and `qtr` is read.
///
/// ```
/// use scoped_ownership::pointers::{declare, Observed};
///
/// assert_eq!(declare(5, 10), Observed { p: 11, ptr: 11, qtr: 5 });
/// ```
///
/// Writing through `p` is rejected, even though `p` itself can be repointed:
///
/// ```compile_fail,E0594
/// let a = 5;
/// let mut p: &i32 = &a;
/// *p = 6;
/// ```
///
/// Repointing `ptr` is rejected:
///
/// ```compile_fail,E0384
/// let (mut b, mut c) = (10, 20);
/// let ptr: &mut i32 = &mut b;
/// ptr = &mut c;
/// ```
///
/// And `qtr` allows neither:
///
/// ```compile_fail,E0594
/// let a = 5;
/// let qtr: &i32 = &a;
/// *qtr = 6;
/// ```
///
/// ```compile_fail,E0384
/// let (a, b) = (5, 10);
/// let qtr: &i32 = &a;
/// qtr = &b;
/// ```
pub fn declare(a: i32, b: i32) -> Observed {
    let mut b = b;

    let mut p: &i32 = &a; // Reference to an immutable int
    let ptr: &mut i32 = &mut b; // Fixed binding to a mutable int
    let qtr: &i32 = &a; // Fixed binding to an immutable int

    debug!("p reads {}, qtr reads {}", *p, *qtr);

    *ptr += 1;
    let through_ptr = *ptr;

    // `ptr` is no longer used, so `b` can be borrowed shared again.
    p = &b;

    Observed {
        p: *p,
        ptr: through_ptr,
        qtr: *qtr,
    }
}
