//! Memory barrier utilities

use core::sync::atomic::{compiler_fence, Ordering};

/// Insert a compiler fence to prevent reordering
#[inline(always)]
pub fn compiler_fence_seq_cst() {
    compiler_fence(Ordering::SeqCst);
}
