/// Mask application (sets the invert flag on Data/Check pixels)
use crate::models::{MaskPattern, Plan};

/// Record `mask` on the plan and flag every Data/Check pixel it covers.
///
/// Black flags are left alone: the payload writer fills them later and the
/// renderer XORs in the invert flag.
pub fn apply_mask(plan: &mut Plan, mask: MaskPattern) {
    plan.mask = mask;
    let mut flagged = 0usize;
    for (y, row) in plan.grid.rows_mut().enumerate() {
        for (x, pix) in row.iter_mut().enumerate() {
            if pix.role().is_maskable() && mask.is_masked(y, x) {
                pix.set_invert(true);
                flagged += 1;
            }
        }
    }
    log::debug!("mask: id={} inverted={}", mask, flagged);
}
