//! Diagnostic views of a plan: role-colored images and per-role statistics.

use image::{Rgb, RgbImage};

use crate::models::{PixelRole, Plan};

/// Colors for a role, as (light, dark) module shades
fn role_colors(role: PixelRole) -> (Rgb<u8>, Rgb<u8>) {
    match role {
        PixelRole::None => (Rgb([255, 0, 255]), Rgb([128, 0, 128])),
        PixelRole::Position => (Rgb([255, 220, 220]), Rgb([160, 0, 0])),
        PixelRole::Alignment => (Rgb([255, 235, 200]), Rgb([180, 90, 0])),
        PixelRole::Timing => (Rgb([220, 255, 220]), Rgb([0, 120, 0])),
        PixelRole::Format => (Rgb([220, 230, 255]), Rgb([0, 40, 170])),
        PixelRole::VersionInfo => (Rgb([220, 250, 255]), Rgb([0, 110, 140])),
        PixelRole::DarkModule => (Rgb([255, 255, 255]), Rgb([60, 60, 60])),
        PixelRole::Data => (Rgb([255, 255, 255]), Rgb([0, 0, 0])),
        PixelRole::Check => (Rgb([240, 240, 240]), Rgb([70, 70, 70])),
    }
}

/// Render the plan with each module shaded by role and rendered color.
///
/// `scale` is image pixels per module and `quiet_zone` the white border in
/// modules.
pub fn role_image(plan: &Plan, scale: usize, quiet_zone: usize) -> RgbImage {
    let scale = scale.max(1);
    let side = (plan.size() + 2 * quiet_zone) * scale;
    let mut img = RgbImage::from_pixel(side as u32, side as u32, Rgb([255, 255, 255]));

    for (x, y, p) in plan.grid.iter() {
        let (light, dark) = role_colors(p.role());
        let color = if p.is_dark() { dark } else { light };
        let x0 = (x + quiet_zone) * scale;
        let y0 = (y + quiet_zone) * scale;
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel((x0 + dx) as u32, (y0 + dy) as u32, color);
            }
        }
    }
    img
}

/// Pixel counts per role, in role order, skipping empty roles
pub fn role_counts(plan: &Plan) -> Vec<(PixelRole, usize)> {
    PixelRole::ALL
        .iter()
        .map(|&role| (role, plan.grid.count_role(role)))
        .filter(|&(_, n)| n > 0)
        .collect()
}
