//! Integration tests for plan construction
//!
//! These tests check the structural properties every plan must satisfy,
//! across all versions, levels and masks: grid size, role partition,
//! function pattern placement, format/version info and mask flags.

use qr_plan::encoder::bch::{self, FORMAT_GENERATOR};
use qr_plan::encoder::format::{FORMAT_MASK, read_format};
use qr_plan::encoder::version::{read_version, version_info};
use qr_plan::{ECLevel, MaskPattern, PixelRole, Plan, PlanError, Version, build_plan};

fn plan(version: u8, level: ECLevel, mask: MaskPattern) -> Plan {
    build_plan(version, level, mask).expect("valid version")
}

fn all_versions() -> impl Iterator<Item = u8> {
    Version::MIN..=Version::MAX
}

#[test]
fn test_grid_side_for_every_version() {
    for v in all_versions() {
        let p = plan(v, ECLevel::M, MaskPattern::Pattern0);
        assert_eq!(p.size(), 4 * v as usize + 17);
        assert_eq!(p.grid.rows().count(), p.size());
        assert!(p.grid.rows().all(|row| row.len() == p.size()));
    }
}

#[test]
fn test_invalid_versions_rejected() {
    for v in [0u8, 41, 100, 255] {
        assert_eq!(
            build_plan(v, ECLevel::L, MaskPattern::Pattern0),
            Err(PlanError::InvalidVersion(v))
        );
    }
}

#[test]
fn test_roles_partition_the_grid() {
    for v in all_versions() {
        let p = plan(v, ECLevel::H, MaskPattern::Pattern5);
        let total: usize = PixelRole::ALL.iter().map(|&r| p.grid.count_role(r)).sum();
        assert_eq!(total, p.size() * p.size());
        assert_eq!(p.grid.count_role(PixelRole::None), 0, "version {}", v);
        // Finder box plus separator is 8x8 at every corner
        assert_eq!(p.grid.count_role(PixelRole::Position), 3 * 64);
        assert_eq!(p.grid.count_role(PixelRole::Format), 30);
        assert_eq!(p.grid.count_role(PixelRole::DarkModule), 1);
    }
}

#[test]
fn test_format_round_trip_all_levels_and_masks() {
    for v in [1u8, 7, 40] {
        for level in ECLevel::ALL {
            for mask in MaskPattern::ALL {
                let p = plan(v, level, mask);
                let (top_left, split) = read_format(&p.grid);
                assert_eq!(top_left, split, "v{} {} {}", v, level, mask);

                let codeword = (top_left ^ FORMAT_MASK) as u32;
                let info = codeword >> 10;
                assert_eq!(info, ((level.format_bits() as u32) << 3) | mask.id() as u32);
                let recomputed = bch::remainder(info << 10, FORMAT_GENERATOR, 10);
                assert_eq!(codeword & 0x3ff, recomputed);
                assert!(bch::is_codeword(codeword, FORMAT_GENERATOR, 10));
            }
        }
    }
}

#[test]
fn test_level_m_mask0_draws_xor_constant() {
    let p = plan(1, ECLevel::M, MaskPattern::Pattern0);
    assert_eq!(read_format(&p.grid), (0x5412, 0x5412));
}

#[test]
fn test_mask_is_deterministic() {
    for mask in MaskPattern::ALL {
        let a = plan(9, ECLevel::Q, mask);
        let b = plan(9, ECLevel::Q, mask);
        let flags = |p: &Plan| -> Vec<bool> {
            p.grid
                .iter()
                .filter(|(_, _, px)| px.role().is_maskable())
                .map(|(_, _, px)| px.is_inverted())
                .collect()
        };
        assert_eq!(flags(&a), flags(&b));
        assert_eq!(a, b);
    }
}

#[test]
fn test_invert_follows_mask_formula() {
    for mask in MaskPattern::ALL {
        let p = plan(2, ECLevel::L, mask);
        for (x, y, px) in p.grid.iter() {
            if px.role() == PixelRole::Data {
                assert_eq!(px.is_inverted(), mask.is_masked(y, x), "mask {} at ({}, {})", mask, x, y);
                assert!(!px.is_black());
            }
        }
    }
}

#[test]
fn test_function_patterns_independent_of_mask_and_level() {
    let base = plan(12, ECLevel::L, MaskPattern::Pattern0);
    for level in ECLevel::ALL {
        for mask in MaskPattern::ALL {
            let other = plan(12, level, mask);
            for ((_, _, a), (_, _, b)) in base.grid.iter().zip(other.grid.iter()) {
                assert_eq!(a.role(), b.role());
                if !matches!(a.role(), PixelRole::Data | PixelRole::Check | PixelRole::Format) {
                    assert_eq!(a, b);
                }
            }
        }
    }
}

#[test]
fn test_finder_patterns_at_three_corners() {
    for v in all_versions() {
        let p = plan(v, ECLevel::M, MaskPattern::Pattern2);
        let size = p.size();
        for (x0, y0) in [(0, 0), (size - 7, 0), (0, size - 7)] {
            for dy in 0..7 {
                for dx in 0..7 {
                    let px = p.grid.get(x0 + dx, y0 + dy);
                    assert_eq!(px.role(), PixelRole::Position);
                    // Chebyshev ring distance from the center: 3 and 0-1 dark, 2 light
                    let ring = (dx as isize - 3).abs().max((dy as isize - 3).abs());
                    assert_eq!(px.is_dark(), ring != 2, "v{} corner ({}, {})", v, x0, y0);
                }
            }
        }
    }
}

#[test]
fn test_alignment_boxes_avoid_finder_zones() {
    for v in all_versions() {
        let p = plan(v, ECLevel::L, MaskPattern::Pattern0);
        let size = p.size();
        let zone = |x: usize, y: usize| {
            (x < 8 && y < 8) || (x >= size - 8 && y < 8) || (x < 8 && y >= size - 8)
        };
        for (x, y, px) in p.grid.iter() {
            if px.role() == PixelRole::Alignment {
                assert!(!zone(x, y), "v{} alignment at ({}, {})", v, x, y);
            }
        }

        // n centers per axis give n*n boxes minus the three finder corners
        let n = match v {
            1 => 0,
            _ => v as usize / 7 + 2,
        };
        let boxes = if n == 0 { 0 } else { n * n - 3 };
        assert_eq!(p.grid.count_role(PixelRole::Alignment), 25 * boxes, "version {}", v);
    }
}

#[test]
fn test_version1_scenario() {
    let p = plan(1, ECLevel::L, MaskPattern::Pattern0);
    assert_eq!(p.size(), 21);
    assert_eq!(p.grid.count_role(PixelRole::Alignment), 0);
    assert_eq!(p.grid.count_role(PixelRole::VersionInfo), 0);
    assert!(p.grid.get(0, 0).is_dark());
    assert!(p.grid.get(20, 0).is_dark());
    assert!(p.grid.get(0, 20).is_dark());
    assert_eq!(p.grid.get(20, 20).role(), PixelRole::Data);
}

#[test]
fn test_version_info_blocks() {
    for v in all_versions() {
        let p = plan(v, ECLevel::M, MaskPattern::Pattern1);
        let version = p.version;
        match version_info(version) {
            Some(word) => {
                assert_eq!(p.grid.count_role(PixelRole::VersionInfo), 36);
                assert_eq!(read_version(&p.grid), (word, word));
                assert_eq!(word >> 12, v as u32);
            }
            None => assert_eq!(p.grid.count_role(PixelRole::VersionInfo), 0),
        }
    }
}

#[test]
fn test_codeword_capacity() {
    let total = |v: u8| plan(v, ECLevel::L, MaskPattern::Pattern0).total_bytes();
    assert_eq!(total(1), 26);
    assert_eq!(total(2), 44);
    assert_eq!(total(7), 196);
    assert_eq!(total(40), 3706);

    // Version 2 leaves 7 remainder bits
    let p = plan(2, ECLevel::M, MaskPattern::Pattern0);
    assert_eq!(p.grid.count_role(PixelRole::Data), 44 * 8 + 7);

    let p = plan(1, ECLevel::L, MaskPattern::Pattern0);
    assert_eq!((p.data_bytes, p.check_bytes, p.blocks), (19, 7, 1));
    let p = plan(1, ECLevel::H, MaskPattern::Pattern0);
    assert_eq!((p.data_bytes, p.check_bytes, p.blocks), (9, 17, 1));
    let p = plan(40, ECLevel::L, MaskPattern::Pattern0);
    assert_eq!((p.data_bytes, p.check_bytes, p.blocks), (2956, 750, 25));
    let p = plan(40, ECLevel::H, MaskPattern::Pattern0);
    assert_eq!((p.data_bytes, p.check_bytes, p.blocks), (1276, 2430, 81));
}

#[test]
fn test_capacity_positive_everywhere() {
    for v in all_versions() {
        for level in ECLevel::ALL {
            let p = plan(v, level, MaskPattern::Pattern0);
            assert!(p.data_bytes > 0);
            assert_eq!(p.total_bytes(), p.grid.count_role(PixelRole::Data) / 8);
        }
    }
}

#[test]
fn test_text_dump() {
    let p = plan(1, ECLevel::M, MaskPattern::Pattern0);
    let text = p.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 21);
    assert!(lines.iter().all(|l| l.chars().count() == 21));
    assert!(lines[0].starts_with("#######."));
}
