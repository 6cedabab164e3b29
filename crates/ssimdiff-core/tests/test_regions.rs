mod common;

use ndarray::Array2;

use ssimdiff_core::compute::cpu::CpuBackend;
use ssimdiff_core::detection::{
    bounding_rect, find_external_boundaries, scale_to_u8, threshold_binary_inv, Boundary,
};
use ssimdiff_core::ssim::extract_regions;
use ssimdiff_core::Region;

use common::mask_from_rows;

fn rects(mask: &Array2<u8>) -> Vec<Region> {
    find_external_boundaries(mask)
        .iter()
        .map(bounding_rect)
        .collect()
}

fn region(x: u32, y: u32, width: u32, height: u32) -> Region {
    Region {
        x,
        y,
        width,
        height,
    }
}

// ---------------------------------------------------------------------------
// Threshold
// ---------------------------------------------------------------------------

#[test]
fn test_threshold_binary_inv_cutoff() {
    let data = Array2::from_shape_vec((1, 5), vec![0u8, 100, 253, 254, 255]).unwrap();
    let mask = threshold_binary_inv(&data, 254, 255);
    assert_eq!(mask.as_slice().unwrap(), &[255, 255, 255, 0, 0]);
}

#[test]
fn test_scale_to_u8_rounds_and_saturates() {
    let data = Array2::from_shape_vec((1, 5), vec![1.0f32, 0.998, 0.5, -0.1, 1.2]).unwrap();
    let bytes = scale_to_u8(&data, 255.0);
    assert_eq!(bytes.as_slice().unwrap(), &[255, 254, 128, 0, 255]);
}

// ---------------------------------------------------------------------------
// External boundaries
// ---------------------------------------------------------------------------

#[test]
fn test_empty_mask_has_no_boundaries() {
    let mask = Array2::<u8>::zeros((10, 10));
    assert!(find_external_boundaries(&mask).is_empty());
}

#[test]
fn test_single_blob() {
    let mask = mask_from_rows(&[
        "......", //
        ".##...", //
        ".###..", //
        "..#...", //
        "......",
    ]);
    assert_eq!(rects(&mask), vec![region(1, 1, 3, 3)]);
}

#[test]
fn test_diagonal_pixels_are_one_region() {
    let mask = mask_from_rows(&[
        "#...", //
        ".#..", //
        "..#.", //
        "...#",
    ]);
    assert_eq!(rects(&mask), vec![region(0, 0, 4, 4)]);
}

#[test]
fn test_separate_blobs_in_raster_order() {
    let mask = mask_from_rows(&[
        "........", //
        ".....##.", //
        ".....##.", //
        "........", //
        ".#......", //
        "##......",
    ]);
    assert_eq!(
        rects(&mask),
        vec![region(5, 1, 2, 2), region(0, 4, 2, 2)]
    );
}

#[test]
fn test_region_inside_hole_is_not_reported() {
    let mask = mask_from_rows(&[
        ".........", //
        ".#######.", //
        ".#.....#.", //
        ".#..#..#.", //
        ".#.....#.", //
        ".#######.", //
        ".........",
    ]);
    assert_eq!(rects(&mask), vec![region(1, 1, 7, 5)]);
}

#[test]
fn test_nested_rings_report_outermost_only() {
    let mask = mask_from_rows(&[
        "#########", //
        "#.......#", //
        "#.#####.#", //
        "#.#...#.#", //
        "#.#####.#", //
        "#.......#", //
        "#########",
    ]);
    assert_eq!(rects(&mask), vec![region(0, 0, 9, 7)]);
}

#[test]
fn test_blob_inside_open_shape_is_reported() {
    let mask = mask_from_rows(&[
        "#####", //
        "#...#", //
        "#.#.#", //
        "#...#", //
        "##.##",
    ]);
    assert_eq!(
        rects(&mask),
        vec![region(0, 0, 5, 5), region(2, 2, 1, 1)]
    );
}

#[test]
fn test_region_touching_border() {
    let mask = mask_from_rows(&[
        "##..", //
        "##..", //
        "....",
    ]);
    let boundaries = find_external_boundaries(&mask);
    assert_eq!(boundaries.len(), 1);
    assert_eq!(boundaries[0].points.len(), 4);
    assert_eq!(bounding_rect(&boundaries[0]), region(0, 0, 2, 2));
}

#[test]
fn test_solid_block_boundary_excludes_interior() {
    let mask = mask_from_rows(&[
        ".....", //
        ".###.", //
        ".###.", //
        ".###.", //
        ".....",
    ]);
    let boundaries = find_external_boundaries(&mask);
    assert_eq!(boundaries.len(), 1);
    assert_eq!(boundaries[0].points.len(), 8);
    assert!(!boundaries[0].points.contains(&(2, 2)));
}

#[test]
fn test_bounding_rect_of_empty_boundary() {
    assert_eq!(bounding_rect(&Boundary::default()), region(0, 0, 0, 0));
}

// ---------------------------------------------------------------------------
// Region extraction from similarity maps
// ---------------------------------------------------------------------------

#[test]
fn test_extract_regions_finds_dissimilar_block() {
    let mut map = Array2::from_elem((30, 40), 1.0f32);
    for row in 10..15 {
        for col in 20..28 {
            map[[row, col]] = 0.5;
        }
    }
    let regions = extract_regions(&CpuBackend, &map, &map, &map);
    assert_eq!(regions, vec![region(20, 10, 8, 5)]);
}

#[test]
fn test_extract_regions_ignores_near_perfect_similarity() {
    // 0.999 * 255 rounds to 255, above the 254 cutoff.
    let map = Array2::from_elem((16, 16), 0.999f32);
    let regions = extract_regions(&CpuBackend, &map, &map, &map);
    assert!(regions.is_empty());
}

#[test]
fn test_extract_regions_weights_channels_by_luminance() {
    // A poor blue channel alone: 0.299 + 0.587 + 0.114 * 0.9 = 0.9886 -> 252.
    let ones = Array2::from_elem((12, 12), 1.0f32);
    let blue = Array2::from_elem((12, 12), 0.9f32);
    let regions = extract_regions(&CpuBackend, &ones, &ones, &blue);
    assert_eq!(regions, vec![region(0, 0, 12, 12)]);
}
