use super::*;

fn gray(v: u8) -> Rgba8 {
    Rgba8::new(v, v, v, v)
}

fn row(values: &[u8]) -> Grid {
    Grid::from_pixels(values.len() as u32, 1, values.iter().map(|&v| gray(v)).collect()).unwrap()
}

fn column(values: &[u8]) -> Grid {
    Grid::from_pixels(1, values.len() as u32, values.iter().map(|&v| gray(v)).collect()).unwrap()
}

fn red_channel(g: &Grid) -> Vec<u8> {
    g.pixels().iter().map(|px| px.r).collect()
}

fn run_horizontal(g: &mut Grid, radius: u32) {
    let kernel = Kernel::new(radius, Narrowing::Truncate);
    let mut ring = RingBuffer::new(kernel.radius());
    horizontal_pass(g, &mut ring, &kernel);
}

fn run_vertical(g: &mut Grid, radius: u32) {
    let kernel = Kernel::new(radius, Narrowing::Truncate);
    let mut ring = RingBuffer::new(kernel.radius());
    vertical_pass(g, &mut ring, &kernel);
}

/// Direct O(radius) triangular convolution with edge clamping, one channel.
fn triangular_reference(values: &[u8], radius: usize) -> Vec<u8> {
    let n = values.len() as i64;
    let r = radius as i64;
    let divsum = ((r + 1) * (r + 1)) as u64;
    (0..n)
        .map(|x| {
            let mut sum = 0u64;
            for d in -r..=r {
                let idx = (x + d).clamp(0, n - 1) as usize;
                sum += u64::from(values[idx]) * (r + 1 - d.abs()) as u64;
            }
            (sum / divsum) as u8
        })
        .collect()
}

fn pseudo_random(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (state >> 56) as u8
        })
        .collect()
}

#[test]
fn kernel_constants_follow_radius() {
    let k = Kernel::new(1, Narrowing::Truncate);
    assert_eq!((k.sum_factor, k.divsum), (3, 4));
    let k = Kernel::new(4, Narrowing::Clamp);
    assert_eq!((k.sum_factor, k.divsum), (15, 25));
    let k = Kernel::new(0, Narrowing::Truncate);
    assert_eq!((k.sum_factor, k.divsum), (1, 1));
}

#[test]
fn horizontal_impulse_matches_hand_computation() {
    let mut g = row(&[0, 255, 0, 0, 0]);
    run_horizontal(&mut g, 1);
    assert_eq!(red_channel(&g), vec![63, 127, 63, 0, 0]);
}

#[test]
fn vertical_impulse_matches_hand_computation() {
    let mut g = column(&[0, 255, 0, 0, 0]);
    run_vertical(&mut g, 1);
    assert_eq!(red_channel(&g), vec![63, 127, 63, 0, 0]);
}

#[test]
fn radius_zero_scan_is_identity() {
    let values = pseudo_random(17, 7);
    let mut g = row(&values);
    run_horizontal(&mut g, 0);
    run_vertical(&mut g, 0);
    assert_eq!(red_channel(&g), values);
}

#[test]
fn horizontal_pass_matches_direct_convolution() {
    for radius in [1usize, 2, 3, 5, 12, 40] {
        let values = pseudo_random(23, radius as u64);
        let mut g = row(&values);
        run_horizontal(&mut g, radius as u32);
        assert_eq!(
            red_channel(&g),
            triangular_reference(&values, radius),
            "radius {radius}"
        );
    }
}

#[test]
fn vertical_pass_matches_direct_convolution() {
    for radius in [1usize, 4, 30] {
        let values = pseudo_random(19, 100 + radius as u64);
        let mut g = column(&values);
        run_vertical(&mut g, radius as u32);
        assert_eq!(
            red_channel(&g),
            triangular_reference(&values, radius),
            "radius {radius}"
        );
    }
}

#[test]
fn vertical_pass_treats_columns_independently() {
    // 2 columns x 3 rows; left column impulse, right column flat.
    let px = [gray(0), gray(9), gray(255), gray(9), gray(0), gray(9)];
    let mut g = Grid::from_pixels(2, 3, px.to_vec()).unwrap();
    run_vertical(&mut g, 1);
    let left: Vec<u8> = (0..3).map(|y| g.get(0, y).unwrap().r).collect();
    let right: Vec<u8> = (0..3).map(|y| g.get(1, y).unwrap().r).collect();
    assert_eq!(left, triangular_reference(&[0, 255, 0], 1));
    assert_eq!(right, vec![9, 9, 9]);
}

#[test]
fn channels_are_blurred_independently() {
    let px = vec![
        Rgba8::new(255, 0, 10, 255),
        Rgba8::new(0, 255, 10, 0),
        Rgba8::new(255, 0, 10, 255),
    ];
    let mut g = Grid::from_pixels(3, 1, px).unwrap();
    run_horizontal(&mut g, 1);
    assert_eq!(g.get(1, 0), Some(Rgba8::new(127, 127, 10, 127)));
}
