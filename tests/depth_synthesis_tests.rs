use liquidity_range::core::depth::MAX_SYNTHETIC_DEPTH;
use liquidity_range::core::{
    DEPTH_SAMPLE_COUNT, DepthSample, Domain, depth_axis_extent, synthesize_depth,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn ladder_spans_domain_in_sixteen_steps() {
    let mut rng = StdRng::seed_from_u64(7);
    let domain = Domain::new(0.0, 160.0).expect("domain");

    let ladder = synthesize_depth(domain, &mut rng);

    assert_eq!(ladder.len(), DEPTH_SAMPLE_COUNT);
    let ticks: Vec<f64> = ladder.iter().map(|sample| sample.tick).collect();
    let expected: Vec<f64> = (0..16u32).map(|i| f64::from(i) * 10.0).collect();
    assert_eq!(ticks, expected);
    assert!(ladder.iter().all(|sample| sample.depth < MAX_SYNTHETIC_DEPTH));
}

#[test]
fn same_seed_gives_same_ladder() {
    let domain = Domain::new(10.0, 20.0).expect("domain");
    let first = synthesize_depth(domain, &mut StdRng::seed_from_u64(3));
    let second = synthesize_depth(domain, &mut StdRng::seed_from_u64(3));
    assert_eq!(first, second);
}

#[test]
fn depth_axis_extent_adds_headroom() {
    let samples = [
        DepthSample {
            tick: 1.0,
            depth: 10,
        },
        DepthSample {
            tick: 2.0,
            depth: 500,
        },
    ];
    assert_eq!(depth_axis_extent(&samples), 600.0);
    assert_eq!(depth_axis_extent(&[]), 0.0);
}
