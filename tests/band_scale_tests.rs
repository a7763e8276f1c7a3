use approx::assert_relative_eq;
use filter_chart::ChartError;
use filter_chart::core::{BandScale, LinearScale};

#[test]
fn rounded_band_layout_matches_reference_chart() {
    let scale = BandScale::new(["USA", "India", "China", "Germany"], 0.0, 600.0)
        .expect("band scale")
        .with_padding(0.1)
        .expect("padding")
        .with_round(true);

    assert_eq!(scale.step(), 146.0);
    assert_eq!(scale.bandwidth(), 131.0);
    assert_eq!(scale.position("USA"), Some(15.0));
    assert_eq!(scale.position("India"), Some(161.0));
    assert_eq!(scale.position("China"), Some(307.0));
    assert_eq!(scale.position("Germany"), Some(453.0));
    assert_eq!(scale.position("France"), None);
}

#[test]
fn unrounded_band_layout_centers_bands() {
    let scale = BandScale::new(["a", "b", "c"], 0.0, 120.0)
        .expect("band scale")
        .with_padding(0.2)
        .expect("padding");

    // step = 120 / (3 - 0.2 + 0.4) = 37.5
    assert_relative_eq!(scale.step(), 37.5);
    assert_relative_eq!(scale.bandwidth(), 30.0);
    assert_relative_eq!(scale.position("a").expect("a"), 7.5);
    assert_relative_eq!(scale.position("c").expect("c"), 82.5);
}

#[test]
fn duplicate_domain_entries_collapse() {
    let scale = BandScale::new(["a", "b", "a"], 0.0, 100.0).expect("band scale");
    assert_eq!(scale.domain().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn descending_range_flips_band_order() {
    let scale = BandScale::new(["a", "b"], 100.0, 0.0).expect("band scale");
    assert_eq!(scale.position("a"), Some(50.0));
    assert_eq!(scale.position("b"), Some(0.0));
}

#[test]
fn invalid_padding_is_rejected() {
    let err = BandScale::new(["a"], 0.0, 10.0)
        .expect("band scale")
        .with_padding(1.0)
        .expect_err("padding of 1 leaves no band");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn linear_scale_maps_values_to_inverted_pixels() {
    let scale = LinearScale::new(0.0, 15.0, 370.0, 0.0).expect("linear scale");

    assert_relative_eq!(scale.map(0.0).expect("zero"), 370.0);
    assert_relative_eq!(scale.map(15.0).expect("top"), 0.0);
    assert_relative_eq!(scale.map(12.0).expect("twelve"), 74.0, epsilon = 1e-9);

    let px = scale.map(6.0).expect("six");
    assert_relative_eq!(scale.invert(px).expect("invert"), 6.0, epsilon = 1e-9);
}

#[test]
fn linear_scale_rejects_degenerate_domain() {
    let err = LinearScale::new(3.0, 3.0, 0.0, 100.0).expect_err("zero span");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let scale = LinearScale::new(0.0, 1.0, 0.0, 100.0).expect("linear scale");
    assert!(scale.map(f64::NAN).is_err());
}
