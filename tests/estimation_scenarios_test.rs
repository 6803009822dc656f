use model_cost_estimator::core::recommendations::{COMPLEX_TIPS, MODERATE_TIPS, SIMPLE_TIPS};
use model_cost_estimator::core::report::format_money;
use model_cost_estimator::{estimate, recommend, Material, ProjectSpec};

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn tips(band: [&str; 2]) -> Vec<String> {
    band.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_small_plastic_project() {
    let spec = ProjectSpec::new(10.0, 10.0, "Plastic", 5);
    let (total, breakdown) = estimate(&spec);

    assert_close(breakdown.base_cost, 5.0);
    assert_close(breakdown.material_cost, 5.0);
    assert_close(breakdown.complexity_cost, 5.0);
    assert_close(total, 15.0);
    assert_eq!(recommend(5), tips(MODERATE_TIPS));
}

#[test]
fn test_large_metal_project() {
    let spec = ProjectSpec::new(50.0, 20.0, Material::Metal, 2);
    let (total, breakdown) = estimate(&spec);

    assert_close(breakdown.base_cost, 50.0);
    assert_close(breakdown.material_cost, 75.0);
    assert_close(breakdown.complexity_cost, 20.0);
    assert_close(total, 145.0);
    assert_eq!(recommend(2), tips(SIMPLE_TIPS));
}

#[test]
fn test_tiny_wood_project() {
    let spec = ProjectSpec::new(1.0, 1.0, "Wood", 10);
    let (total, breakdown) = estimate(&spec);

    assert_eq!(format_money(breakdown.base_cost), "$ 0.05");
    assert_eq!(format_money(breakdown.material_cost), "$ 0.06");
    assert_eq!(format_money(breakdown.complexity_cost), "$ 0.10");
    assert_eq!(format_money(total), "$ 0.21");
    assert_eq!(recommend(10), tips(COMPLEX_TIPS));
}

#[test]
fn test_unrecognized_material_prices_like_plastic() {
    let resin = ProjectSpec::new(30.0, 40.0, "Resin", 6);
    let plastic = ProjectSpec::new(30.0, 40.0, "Plastic", 6);

    assert_eq!(estimate(&resin), estimate(&plastic));
}

#[test]
fn test_repeated_estimates_are_identical() {
    let spec = ProjectSpec::new(33.3, 71.7, "Metal", 7);

    let first = (estimate(&spec), recommend(i64::from(spec.complexity)));
    for _ in 0..10 {
        let again = (estimate(&spec), recommend(i64::from(spec.complexity)));
        assert_eq!(first, again);
    }
}

#[test]
fn test_total_is_sum_of_breakdown_for_all_inputs() {
    for material in ["Plastic", "Metal", "Wood", "Glass"] {
        for complexity in 1..=10u8 {
            for (width, length) in [(1.0, 1.0), (17.5, 42.0), (100.0, 100.0)] {
                let spec = ProjectSpec::new(width, length, material, complexity);
                let (total, breakdown) = estimate(&spec);
                assert_eq!(total, breakdown.total());
                assert!(total >= breakdown.base_cost);
                assert_eq!(breakdown.base_cost, width * length * 0.05);
            }
        }
    }
}
