//! Property-based tests for u-nntour.
//!
//! Uses proptest to verify tour and loader invariants across random inputs.

use proptest::prelude::*;
use u_nntour::geometry::{distance, tour_length, City};
use u_nntour::loader::{load_str, parse_record, LoaderConfig};
use u_nntour::nn::{build_tour, NnConfig, NnRunner};

// ============================================================================
// Strategies
// ============================================================================

fn random_city() -> impl Strategy<Value = City> {
    ("[a-zA-Z]{1,8}", -1000.0..1000.0f64, -1000.0..1000.0f64)
        .prop_map(|(name, x, y)| City::new(name, x, y))
}

/// 0 to 40 cities.
fn random_cities() -> impl Strategy<Value = Vec<City>> {
    prop::collection::vec(random_city(), 0..40)
}

/// Cities on a small integer grid, so exact distance ties are frequent.
fn grid_cities() -> impl Strategy<Value = Vec<City>> {
    prop::collection::vec((0i32..5, 0i32..5), 1..25).prop_map(|pts| {
        pts.into_iter()
            .enumerate()
            .map(|(i, (x, y))| City::new(format!("g{i}"), x as f64, y as f64))
            .collect()
    })
}

// ============================================================================
// Distance Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_distance_symmetric(a in random_city(), b in random_city()) {
        prop_assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn prop_distance_non_negative(a in random_city(), b in random_city()) {
        prop_assert!(distance(&a, &b) >= 0.0);
    }

    #[test]
    fn prop_distance_zero_to_self(a in random_city()) {
        prop_assert_eq!(distance(&a, &a), 0.0);
    }
}

// ============================================================================
// Tour Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_tour_is_closed_permutation(cities in random_cities()) {
        let n = cities.len();
        let tour = build_tour(&cities);

        if n == 0 {
            prop_assert!(tour.is_empty());
            prop_assert_eq!(tour.total_distance(), 0.0);
        } else {
            let order = tour.order();
            prop_assert_eq!(order.len(), n + 1);
            prop_assert_eq!(tour.cities().len(), n + 1);
            prop_assert_eq!(order[0], 0);
            prop_assert_eq!(order[n], order[0]);

            let mut seen = vec![false; n];
            for &i in &order[..n] {
                prop_assert!(!seen[i], "index {} visited twice", i);
                seen[i] = true;
            }
            prop_assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn prop_tour_cities_follow_order(cities in random_cities()) {
        let tour = build_tour(&cities);
        for (city, &i) in tour.cities().iter().zip(tour.order()) {
            prop_assert_eq!(city, &cities[i]);
        }
    }

    #[test]
    fn prop_total_matches_independent_sum(cities in random_cities()) {
        let tour = build_tour(&cities);
        let independent = tour_length(tour.cities());
        let tolerance = 1e-9 * independent.max(1.0);
        prop_assert!(
            (tour.total_distance() - independent).abs() <= tolerance,
            "running total {} vs recomputed {}",
            tour.total_distance(),
            independent
        );
    }

    #[test]
    fn prop_each_step_is_nearest_lowest_index(cities in grid_cities()) {
        let tour = build_tour(&cities);
        let order = tour.order();
        let n = cities.len();
        let mut visited = vec![false; n];
        visited[order[0]] = true;

        for step in 1..n {
            let from = &cities[order[step - 1]];
            let chosen = order[step];
            let d_chosen = distance(from, &cities[chosen]);
            for j in 0..n {
                if visited[j] || j == chosen {
                    continue;
                }
                let d = distance(from, &cities[j]);
                prop_assert!(d >= d_chosen, "city {} is nearer than chosen {}", j, chosen);
                if d == d_chosen {
                    prop_assert!(j > chosen, "tie with lower index {} than chosen {}", j, chosen);
                }
            }
            visited[chosen] = true;
        }
    }

    #[test]
    fn prop_deterministic(cities in random_cities()) {
        prop_assert_eq!(build_tour(&cities), build_tour(&cities));
    }

    #[test]
    fn prop_runner_start_is_respected(
        cities in prop::collection::vec(random_city(), 1..30),
        pick in any::<prop::sample::Index>(),
    ) {
        let start = pick.index(cities.len());
        let tour = NnRunner::run(&cities, &NnConfig::default().with_start(start)).unwrap();
        let order = tour.order();
        prop_assert_eq!(order[0], start);
        prop_assert_eq!(order[cities.len()], start);
    }
}

// ============================================================================
// Loader Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_decimal_comma_equals_dot(
        name in "[a-zA-Z ]{0,12}",
        xi in -10_000i64..10_000,
        xf in 0u32..1000,
        yi in -10_000i64..10_000,
        yf in 0u32..1000,
    ) {
        let config = LoaderConfig::default();
        let comma = format!("{name}|{xi},{xf:03}|{yi},{yf:03}");
        let dot = format!("{name}|{xi}.{xf:03}|{yi}.{yf:03}");
        prop_assert_eq!(parse_record(&comma, &config), parse_record(&dot, &config));
        prop_assert!(parse_record(&dot, &config).is_ok());
    }

    #[test]
    fn prop_wrong_field_count_excluded(fields in prop::collection::vec("[0-9]{1,3}", 0..7)) {
        prop_assume!(fields.len() != 3);
        let line = fields.join("|");
        let text = format!("A|1|2\n{line}\nB|3|4\n");
        let cities = load_str(&text, &LoaderConfig::default()).unwrap();
        let names: Vec<&str> = cities.iter().map(City::name).collect();
        prop_assert_eq!(names, vec!["A", "B"]);
    }
}
