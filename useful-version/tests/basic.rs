use std::cmp::Ordering;
use useful_version::{compare, equal, greater, greater_or_equal, less, less_or_equal};

const SAMPLES: [&str; 12] = [
    "0", "1", "1.0", "1.2", "1.2.0", "1.10", "2.9", "2.10", "2.10.3", "11.2", "13.0", "1.a",
];

#[test]
fn compare_is_reflexive() {
    for version in SAMPLES {
        assert_eq!(compare(version, version), Ordering::Equal, "{version}");
    }
}

#[test]
fn compare_is_antisymmetric() {
    for a in SAMPLES {
        for b in SAMPLES {
            assert_eq!(compare(a, b), compare(b, a).reverse(), "{a} vs {b}");
        }
    }
}

#[test]
fn trailing_zero_components_are_padding() {
    assert_eq!(compare("1.2", "1.2.0"), Ordering::Equal);
    assert_eq!(compare("1.0", "1"), Ordering::Equal);
    assert_eq!(compare("1.2.0.0", "1.2"), Ordering::Equal);
    assert_eq!(compare("1.2.0.1", "1.2"), Ordering::Greater);
}

#[test]
fn comparison_is_numeric_not_lexicographic() {
    assert_eq!(compare("2.10", "2.9"), Ordering::Greater);
    assert_eq!(compare("2.9", "2.10"), Ordering::Less);
    assert_eq!(compare("10.0", "9.3.5"), Ordering::Greater);
    assert_eq!(compare("11.2", "11.10"), Ordering::Less);
}

#[test]
fn first_differing_component_decides() {
    assert_eq!(compare("1.9.9", "2.0.0"), Ordering::Less);
    assert_eq!(compare("3.1.0", "3.0.9"), Ordering::Greater);
}

#[test]
fn malformed_segments_compare_as_zero() {
    assert_eq!(compare("1.a", "1.0"), Ordering::Equal);
    assert_eq!(compare("1.a", "1.1"), Ordering::Less);
    assert_eq!(compare("", "0.0"), Ordering::Equal);
    assert!(equal("13.beta", "13"));
}

#[test]
fn signed_segments_are_malformed() {
    assert_eq!(compare("1.+2", "1.2"), Ordering::Less);
    assert_eq!(compare("1.+2", "1.0"), Ordering::Equal);
    assert_eq!(compare("-1", "0"), Ordering::Equal);
}

#[test]
fn predicates_follow_compare() {
    assert!(equal("11.2", "11.2.0"));
    assert!(!equal("11.2", "11.3"));
    assert!(greater("13.0", "12.4"));
    assert!(!greater("13.0", "13"));
    assert!(greater_or_equal("13.0", "13"));
    assert!(greater_or_equal("13.1", "13"));
    assert!(!greater_or_equal("12.9", "13"));
    assert!(less("12.9", "13"));
    assert!(!less("13", "13.0"));
    assert!(less_or_equal("13", "13.0"));
    assert!(!less_or_equal("13.0.1", "13"));
}

#[test]
fn inclusive_predicates_negate_strict_ones() {
    for a in SAMPLES {
        for b in SAMPLES {
            assert_eq!(greater_or_equal(a, b), !less(a, b), "{a} vs {b}");
            assert_eq!(less_or_equal(a, b), !greater(a, b), "{a} vs {b}");
        }
    }
}

#[test]
fn compare_is_safe_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|minor| {
            std::thread::spawn(move || compare(&format!("2.{minor}"), "2.2"))
        })
        .collect();
    let results: Vec<Ordering> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(
        results,
        vec![Ordering::Less, Ordering::Less, Ordering::Equal, Ordering::Greater]
    );
}
