use std::path::PathBuf;

use boxpack::{Capacity, CsvExporter, Error, Packer, PackingReport, Strategy, Weight};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("boxpack-test-{}-{name}", std::process::id()));
    path
}

#[test]
fn zero_and_negative_weights_are_rejected_at_construction() {
    for value in [0.0, -3.0] {
        match Weight::new(value) {
            Err(Error::InvalidWeight { value: reported }) => assert_eq!(reported, value),
            other => panic!("expected InvalidWeight for {value}, got {other:?}"),
        }
    }
}

#[test]
fn non_finite_weights_are_rejected_at_construction() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            Weight::new(value),
            Err(Error::InvalidWeight { .. })
        ));
    }
}

#[test]
fn invalid_capacity_fails_engine_construction() {
    for value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            Packer::with_capacity(value, Strategy::FirstFit),
            Err(Error::InvalidCapacity { .. })
        ));
        assert!(matches!(
            Capacity::new(value),
            Err(Error::InvalidCapacity { .. })
        ));
    }
}

#[test]
fn invalid_weight_in_batch_mutates_nothing() {
    let mut packer = Packer::with_capacity(10.0, Strategy::FirstFit).expect("valid capacity");

    // Scenario: a bad value in the middle of the batch.
    let result = packer.pack_values(&[5.0, -3.0, 2.0]);
    assert!(matches!(result, Err(Error::InvalidWeight { value }) if value == -3.0));
    assert_eq!(packer.container_count(), 0, "no container may be created");

    let result = packer.pack_values(&[0.0]);
    assert!(matches!(result, Err(Error::InvalidWeight { .. })));
    assert_eq!(packer.container_count(), 0);
}

#[test]
fn oversized_item_is_rejected_without_opening_a_container() {
    for strategy in [Strategy::FirstFit, Strategy::BestFit] {
        let mut packer = Packer::with_capacity(10.0, strategy).expect("valid capacity");

        let result = packer.pack_values(&[12.0]);
        match result {
            Err(Error::OversizedItem { weight, capacity }) => {
                assert!(approx_eq(weight, 12.0));
                assert!(approx_eq(capacity, 10.0));
            }
            other => panic!("expected OversizedItem, got {other:?}"),
        }
        assert_eq!(packer.container_count(), 0);
    }
}

#[test]
fn oversized_item_mid_batch_keeps_earlier_placements() {
    let mut packer = Packer::with_capacity(10.0, Strategy::FirstFit).expect("valid capacity");

    let result = packer.pack_values(&[5.0, 12.0, 3.0]);
    assert!(matches!(result, Err(Error::OversizedItem { .. })));

    // Items before the oversized one stay packed; nothing after it ran.
    assert_eq!(packer.container_count(), 1);
    assert!(approx_eq(packer.total_weight(), 5.0));
}

#[test]
fn unknown_strategy_tag_fails_to_parse() {
    match "worst-fit".parse::<Strategy>() {
        Err(Error::ParseStrategy { input, expected }) => {
            assert_eq!(input, "worst-fit");
            assert!(expected.contains("first-fit"));
            assert!(expected.contains("best-fit"));
        }
        other => panic!("expected ParseStrategy, got {other:?}"),
    }
}

#[test]
fn report_captures_containers_and_aggregates() {
    let mut packer = Packer::with_capacity(10.0, Strategy::BestFit).expect("valid capacity");
    packer.pack_values(&[6.0, 5.0, 4.0]).expect("items fit");

    let report = PackingReport::from_packer(&packer);
    assert_eq!(report.strategy, "best-fit");
    assert!(approx_eq(report.capacity, 10.0));
    assert_eq!(report.container_count, 2);
    assert!(approx_eq(report.total_weight, 15.0));
    assert!(approx_eq(report.average_fill_ratio, 0.75));

    assert_eq!(report.containers[0].index, 1);
    assert_eq!(report.containers[0].items, vec![6.0, 4.0]);
    assert!(approx_eq(report.containers[0].load, 10.0));
    assert!(approx_eq(report.containers[0].remaining, 0.0));
    assert_eq!(report.containers[1].items, vec![5.0]);
}

#[test]
fn report_round_trips_through_json() {
    let mut packer = Packer::with_capacity(10.0, Strategy::FirstFit).expect("valid capacity");
    packer.pack_values(&[5.0, 5.0, 5.0]).expect("items fit");

    let report = PackingReport::from_packer(&packer);
    let json = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(json["strategy"], "first-fit");
    assert_eq!(json["container_count"], 2);
    assert_eq!(json["containers"][0]["items"][0], 5.0);
}

#[test]
fn csv_export_writes_one_row_per_container() {
    let mut packer = Packer::with_capacity(10.0, Strategy::FirstFit).expect("valid capacity");
    packer.pack_values(&[5.0, 5.0, 5.0]).expect("items fit");
    let report = PackingReport::from_packer(&packer);

    let path = temp_path("export.csv");
    let rows = CsvExporter::export(&report, &path).expect("export succeeds");
    assert_eq!(rows, 2);

    let contents = std::fs::read_to_string(&path).expect("file exists");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3, "header plus one row per container");
    assert!(lines[0].starts_with("container,item_count,load"));
    assert!(lines[1].starts_with("1,2,10"));
    assert!(lines[2].starts_with("2,1,5"));

    std::fs::remove_file(&path).ok();
}
