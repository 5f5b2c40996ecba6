mod common;

#[test]
fn test_generate_scenarios_csv() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("scenarios.csv");
    common::generate_scenarios(&output_path, 5).expect("Failed to generate CSV");

    let content = std::fs::read_to_string(&output_path).expect("Failed to read file");
    // Header + 5 rows = 6 lines
    assert_eq!(content.lines().count(), 6);
}

#[test]
fn test_generated_scenarios_stay_in_range() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("scenarios.csv");
    common::generate_scenarios(&output_path, 200).expect("Failed to generate CSV");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(&output_path)
        .expect("Failed to open CSV");

    for result in reader.records() {
        let record = result.expect("Failed to read record");
        let principal: f64 = record[0].parse().expect("Failed to parse principal");
        let rate: f64 = record[1].parse().expect("Failed to parse rate");
        let years: u32 = record[2].parse().expect("Failed to parse years");

        assert!((100.0..=900.0).contains(&principal));
        assert_eq!(principal % 50.0, 0.0);
        assert!((0.01..=0.15).contains(&rate));
        assert!((5..=30).contains(&years));
    }
}
