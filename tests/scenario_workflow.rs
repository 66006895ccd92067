use agrovolt::io::{Scenario, read_scenario, write_scenario};
use agrovolt::{EstimatorConfig, Geometry, GeometryParameter, Recommendation, sweep};
use anyhow::Result;
use tempfile::tempdir;

#[test]
fn scenario_file_to_estimate() -> Result<()> {
    let dir = tempdir()?;
    let scenario_path = dir.path().join("farm.json");
    let config_path = dir.path().join("estimator.toml");

    let mut scenario = Scenario::template();
    scenario.project.crop_id = "tomato".to_string();
    scenario.geometry = Geometry::new(250.0, 800.0, 50.0, 25.0);
    write_scenario(&scenario_path, &scenario)?;
    std::fs::write(&config_path, "feed_in_tariff_per_kwh = 0.9\n")?;

    let config = EstimatorConfig::load(&config_path)?;
    let session = read_scenario(&scenario_path)?.into_session(config)?;
    let estimate = session.result().expect("tomato is a built-in crop");

    assert_eq!(estimate.crop_id, "tomato");
    let expected_energy_revenue = estimate.energy.annual_production_kwh * 0.9;
    assert!((estimate.economics.energy_revenue - expected_energy_revenue).abs() < 1e-6);

    // Tomato grows to 180 cm, so 250 cm panels lack the 100 cm clearance.
    assert_eq!(
        estimate.recommendations.first(),
        Some(&Recommendation::RaisePanels {
            minimum_height_cm: 280.0
        })
    );
    Ok(())
}

#[test]
fn session_follows_slider_changes() -> Result<()> {
    let mut session = Scenario::template().into_session(EstimatorConfig::new())?;
    let mut last_shading = 0.0;
    for coverage in [20.0, 30.0, 40.0, 50.0, 60.0] {
        let geometry = session.geometry().with(GeometryParameter::GroundCoverage, coverage);
        let estimate = session.set_geometry(geometry)?.expect("template crop resolves");
        assert!(estimate.agriculture.shading_pct > last_shading);
        last_shading = estimate.agriculture.shading_pct;
    }
    Ok(())
}

#[test]
fn sweep_over_scenario() -> Result<()> {
    let session = Scenario::template().into_session(EstimatorConfig::new())?;
    let project = session.project();
    let crop = session.crops().find(&project.crop_id).expect("crop");
    let region = session.region().expect("region");

    let result = sweep(
        project,
        crop,
        region,
        session.geometry(),
        GeometryParameter::PanelHeight,
        4,
        session.config(),
    )?;
    assert_eq!(result.points.len(), 4);
    let heights: Vec<f64> = result.points.iter().map(|p| p.value).collect();
    assert_eq!(heights, vec![200.0, 300.0, 400.0, 500.0]);
    assert!(result.best_roi().is_some());
    Ok(())
}
