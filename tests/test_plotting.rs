#[cfg(test)]
mod test_plotting {
    use revkin::{
        plotting::{CONCENTRATION_TITLE, QUOTIENT_TITLE},
        prelude::*,
    };
    use serde_json::Value;

    fn plot_json(plot: &plotly::Plot) -> Value {
        serde_json::from_str(&plot.to_json()).expect("Plot is not valid JSON")
    }

    #[test]
    fn test_concentration_plot() {
        // ARRANGE
        let result = KineticsModel::with_grid(1.0, 1.0, 1.0, 0.0, 5.0, 100)
            .unwrap()
            .simulate();

        // ACT
        let plot = result
            .plot_concentrations(&PlotConfig::default())
            .expect("Failed to plot concentrations");

        // ASSERT
        let json = plot_json(&plot);
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["name"], "Reactant");
        assert_eq!(data[1]["name"], "Product");
        assert_eq!(data[0]["x"].as_array().unwrap().len(), 100);

        let layout = json["layout"].to_string();
        assert!(layout.contains(CONCENTRATION_TITLE));
        assert!(layout.contains("Time / s"));
        assert!(layout.contains("Concentration / mol/l"));
    }

    #[test]
    fn test_quotient_plot_skips_non_finite_samples() {
        // [A]0 = 0 makes the first quotient sample infinite
        let result = KineticsModel::with_grid(1.0, 1.0, 0.0, 1.0, 5.0, 100)
            .unwrap()
            .simulate();

        let plot = result
            .plot_quotient(&PlotConfig::default())
            .expect("Failed to plot reaction quotient");

        let json = plot_json(&plot);
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["name"], "Q");
        assert_eq!(data[0]["x"].as_array().unwrap().len(), 99);
        assert_eq!(data[0]["y"].as_array().unwrap().len(), 99);
        assert!(json["layout"].to_string().contains(QUOTIENT_TITLE));
    }

    #[test]
    fn test_plot_config_overrides() {
        let result = KineticsModel::new(2.0, 1.0, 1.0, 0.0).unwrap().simulate();
        let config = PlotConfig {
            time_unit: "min".to_string(),
            concentration_unit: "mmol/l".to_string(),
            show_title: false,
            ..PlotConfig::default()
        };

        let layout = plot_json(&result.plot_concentrations(&config).unwrap())["layout"].to_string();

        assert!(layout.contains("Time / min"));
        assert!(layout.contains("Concentration / mmol/l"));
        assert!(!layout.contains(CONCENTRATION_TITLE));
    }

    #[test]
    fn test_write_html() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("concentration.html");
        let result = KineticsModel::new(1.0, 1.0, 1.0, 0.0).unwrap().simulate();

        write_html(
            &result.plot_concentrations(&PlotConfig::default()).unwrap(),
            &path,
        )
        .unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("Reactant"));
    }

    #[test]
    fn test_write_html_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("plot.html");
        let result = KineticsModel::new(1.0, 1.0, 1.0, 0.0).unwrap().simulate();
        let plot = result.plot_quotient(&PlotConfig::default()).unwrap();

        assert!(matches!(
            write_html(&plot, &path),
            Err(PlotError::WriteError { .. })
        ));
    }
}
