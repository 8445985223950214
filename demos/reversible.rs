use revkin::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Same defaults as the interactive page: kf = kb = 1, [A]0 = 1, [B]0 = 0
    let params = ReactionParametersBuilder::default()
        .kf(1.0)
        .kb(1.0)
        .a0(1.0)
        .b0(0.0)
        .duration(5.0)
        .build()?;

    let model = KineticsModel::try_from(params)?;
    println!("{}", model);

    let result = model.simulate();
    println!("{}", result);

    let config = PlotConfig::default();
    write_html(&result.plot_concentrations(&config)?, "concentration.html")?;
    write_html(&result.plot_quotient(&config)?, "quotient.html")?;

    Ok(())
}
