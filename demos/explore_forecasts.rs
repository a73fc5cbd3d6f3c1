// Walks through the forecasting models on a small price history
use tracing_subscriber::EnvFilter;
use vault_forecast_workspace::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Exploring vault forecast models\n");

    let series: Vec<PricePoint> = [
        45_000.0, 46_000.0, 47_000.0, 48_000.0, 49_000.0, 50_000.0, 51_000.0, 52_000.0, 53_000.0,
        54_000.0,
    ]
    .iter()
    .enumerate()
    .map(|(i, &price)| PricePoint::new(1_700_000_000_000 + i as i64 * 86_400_000, price))
    .collect();

    let prices: Vec<f64> = series.iter().map(|p| p.price).collect();
    let returns = calculate_returns(&prices);
    let daily_vol = calculate_volatility(&returns);
    println!("Daily volatility: {:.4}", daily_vol);
    println!(
        "Mean daily return annualized: {:.2}%\n",
        annualize(vault_math::mean(&returns), 365.0) * 100.0
    );

    let params = ForecastParams::new(30).with_window(7);
    for kind in ModelKind::ALL {
        let model = kind.model();
        println!(
            "=== {} (needs {} points) ===",
            model.name(),
            model.min_points(&params)
        );
        match model.project(&series, &params) {
            Projection::Ready(result) => println!("{}", result),
            Projection::InsufficientData(shortfall) => println!("{}\n", shortfall),
        }
    }

    println!("Done exploring");
    Ok(())
}
