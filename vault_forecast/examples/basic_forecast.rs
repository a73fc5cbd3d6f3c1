use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use tracing_subscriber::EnvFilter;
use vault_forecast::{holdout_evaluation, project_all, ForecastParams, PricePoint, Projection};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("Vault Forecast: Basic Forecasting Example");
    println!("=========================================\n");

    let series = create_sample_daily_data(120)?;
    println!("Sample data created: {} daily points\n", series.len());

    let params = ForecastParams::from_json(r#"{"horizonDays":30,"window":14,"alpha":0.2}"#)?;
    params.validate()?;

    for (kind, outcome) in project_all(&series, &params) {
        match outcome {
            Projection::Ready(result) => {
                println!("{}", result);
                let model = kind.model();
                if let Projection::Ready(accuracy) =
                    holdout_evaluation(model.as_ref(), &series, &params)?
                {
                    println!("Hold-out ({} days):\n{}", params.horizon_days, accuracy);
                }
            }
            Projection::InsufficientData(shortfall) => println!("{}: {}\n", kind, shortfall),
        }
    }

    // A fresh feed with only a few days of history
    let young = &series[..5];
    for (kind, outcome) in project_all(young, &params) {
        if let Some(shortfall) = outcome.shortfall() {
            println!("{} on {} points: {}", kind, young.len(), shortfall);
        }
    }

    Ok(())
}

/// Random walk with a slight upward drift
fn create_sample_daily_data(days: usize) -> Result<Vec<PricePoint>, rand_distr::NormalError> {
    let mut rng = StdRng::seed_from_u64(42);
    let shocks = Normal::new(0.001, 0.015)?;
    let start_ms = 1_704_067_200_000; // 2024-01-01

    let mut price = 2_300.0;
    Ok((0..days)
        .map(|i| {
            price *= 1.0 + shocks.sample(&mut rng);
            PricePoint::new(start_ms + i as i64 * 86_400_000, price)
        })
        .collect())
}
